//! JWT 세션 토큰 서비스 구현
//!
//! HMAC-SHA256 서명의 단일 액세스 토큰을 발급하고 검증합니다.
//! 카카오 로그인 세션과 관리자 PIN 세션이 같은 토큰 형식을 공유하며,
//! 두 세션은 `roles` 클레임으로만 구분됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};

use crate::config::AuthProvider;
use crate::core::errors::AppError;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::{IssuedToken, TokenClaims};

/// JWT 토큰 관리 서비스
///
/// 비밀 키와 기본 만료 시간은 생성자로 주입됩니다.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// 기본 만료 시간으로 토큰을 발급합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let issued = token_service.issue("4012345678", AuthProvider::Kakao, vec!["user".into()])?;
    /// println!("Expires in: {} seconds", issued.expires_in);
    /// ```
    pub fn issue(
        &self,
        subject: &str,
        provider: AuthProvider,
        roles: Vec<String>,
    ) -> Result<IssuedToken, AppError> {
        self.issue_with_ttl(subject, provider, roles, Duration::hours(self.expiration_hours))
    }

    /// 만료 시간을 지정해 토큰을 발급합니다.
    pub fn issue_with_ttl(
        &self,
        subject: &str,
        provider: AuthProvider,
        roles: Vec<String>,
        ttl: Duration,
    ) -> Result<IssuedToken, AppError> {
        if subject.is_empty() {
            return Err(AppError::InternalError("사용자 ID가 없습니다".to_string()));
        }

        let claims = TokenClaims::new(subject, provider, roles, Utc::now(), ttl);

        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(IssuedToken::bearer(access_token, ttl))
    }

    /// 저장된 사용자의 로그인 토큰. 관리자 역할이 있으면 `admin` 도 포함됩니다.
    pub fn issue_for_user(&self, user: &User) -> Result<IssuedToken, AppError> {
        self.issue(&user.id, user.provider, user.token_roles())
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }

    /// `Authorization: Bearer {token}` 헤더에서 토큰 부분만 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            )),
        }
    }
}
