//! # Authentication Configuration Module
//!
//! 카카오 OAuth, JWT 세션 토큰, 관리자 PIN 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### 카카오 OAuth 설정
//! ```bash
//! export KAKAO_CLIENT_ID="your-rest-api-key"
//! export KAKAO_CLIENT_SECRET="your-client-secret"     # 선택
//! export KAKAO_REDIRECT_URI="http://localhost:3000/auth/kakao/callback"
//! export KAKAO_ADMIN_KEY="your-admin-key"             # 관리자 사용자 목록 조회용
//! ```
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! ### 관리자 설정
//! ```bash
//! export ADMIN_PIN="123456"          # 6자리 숫자
//! export ADMIN_SESSION_HOURS="8"
//! ```
//!
//! 카카오 설정은 누락되어도 서버가 기동되며, 로그인 요청 시점에
//! `카카오 설정이 올바르지 않습니다.` 에러로 응답합니다.

use std::env;

use crate::core::errors::AppError;

/// 카카오 설정 누락 시 사용자에게 노출되는 메시지
pub const KAKAO_CONFIG_ERROR: &str = "카카오 설정이 올바르지 않습니다.";

/// 카카오 OAuth 환경 변수 리더
pub struct KakaoOAuthConfig;

impl KakaoOAuthConfig {
    /// REST API 키 (OAuth client_id)
    pub fn client_id() -> Option<String> {
        non_empty_var("KAKAO_CLIENT_ID")
    }

    /// 클라이언트 시크릿. 카카오 앱 설정에서 사용하지 않으면 비워둡니다.
    pub fn client_secret() -> Option<String> {
        non_empty_var("KAKAO_CLIENT_SECRET")
    }

    pub fn redirect_uri() -> Option<String> {
        non_empty_var("KAKAO_REDIRECT_URI")
    }

    /// 어드민 키. 사용자 ID 목록 API 호출에 사용합니다.
    ///
    /// 이 값을 로그에 출력하지 마세요.
    pub fn admin_key() -> Option<String> {
        non_empty_var("KAKAO_ADMIN_KEY")
    }

    pub fn auth_uri() -> String {
        env::var("KAKAO_AUTH_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/authorize".to_string())
    }

    pub fn token_uri() -> String {
        env::var("KAKAO_TOKEN_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/token".to_string())
    }

    pub fn user_info_uri() -> String {
        env::var("KAKAO_USER_INFO_URI")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v2/user/me".to_string())
    }

    pub fn user_ids_uri() -> String {
        env::var("KAKAO_USER_IDS_URI")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v1/user/ids".to_string())
    }

    pub fn scope() -> String {
        env::var("KAKAO_SCOPE").unwrap_or_else(|_| "profile_nickname,account_email".to_string())
    }
}

/// 카카오 연동에 필요한 설정 스냅샷
///
/// 서비스 생성 시점에 한 번 읽어 주입합니다.
#[derive(Debug, Clone, Default)]
pub struct KakaoSettings {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub admin_key: Option<String>,
    pub auth_uri: String,
    pub token_uri: String,
    pub user_info_uri: String,
    pub user_ids_uri: String,
    pub scope: String,
}

impl KakaoSettings {
    pub fn from_env() -> Self {
        let settings = Self {
            client_id: KakaoOAuthConfig::client_id(),
            client_secret: KakaoOAuthConfig::client_secret(),
            redirect_uri: KakaoOAuthConfig::redirect_uri(),
            admin_key: KakaoOAuthConfig::admin_key(),
            auth_uri: KakaoOAuthConfig::auth_uri(),
            token_uri: KakaoOAuthConfig::token_uri(),
            user_info_uri: KakaoOAuthConfig::user_info_uri(),
            user_ids_uri: KakaoOAuthConfig::user_ids_uri(),
            scope: KakaoOAuthConfig::scope(),
        };

        if settings.client_id.is_none() || settings.redirect_uri.is_none() {
            log::warn!("⚠️ KAKAO_CLIENT_ID 또는 KAKAO_REDIRECT_URI 미설정: 카카오 로그인이 비활성화됩니다");
        }

        settings
    }

    /// 로그인에 필요한 (client_id, redirect_uri) 를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 둘 중 하나라도 비어 있는 경우
    pub fn login_credentials(&self) -> Result<(&str, &str), AppError> {
        match (self.client_id.as_deref(), self.redirect_uri.as_deref()) {
            (Some(client_id), Some(redirect_uri)) => Ok((client_id, redirect_uri)),
            _ => Err(AppError::InternalError(KAKAO_CONFIG_ERROR.to_string())),
        }
    }

    pub fn admin_key(&self) -> Result<&str, AppError> {
        self.admin_key
            .as_deref()
            .ok_or_else(|| AppError::InternalError(KAKAO_CONFIG_ERROR.to_string()))
    }
}

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "sportsx-dev-secret".to_string()
        })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// 관리자 대시보드 설정
pub struct AdminConfig;

impl AdminConfig {
    pub const DEFAULT_PIN: &'static str = "010905";

    /// 관리자 대시보드 진입 PIN (6자리)
    ///
    /// 운영 환경에서도 기본값으로 동작하지만 경고를 남깁니다.
    pub fn pin() -> String {
        non_empty_var("ADMIN_PIN").unwrap_or_else(|| {
            log::warn!("ADMIN_PIN not set, using default admin PIN (not secure for production!)");
            Self::DEFAULT_PIN.to_string()
        })
    }

    pub fn session_hours() -> i64 {
        env::var("ADMIN_SESSION_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|h: &i64| *h > 0)
            .unwrap_or(8)
    }
}

/// 인증 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Kakao,

    /// 관리자 PIN 세션
    Admin,
}

impl AuthProvider {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "kakao" => Ok(AuthProvider::Kakao),
            "admin" => Ok(AuthProvider::Admin),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Kakao => "kakao",
            AuthProvider::Admin => "admin",
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(AuthProvider::from_str("kakao").unwrap(), AuthProvider::Kakao);
        assert_eq!(AuthProvider::from_str("ADMIN").unwrap(), AuthProvider::Admin);

        assert!(AuthProvider::from_str("google").is_err());
    }

    #[test]
    fn test_auth_provider_serialization() {
        let json = serde_json::to_string(&AuthProvider::Kakao).unwrap();
        assert_eq!(json, "\"kakao\"");

        let parsed: AuthProvider = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, AuthProvider::Admin);
    }

    #[test]
    fn test_missing_kakao_settings_are_reported() {
        let settings = KakaoSettings::default();

        let err = settings.login_credentials().unwrap_err();
        assert_eq!(err.message(), KAKAO_CONFIG_ERROR);
        assert!(settings.admin_key().is_err());
    }

    #[test]
    fn test_complete_kakao_settings() {
        let settings = KakaoSettings {
            client_id: Some("rest-key".to_string()),
            redirect_uri: Some("http://localhost:3000/auth/kakao/callback".to_string()),
            ..KakaoSettings::default()
        };

        let (client_id, redirect_uri) = settings.login_credentials().unwrap();
        assert_eq!(client_id, "rest-key");
        assert!(redirect_uri.ends_with("/callback"));
    }
}
