//! 요청 단위 사용자 정보
//!
//! `AuthMiddleware` 가 토큰을 검증한 뒤 `AuthenticatedUser` 를 요청 extensions 에 넣고,
//! 핸들러는 아래 추출자로 꺼내 씁니다.
//!
//! - [`AuthenticatedUser`] - 로그인이 필수인 핸들러. 없으면 401
//! - [`OptionalUser`] - 로그인 여부에 따라 계정 기록과 클라이언트 상태 중 하나를 고르는 핸들러
use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;
use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 카카오 사용자 ID. 관리자 PIN 세션은 `admin`
    pub user_id: String,
    pub auth_provider: AuthProvider,
    pub roles: Vec<String>,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            auth_provider: claims.auth_provider,
            roles: claims.roles,
        }
    }
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// PIN 세션은 `users` 컬렉션에 문서가 없습니다
    pub fn is_pin_session(&self) -> bool {
        self.auth_provider == AuthProvider::Admin
    }
}

fn from_extensions(req: &HttpRequest) -> Option<AuthenticatedUser> {
    req.extensions().get::<AuthenticatedUser>().cloned()
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(from_extensions(req).ok_or_else(|| {
            AppError::AuthenticationError("인증되지 않은 요청입니다".to_string()).into()
        }))
    }
}

#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl OptionalUser {
    pub fn user_id(&self) -> Option<&str> {
        self.0.as_ref().map(|user| user.user_id.as_str())
    }
}

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(OptionalUser(from_extensions(req))))
    }
}
