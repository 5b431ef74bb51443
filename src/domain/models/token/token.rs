//! 세션 토큰 클레임
//!
//! 로그인 사용자와 관리자 PIN 세션이 같은 HS256 토큰 형식을 공유합니다.
//! 관리자 세션은 `sub = "admin"`, `roles = ["admin"]` 으로 구분됩니다.
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;

/// 토큰 payload
///
/// | 필드 | 내용 |
/// |------|------|
/// | `sub` | 카카오 사용자 ID 또는 `admin` |
/// | `auth_provider` | 로그인 경로 (`kakao`, `admin`) |
/// | `roles` | 역할 기반 접근 제어에 쓰는 역할 목록 |
/// | `iat`, `exp` | 발급/만료 시각 (Unix timestamp, 초) |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub auth_provider: AuthProvider,
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// `issued_at` 부터 `ttl` 동안 유효한 클레임
    pub fn new(
        subject: &str,
        auth_provider: AuthProvider,
        roles: Vec<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: subject.to_string(),
            auth_provider,
            roles,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }
}

/// 로그인 응답으로 내려가는 토큰
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
    /// 초 단위
    pub expires_in: i64,
}

impl IssuedToken {
    pub fn bearer(access_token: String, ttl: Duration) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: ttl.num_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_window() {
        let now = Utc::now();
        let claims = TokenClaims::new(
            "admin",
            AuthProvider::Admin,
            vec!["admin".to_string()],
            now,
            Duration::hours(2),
        );

        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 7200);
    }

    #[test]
    fn test_bearer_expiry_in_seconds() {
        let issued = IssuedToken::bearer("t".to_string(), Duration::hours(24));
        assert_eq!(issued.token_type, "Bearer");
        assert_eq!(issued.expires_in, 86_400);
    }
}
