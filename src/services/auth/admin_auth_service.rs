//! 관리자 PIN 인증 서비스
//!
//! 관리자 대시보드는 6자리 PIN 하나로 진입합니다.
//! PIN 은 SHA-256 다이제스트끼리 비교하고, 성공하면 `admin` 역할을 가진 세션 토큰을 발급합니다.
//! 이후 모든 관리자 API 는 `AuthMiddleware::required_with_role("admin")` 이 토큰의 역할을 검사합니다.

use std::sync::Arc;

use chrono::Duration;
use log::{info, warn};
use sha2::{Digest, Sha256};
use validator::Validate;

use crate::config::AuthProvider;
use crate::core::errors::AppError;
use crate::domain::dto::admin::AdminLoginResponse;
use crate::domain::dto::users::AdminLoginRequest;
use crate::services::analytics::{events, EventReporter};
use crate::services::auth::token_service::TokenService;

/// PIN 세션 토큰의 주체
pub const ADMIN_SUBJECT: &str = "admin";
pub const ADMIN_ROLE: &str = "admin";

pub struct AdminAuthService {
    pin_digest: Vec<u8>,
    session_hours: i64,
    tokens: Arc<TokenService>,
    events: Arc<dyn EventReporter>,
}

fn digest(pin: &str) -> Vec<u8> {
    Sha256::digest(pin.as_bytes()).to_vec()
}

impl AdminAuthService {
    pub fn new(pin: &str, session_hours: i64, tokens: Arc<TokenService>, events: Arc<dyn EventReporter>) -> Self {
        Self {
            pin_digest: digest(pin),
            session_hours,
            tokens,
            events,
        }
    }

    /// # Errors
    ///
    /// * `AppError::ValidationError` - 6자리 숫자가 아님
    /// * `AppError::AuthenticationError` - PIN 불일치
    pub fn login(&self, request: &AdminLoginRequest) -> Result<AdminLoginResponse, AppError> {
        request.validate().map_err(AppError::from_validation)?;

        if digest(request.pin.trim()) != self.pin_digest {
            warn!("관리자 PIN 불일치");
            return Err(AppError::AuthenticationError(
                "관리자 비밀번호가 올바르지 않습니다.".to_string(),
            ));
        }

        let roles = vec![ADMIN_ROLE.to_string()];
        let issued = self.tokens.issue_with_ttl(
            ADMIN_SUBJECT,
            AuthProvider::Admin,
            roles.clone(),
            Duration::hours(self.session_hours),
        )?;

        self.events
            .record_event(events::ADMIN_LOGIN, &[("method", "pin".to_string())]);
        info!("🛡️ 관리자 세션 발급 ({}시간)", self.session_hours);

        Ok(AdminLoginResponse {
            access_token: issued.access_token,
            token_type: issued.token_type,
            expires_in: issued.expires_in,
            roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingReporter, TEST_ADMIN_PIN, TEST_JWT_SECRET};

    fn service() -> (AdminAuthService, Arc<TokenService>, Arc<RecordingReporter>) {
        let tokens = Arc::new(TokenService::new(TEST_JWT_SECRET, 24));
        let events = Arc::new(RecordingReporter::default());
        let service = AdminAuthService::new(TEST_ADMIN_PIN, 8, tokens.clone(), events.clone());
        (service, tokens, events)
    }

    fn pin(value: &str) -> AdminLoginRequest {
        AdminLoginRequest { pin: value.to_string() }
    }

    #[test]
    fn test_correct_pin_issues_admin_token() {
        let (service, tokens, reporter) = service();

        let response = service.login(&pin(TEST_ADMIN_PIN)).unwrap();

        let claims = tokens.verify(&response.access_token).unwrap();
        assert_eq!(claims.sub, ADMIN_SUBJECT);
        assert_eq!(claims.auth_provider, AuthProvider::Admin);
        assert_eq!(claims.roles, vec!["admin".to_string()]);
        assert_eq!(response.expires_in, 8 * 3600);
        assert_eq!(reporter.names(), vec![events::ADMIN_LOGIN.to_string()]);
    }

    #[test]
    fn test_wrong_pin_is_rejected() {
        let (service, _, reporter) = service();

        match service.login(&pin("123456")) {
            Err(AppError::AuthenticationError(message)) => {
                assert_eq!(message, "관리자 비밀번호가 올바르지 않습니다.")
            }
            other => panic!("unexpected result: {:?}", other.map(|r| r.roles)),
        }
        assert!(reporter.names().is_empty());
    }

    #[test]
    fn test_malformed_pin_is_a_validation_error() {
        let (service, _, _) = service();

        assert!(matches!(service.login(&pin("12ab")), Err(AppError::ValidationError(_))));
    }
}
