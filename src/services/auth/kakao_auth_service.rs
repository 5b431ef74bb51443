//! 카카오 OAuth 로그인 서비스
//!
//! 인가 코드 하나로 로그인 전체를 처리합니다.
//!
//! ```text
//! 콜백 코드 ─▶ 코드 선점 (10분) ─▶ 토큰 교환 ─▶ 프로필 조회
//!           ─▶ 사용자 upsert ─▶ 세션 토큰 발급 ─▶ 저장 예약 반영 ─▶ LoginResponse
//! ```
//!
//! 같은 인가 코드로 두 번째 요청이 오면 교환을 다시 시도하지 않고 `ConflictError` 로 끝납니다.
//! 카카오 호출 실패는 재시도하지 않습니다.

use std::sync::Arc;

use log::{info, warn};
use serde_json::Value;

use crate::caching::client_state::{keys, ClientStateStore};
use crate::config::KakaoSettings;
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::dto::users::{KakaoLoginRequest, LoginResponse, LoginUrlResponse, PendingSaveResult, UserResponse};
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::LoginProfile;
use crate::services::analytics::{events, EventReporter};
use crate::services::auth::kakao_api::KakaoApi;
use crate::services::auth::token_service::TokenService;
use crate::services::jobs::JobService;
use crate::services::likes::LikeService;
use crate::services::users::UserService;

/// 인가 코드 선점 유지 시간 (초)
pub const AUTHORIZATION_CODE_TTL_SECONDS: u64 = 600;

pub struct KakaoAuthService {
    kakao: Arc<dyn KakaoApi>,
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
    likes: Arc<LikeService>,
    jobs: Arc<JobService>,
    client_state: Arc<dyn ClientStateStore>,
    events: Arc<dyn EventReporter>,
    settings: KakaoSettings,
}

impl KakaoAuthService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kakao: Arc<dyn KakaoApi>,
        users: Arc<UserService>,
        tokens: Arc<TokenService>,
        likes: Arc<LikeService>,
        jobs: Arc<JobService>,
        client_state: Arc<dyn ClientStateStore>,
        events: Arc<dyn EventReporter>,
        settings: KakaoSettings,
    ) -> Self {
        Self {
            kakao,
            users,
            tokens,
            likes,
            jobs,
            client_state,
            events,
            settings,
        }
    }

    /// 카카오 인가 페이지 URL
    ///
    /// ```text
    /// https://kauth.kakao.com/oauth/authorize?client_id=...&redirect_uri=...&response_type=code&scope=...
    /// ```
    pub fn login_url(&self, state: Option<&str>) -> Result<LoginUrlResponse, AppError> {
        let (client_id, redirect_uri) = self.settings.login_credentials()?;

        let mut auth_url = format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}",
            self.settings.auth_uri,
            urlencoding::encode(client_id),
            urlencoding::encode(redirect_uri),
            self.settings.scope,
        );
        if let Some(state) = state.filter(|s| !s.is_empty()) {
            auth_url.push_str("&state=");
            auth_url.push_str(&urlencoding::encode(state));
        }

        Ok(LoginUrlResponse { auth_url })
    }

    /// 인가 코드로 로그인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 인가 코드 누락
    /// * `AppError::ConflictError` - 이미 사용된 인가 코드
    /// * `AppError::ExternalServiceError` - 카카오 동의 거부, 토큰 교환/프로필 조회 실패
    /// * `AppError::AuthorizationError` - 비활성화된 계정
    pub async fn login(&self, request: &KakaoLoginRequest, client_id: &str) -> Result<LoginResponse, AppError> {
        if let Some(error) = request.error.as_deref() {
            warn!(
                "카카오 인가 거부: {} ({})",
                error,
                request.error_description.as_deref().unwrap_or("-")
            );
            self.events
                .record_event(events::LOGIN_FAILED, &[("reason", error.to_string())]);
            return Err(AppError::ExternalServiceError(
                "카카오 로그인이 취소되었습니다.".to_string(),
            ));
        }

        let code = request
            .code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .ok_or_else(|| AppError::ValidationError("인증 코드가 필요합니다.".to_string()))?;

        self.settings.login_credentials()?;
        self.claim_code(code).await?;

        let profile = match self.fetch_profile(code).await {
            Ok(profile) => profile,
            Err(e) => {
                self.events
                    .record_event(events::LOGIN_FAILED, &[("reason", e.error_code().to_string())]);
                return Err(e);
            }
        };

        let (user, is_new_user) = self.users.upsert_on_login(&profile).await?;
        let issued = self.tokens.issue_for_user(&user)?;
        let needs_onboarding = self.users.needs_onboarding(&user);

        self.events.record_event(
            if is_new_user { events::SIGN_UP } else { events::LOGIN },
            &[("method", "kakao".to_string()), ("user_id", user.id.clone())],
        );
        info!("🔐 카카오 로그인: {} (신규: {})", user.id, is_new_user);

        let pending = self.consume_pending(&user, client_id).await;
        let response = UserResponse::from(user);
        self.remember_session(client_id, &response).await;

        Ok(LoginResponse {
            access_token: issued.access_token,
            token_type: issued.token_type,
            expires_in: issued.expires_in,
            user: response,
            is_new_user,
            needs_onboarding,
            pending,
        })
    }

    /// 클라이언트 세션 사용자 정보를 지웁니다.
    pub async fn logout(&self, client_id: &str) -> Result<(), AppError> {
        self.client_state.remove(client_id, keys::SESSION_USER).await
    }

    async fn claim_code(&self, code: &str) -> Result<(), AppError> {
        let claimed = self
            .client_state
            .set_if_absent(
                keys::OAUTH_SCOPE,
                &keys::authorization_code(code),
                Value::Bool(true),
                AUTHORIZATION_CODE_TTL_SECONDS,
            )
            .await?;

        if claimed {
            Ok(())
        } else {
            warn!("이미 처리된 인가 코드 재사용 시도");
            Err(AppError::ConflictError("이미 처리된 인증 코드입니다.".to_string()))
        }
    }

    async fn fetch_profile(&self, code: &str) -> Result<LoginProfile, AppError> {
        let token = self.kakao.exchange_code(code).await?;
        self.kakao.fetch_profile(&token.access_token).await
    }

    /// 로그인 전 좋아요/공고 저장 예약을 반영합니다. 실패는 로그인을 막지 않습니다.
    async fn consume_pending(&self, user: &User, client_id: &str) -> PendingSaveResult {
        let mut result = PendingSaveResult::default();

        match self.likes.consume_pending(&user.id, client_id).await {
            Ok(liked) => result.liked_article_id = liked,
            Err(e) => warn!("로그인 전 좋아요 반영 실패: {}", e),
        }

        match self.jobs.consume_pending(&user.id, client_id).await {
            Ok(Some((job_id, toast))) => {
                result.saved_job_id = Some(job_id);
                result.toast = Some(toast);
            }
            Ok(None) => {}
            Err(e) => warn!("로그인 전 공고 저장 반영 실패: {}", e),
        }

        result
    }

    async fn remember_session(&self, client_id: &str, user: &UserResponse) {
        let stored = match serde_json::to_value(user).context("세션 사용자 직렬화 실패") {
            Ok(value) => self.client_state.set_value(client_id, keys::SESSION_USER, value).await,
            Err(e) => Err(e),
        };

        if let Err(e) = stored {
            warn!("세션 사용자 저장 실패: {}", e);
        }
    }
}
