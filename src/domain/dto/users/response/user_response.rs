use serde::Serialize;

use crate::config::AuthProvider;
use crate::domain::dto::likes::LikeStatsResponse;
use crate::domain::entities::users::onboarding::{CareerStage, Interest, UsagePurpose};
use crate::domain::entities::users::user::{User, UserPreferences, UserRole};

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: Option<String>,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub provider: AuthProvider,
    pub role: UserRole,
    pub is_active: bool,
    pub preferences: UserPreferences,
    pub career_stage: Option<CareerStage>,
    pub interests: Vec<Interest>,
    pub usage_purpose: Option<UsagePurpose>,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            nickname,
            profile_image,
            provider,
            role,
            is_active,
            preferences,
            career_stage,
            interests,
            usage_purpose,
            created_at,
            updated_at,
            last_login_at,
        } = user;

        Self {
            id,
            email,
            nickname,
            profile_image,
            provider,
            role,
            is_active,
            preferences,
            career_stage,
            interests,
            usage_purpose,
            created_at: created_at.to_rfc3339(),
            updated_at: updated_at.to_rfc3339(),
            last_login_at: last_login_at.map(|at| at.to_rfc3339()),
        }
    }
}

/// 로그인 후 저장 대기 중이던 항목을 처리한 결과
#[derive(Debug, Clone, Default, Serialize)]
pub struct PendingSaveResult {
    /// 로그인 전에 좋아요를 누른 아티클 (계정에 반영됨)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked_article_id: Option<String>,
    /// 로그인 전에 저장하려던 공고
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast: Option<String>,
}

impl PendingSaveResult {
    pub fn is_empty(&self) -> bool {
        self.liked_article_id.is_none() && self.saved_job_id.is_none()
    }
}

/// 카카오 로그인 응답 (세션 토큰 포함)
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
    pub is_new_user: bool,
    pub needs_onboarding: bool,
    pub pending: PendingSaveResult,
}

/// 카카오 인가 URL
#[derive(Debug, Clone, Serialize)]
pub struct LoginUrlResponse {
    pub auth_url: String,
}

/// `GET /api/v1/me`
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub needs_onboarding: bool,
    pub like_stats: LikeStatsResponse,
}

/// 관리자 사용자 목록
#[derive(Debug, Clone, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub total: u64,
}
