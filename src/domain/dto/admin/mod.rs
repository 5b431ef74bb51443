//! 관리자 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::onboarding::{CareerStage, Interest, UsagePurpose};

/// 관리자 세션 토큰
#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub roles: Vec<String>,
}

/// `GET /api/v1/admin/kakao-users?limit=&offset=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KakaoUsersQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// 저장소에 있는 사용자 정보
#[derive(Debug, Clone, Serialize)]
pub struct StoredUserSummary {
    pub email: Option<String>,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub created_at: String,
    pub last_login_at: Option<String>,
    pub is_active: bool,
    pub career_stage: Option<CareerStage>,
    pub interests: Vec<Interest>,
    pub usage_purpose: Option<UsagePurpose>,
}

/// 카카오 앱 사용자 한 명
#[derive(Debug, Clone, Serialize)]
pub struct KakaoUserSummary {
    pub id: i64,
    /// 저장소 닉네임, 없으면 `사용자_{id}`
    pub nickname: String,
    pub profile_image: Option<String>,
    /// 저장소에 없는 사용자는 None
    pub stored: Option<StoredUserSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KakaoUsersResponse {
    pub users: Vec<KakaoUserSummary>,
    pub total_count: u64,
    pub has_more: bool,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticleStatusCounts {
    pub published: u64,
    pub draft: u64,
    pub archived: u64,
}

/// 관리자 대시보드 첫 화면
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub articles: ArticleStatusCounts,
    pub total_users: u64,
    pub categories: usize,
}
