//! 관리자 대시보드 서비스
//!
//! 카카오 앱 사용자 목록과 대시보드 첫 화면 요약을 제공합니다.

use std::collections::HashMap;
use std::sync::Arc;

use log::info;

use crate::core::errors::AppError;
use crate::domain::dto::admin::{DashboardResponse, KakaoUserSummary, KakaoUsersQuery, KakaoUsersResponse, StoredUserSummary};
use crate::domain::entities::users::user::User;
use crate::services::articles::ArticleService;
use crate::services::auth::kakao_api::KakaoApi;
use crate::services::users::UserService;

pub const DEFAULT_KAKAO_USERS_LIMIT: usize = 100;
/// 카카오 `/v1/user/ids` 한 번의 최대 응답 수
pub const MAX_KAKAO_USERS_LIMIT: usize = 100;

pub struct AdminService {
    kakao: Arc<dyn KakaoApi>,
    users: Arc<UserService>,
    articles: Arc<ArticleService>,
}

impl AdminService {
    pub fn new(kakao: Arc<dyn KakaoApi>, users: Arc<UserService>, articles: Arc<ArticleService>) -> Self {
        Self { kakao, users, articles }
    }

    /// 카카오 앱에 연결된 사용자 목록
    ///
    /// 카카오가 돌려준 ID를 `offset..offset+limit` 로 자르고 저장소 정보로 보강합니다.
    /// 저장소에 없는 사용자의 닉네임은 `사용자_{id}` 입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - Admin 키 미설정
    /// * `AppError::ExternalServiceError` - 카카오 API 실패
    pub async fn kakao_users(&self, query: &KakaoUsersQuery) -> Result<KakaoUsersResponse, AppError> {
        let limit = query
            .limit
            .unwrap_or(DEFAULT_KAKAO_USERS_LIMIT)
            .clamp(1, MAX_KAKAO_USERS_LIMIT);
        let offset = query.offset.unwrap_or(0);

        let ids = self.kakao.list_user_ids().await?.elements;
        let total_count = ids.len();

        let page: Vec<i64> = ids.into_iter().skip(offset).take(limit).collect();
        let keys: Vec<String> = page.iter().map(i64::to_string).collect();

        let mut stored: HashMap<String, User> = self
            .users
            .find_many(&keys)
            .await?
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();

        let users = page
            .into_iter()
            .map(|id| summarize(id, stored.remove(&id.to_string())))
            .collect();

        info!("👥 카카오 사용자 목록 조회: {}명 중 {}부터", total_count, offset);

        Ok(KakaoUsersResponse {
            users,
            total_count: total_count as u64,
            has_more: offset.saturating_add(limit) < total_count,
            limit,
            offset,
        })
    }

    /// 상태별 아티클 수, 사용자 수, 카테고리 수
    pub async fn dashboard(&self) -> Result<DashboardResponse, AppError> {
        let articles = self.articles.status_counts().await?;
        let total_users = self.users.count().await?;
        let categories = self.articles.categories().await.len();

        Ok(DashboardResponse {
            articles,
            total_users,
            categories,
        })
    }
}

fn summarize(id: i64, user: Option<User>) -> KakaoUserSummary {
    match user {
        Some(user) => KakaoUserSummary {
            id,
            nickname: user.nickname.clone(),
            profile_image: user.profile_image.clone(),
            stored: Some(StoredUserSummary {
                email: user.email,
                nickname: user.nickname,
                profile_image: user.profile_image,
                created_at: user.created_at.to_rfc3339(),
                last_login_at: user.last_login_at.map(|at| at.to_rfc3339()),
                is_active: user.is_active,
                career_stage: user.career_stage,
                interests: user.interests,
                usage_purpose: user.usage_purpose,
            }),
        },
        None => KakaoUserSummary {
            id,
            nickname: format!("사용자_{}", id),
            profile_image: None,
            stored: None,
        },
    }
}
