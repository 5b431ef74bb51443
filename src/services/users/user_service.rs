//! # 사용자 관리 서비스 구현
//!
//! 카카오 로그인 사용자의 생명주기를 관리합니다.
//! 비밀번호가 없으므로 가입은 곧 첫 로그인이고, 이후 로그인은 프로필 동기화입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       UserService                         │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌────────────────┐  ┌────────────────┐  ┌──────────────┐ │
//! │  │  Login Upsert  │  │   Onboarding   │  │  Admin Ops   │ │
//! │  │ • 첫 로그인 생성 │  │ • 3단계 일괄 저장│  │ • 역할 변경    │ │
//! │  │ • 프로필 동기화  │  │ • 선택지 검증   │  │ • 비활성화     │ │
//! │  │ • 비활성 차단   │  │ • 완료 판정     │  │ • 목록 조회    │ │
//! │  └────────────────┘  └────────────────┘  └──────────────┘ │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                  Arc<dyn UserRepository>
//! ```
//!
//! ## 로그인 upsert 규칙
//!
//! | 상황 | 동작 |
//! |------|------|
//! | 처음 보는 ID | 기본값으로 생성, `is_new_user = true` |
//! | 기존 사용자 | `last_login_at`, `updated_at` 과 프로바이더가 준 필드만 갱신 |
//! | 비활성 사용자 | `AuthorizationError` |
//! | 동시 첫 로그인 | 먼저 저장된 쪽이 생성, 나머지는 갱신으로 처리 |

use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};

use crate::core::errors::AppError;
use crate::domain::dto::users::{OnboardingRequest, PreferencesRequest};
use crate::domain::entities::users::user::{User, UserChanges, UserPreferences, UserRole};
use crate::domain::models::auth::LoginProfile;
use crate::repositories::users::UserRepository;

const USER_NOT_FOUND: &str = "사용자를 찾을 수 없습니다.";

/// 관리자 사용자 목록 기본/최대 개수
pub const DEFAULT_USER_LIST_LIMIT: i64 = 50;
pub const MAX_USER_LIST_LIMIT: i64 = 200;

pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// 로그인 시 사용자 생성 또는 갱신
    ///
    /// # 반환값
    ///
    /// * `Ok((User, true))` - 새로 가입한 사용자
    /// * `Ok((User, false))` - 기존 사용자
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 프로바이더 ID가 비어 있음
    /// * `AppError::AuthorizationError` - 비활성화된 계정
    pub async fn upsert_on_login(&self, profile: &LoginProfile) -> Result<(User, bool), AppError> {
        if profile.id.trim().is_empty() {
            return Err(AppError::ValidationError("사용자 ID가 필요합니다.".to_string()));
        }

        let now = Utc::now();

        if let Some(existing) = self.users.find_by_id(&profile.id).await? {
            return self.refresh_login(existing, profile).await.map(|user| (user, false));
        }

        let user = User::from_login(profile, now);
        if self.users.insert(&user).await? {
            info!("🎉 신규 사용자 가입: {} ({})", user.id, user.provider.as_str());
            return Ok((user, true));
        }

        // 동시 첫 로그인에서 다른 요청이 먼저 저장함
        let existing = self
            .users
            .find_by_id(&profile.id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;
        self.refresh_login(existing, profile).await.map(|user| (user, false))
    }

    async fn refresh_login(&self, existing: User, profile: &LoginProfile) -> Result<User, AppError> {
        if !existing.is_active {
            warn!("비활성 계정 로그인 시도: {}", existing.id);
            return Err(AppError::AuthorizationError("비활성화된 계정입니다.".to_string()));
        }

        let changes = UserChanges::login(profile, Utc::now());
        match self.users.update(&existing.id, &changes).await? {
            Some(user) => Ok(user),
            None => {
                let mut user = existing;
                changes.apply_to(&mut user);
                Ok(user)
            }
        }
    }

    pub fn needs_onboarding(&self, user: &User) -> bool {
        user.needs_onboarding()
    }

    /// 온보딩 세 항목을 한 번에 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 누락되었거나 선택지 밖의 값
    /// * `AppError::NotFound` - 사용자 없음
    pub async fn save_onboarding(&self, user_id: &str, input: &OnboardingRequest) -> Result<User, AppError> {
        let answers = input.parse()?;

        let changes = UserChanges {
            career_stage: Some(answers.career_stage),
            interests: Some(answers.interests),
            usage_purpose: Some(answers.usage_purpose),
            ..UserChanges::at(Utc::now())
        };

        let user = self.update_existing(user_id, &changes).await?;
        info!("✅ 온보딩 완료: {}", user_id);
        Ok(user)
    }

    pub async fn get_by_id(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_id(user_id).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_email(email).await
    }

    /// 전달된 설정만 바꿉니다.
    pub async fn update_preferences(
        &self,
        user_id: &str,
        input: &PreferencesRequest,
    ) -> Result<User, AppError> {
        let current = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        let preferences = UserPreferences {
            notifications: input.notifications.unwrap_or(current.preferences.notifications),
            email_marketing: input.email_marketing.unwrap_or(current.preferences.email_marketing),
        };

        let changes = UserChanges {
            preferences: Some(preferences),
            ..UserChanges::at(Utc::now())
        };
        self.update_existing(user_id, &changes).await
    }

    /// 소프트 삭제: `is_active = false`
    pub async fn deactivate(&self, user_id: &str) -> Result<User, AppError> {
        let changes = UserChanges {
            is_active: Some(false),
            ..UserChanges::at(Utc::now())
        };

        let user = self.update_existing(user_id, &changes).await?;
        info!("🚫 사용자 비활성화: {}", user_id);
        Ok(user)
    }

    pub async fn grant_admin(&self, user_id: &str) -> Result<User, AppError> {
        self.change_role(user_id, UserRole::Admin).await
    }

    pub async fn revoke_admin(&self, user_id: &str) -> Result<User, AppError> {
        self.change_role(user_id, UserRole::User).await
    }

    /// 문자열 역할로 변경 (`user` | `admin`)
    pub async fn set_role(&self, user_id: &str, role: &str) -> Result<User, AppError> {
        let role = UserRole::from_str(role)
            .ok_or_else(|| AppError::ValidationError(format!("알 수 없는 역할입니다: {}", role)))?;
        self.change_role(user_id, role).await
    }

    async fn change_role(&self, user_id: &str, role: UserRole) -> Result<User, AppError> {
        let changes = UserChanges {
            role: Some(role),
            ..UserChanges::at(Utc::now())
        };

        let user = self.update_existing(user_id, &changes).await?;
        info!("🔑 사용자 역할 변경: {} → {}", user_id, role.as_str());
        Ok(user)
    }

    /// 가입일 내림차순 사용자 목록
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<User>, AppError> {
        let limit = limit
            .unwrap_or(DEFAULT_USER_LIST_LIMIT)
            .clamp(1, MAX_USER_LIST_LIMIT);
        self.users.list_recent(limit).await
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        self.users.count().await
    }

    pub async fn find_many(&self, ids: &[String]) -> Result<Vec<User>, AppError> {
        self.users.find_by_ids(ids).await
    }

    async fn update_existing(&self, user_id: &str, changes: &UserChanges) -> Result<User, AppError> {
        self.users
            .update(user_id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }
}
