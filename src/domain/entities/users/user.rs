//! User Entity Implementation
//!
//! 소셜 로그인으로 생성되는 사용자 엔티티입니다.
//! 문서 ID는 프로바이더가 발급한 사용자 ID 문자열을 그대로 사용합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;
use crate::db::timestamp;
use crate::domain::entities::users::onboarding::{CareerStage, Interest, UsagePurpose};
use crate::domain::models::auth::login_profile::LoginProfile;

/// 신규 사용자 기본 닉네임
pub const DEFAULT_NICKNAME: &str = "익명";

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "user" => Some(UserRole::User),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// 알림 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub notifications: bool,
    pub email_marketing: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications: true,
            email_marketing: false,
        }
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 프로바이더 발급 사용자 ID
    #[serde(rename = "_id")]
    pub id: String,
    /// 이메일 제공에 동의하지 않은 경우 None
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub provider: AuthProvider,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_stage: Option<CareerStage>,
    #[serde(default)]
    pub interests: Vec<Interest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_purpose: Option<UsagePurpose>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl User {
    /// 첫 로그인 시 기본값으로 사용자 생성
    pub fn from_login(profile: &LoginProfile, now: DateTime<Utc>) -> Self {
        Self {
            id: profile.id.clone(),
            email: profile.email.clone(),
            nickname: profile
                .nickname
                .clone()
                .unwrap_or_else(|| DEFAULT_NICKNAME.to_string()),
            profile_image: profile.profile_image.clone(),
            provider: profile.provider,
            role: UserRole::User,
            is_active: true,
            preferences: UserPreferences::default(),
            career_stage: None,
            interests: Vec::new(),
            usage_purpose: None,
            created_at: now,
            updated_at: now,
            last_login_at: Some(now),
        }
    }

    /// 세 가지 온보딩 항목 중 하나라도 비어 있으면 true
    pub fn needs_onboarding(&self) -> bool {
        self.career_stage.is_none() || self.interests.is_empty() || self.usage_purpose.is_none()
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// 세션 토큰에 담을 역할 목록
    pub fn token_roles(&self) -> Vec<String> {
        match self.role {
            UserRole::Admin => vec!["user".to_string(), "admin".to_string()],
            UserRole::User => vec!["user".to_string()],
        }
    }
}

/// 사용자 부분 수정
///
/// None 인 필드는 저장소에 전달되지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct UserChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_stage: Option<CareerStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<Interest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_purpose: Option<UsagePurpose>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl UserChanges {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            email: None,
            nickname: None,
            profile_image: None,
            role: None,
            is_active: None,
            preferences: None,
            career_stage: None,
            interests: None,
            usage_purpose: None,
            last_login_at: None,
            updated_at: now,
        }
    }

    /// 로그인 시 패치: 로그인 시각과 프로바이더가 제공한 필드만
    pub fn login(profile: &LoginProfile, now: DateTime<Utc>) -> Self {
        Self {
            email: profile.email.clone(),
            nickname: profile.nickname.clone(),
            profile_image: profile.profile_image.clone(),
            last_login_at: Some(now),
            ..Self::at(now)
        }
    }

    /// 메모리 내 사용자에 동일한 변경을 적용합니다.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(email) = &self.email {
            user.email = Some(email.clone());
        }
        if let Some(nickname) = &self.nickname {
            user.nickname = nickname.clone();
        }
        if let Some(profile_image) = &self.profile_image {
            user.profile_image = Some(profile_image.clone());
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
        if let Some(preferences) = &self.preferences {
            user.preferences = preferences.clone();
        }
        if let Some(stage) = self.career_stage {
            user.career_stage = Some(stage);
        }
        if let Some(interests) = &self.interests {
            user.interests = interests.clone();
        }
        if let Some(purpose) = self.usage_purpose {
            user.usage_purpose = Some(purpose);
        }
        if let Some(at) = self.last_login_at {
            user.last_login_at = Some(at);
        }
        user.updated_at = self.updated_at;
    }
}
