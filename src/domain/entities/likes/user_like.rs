//! UserLike Entity
//!
//! (사용자, 아티클) 쌍마다 하나의 문서를 두고 `is_active` 로 상태를 전환합니다.
//! 문서 ID가 `{user_id}_{article_id}` 이므로 쌍 하나에 두 개의 레코드가 생길 수 없습니다.
//!
//! ```text
//! 레코드 없음 ──toggle──▶ is_active = true ──toggle──▶ is_active = false
//!                               ▲                            │
//!                               └──────────toggle────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLike {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub article_id: String,
    pub is_active: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// 마지막 상태 전환 시각. 이전 문서에는 없으므로 생성 시각으로 대체합니다.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserLike {
    /// 쌍 하나에 대응하는 문서 ID
    pub fn record_id(user_id: &str, article_id: &str) -> String {
        format!("{}_{}", user_id, article_id)
    }

    pub fn new(user_id: &str, article_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Self::record_id(user_id, article_id),
            user_id: user_id.to_string(),
            article_id: article_id.to_string(),
            is_active: true,
            created_at: now,
            updated_at: Some(now),
        }
    }

    pub fn last_changed_at(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}
