//! 클라이언트 상태 저장소
//!
//! 브라우저가 보관하던 상태(익명 좋아요 목록, 로그인 후 저장 예약, 세션 사용자)를
//! 서버 쪽에서 `(client_id, key)` 단위로 보관합니다.
//! 클라이언트 ID는 [`ClientId`](crate::domain::models::client::ClientId) 추출기가 결정합니다.
//!
//! | 키 | 값 | 용도 |
//! |----|----|------|
//! | `sx_likes` | `["article_id", ...]` | 익명 좋아요, 로그인 사용자의 로컬 미러 |
//! | `sx_user` | 사용자 응답 JSON | 현재 세션 사용자 |
//! | `likes_pending_save` | `"article_id"` | 로그인 후 좋아요 저장 예약 |
//! | `jobs_pending_save` | `"job_id"` | 로그인 후 공고 저장 예약 |
//! | `jobs_saved_{user_id}` | `["job_id", ...]` | 사용자별 저장한 공고 |

use async_trait::async_trait;
use serde_json::Value;

use crate::caching::redis::RedisClient;
use crate::core::errors::AppError;

pub mod keys {
    pub const LIKES: &str = "sx_likes";
    pub const SESSION_USER: &str = "sx_user";
    pub const LIKES_PENDING_SAVE: &str = "likes_pending_save";
    pub const JOBS_PENDING_SAVE: &str = "jobs_pending_save";

    /// 클라이언트와 무관한 일회성 예약에 쓰는 범위
    pub const OAUTH_SCOPE: &str = "oauth";

    pub fn saved_jobs(user_id: &str) -> String {
        format!("jobs_saved_{}", user_id)
    }

    pub fn authorization_code(code: &str) -> String {
        format!("code:{}", code)
    }
}

#[async_trait]
pub trait ClientStateStore: Send + Sync {
    async fn get_value(&self, client_id: &str, key: &str) -> Result<Option<Value>, AppError>;

    async fn set_value(&self, client_id: &str, key: &str, value: Value) -> Result<(), AppError>;

    /// 읽고 삭제합니다. 같은 값은 한 번만 반환됩니다.
    async fn take_value(&self, client_id: &str, key: &str) -> Result<Option<Value>, AppError>;

    /// 키가 없을 때만 저장합니다. 저장했으면 `true`.
    async fn set_if_absent(
        &self,
        client_id: &str,
        key: &str,
        value: Value,
        ttl_seconds: u64,
    ) -> Result<bool, AppError>;

    async fn remove(&self, client_id: &str, key: &str) -> Result<(), AppError>;

    /// 문자열 목록. 키가 없거나 목록이 아니면 빈 목록입니다.
    async fn get_list(&self, client_id: &str, key: &str) -> Result<Vec<String>, AppError> {
        Ok(self
            .get_value(client_id, key)
            .await?
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default())
    }

    async fn set_list(&self, client_id: &str, key: &str, items: &[String]) -> Result<(), AppError> {
        self.set_value(client_id, key, Value::from(items.to_vec())).await
    }
}

/// Redis 키 `client:{client_id}:{key}`
pub fn storage_key(client_id: &str, key: &str) -> String {
    format!("client:{}:{}", client_id, key)
}

/// 목록에서 ID를 추가하거나 제거한 새 목록. 추가된 항목은 앞에 둡니다.
pub fn toggled(items: &[String], id: &str, present: bool) -> Vec<String> {
    let mut next: Vec<String> = items.iter().filter(|item| *item != id).cloned().collect();
    if present {
        next.insert(0, id.to_string());
    }
    next
}

pub struct RedisClientStateStore {
    redis: RedisClient,
    ttl_seconds: u64,
}

impl RedisClientStateStore {
    pub fn new(redis: RedisClient, ttl_seconds: u64) -> Self {
        Self { redis, ttl_seconds }
    }
}

#[async_trait]
impl ClientStateStore for RedisClientStateStore {
    async fn get_value(&self, client_id: &str, key: &str) -> Result<Option<Value>, AppError> {
        self.redis.get(&storage_key(client_id, key)).await
    }

    async fn set_value(&self, client_id: &str, key: &str, value: Value) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&storage_key(client_id, key), &value, self.ttl_seconds)
            .await
    }

    async fn take_value(&self, client_id: &str, key: &str) -> Result<Option<Value>, AppError> {
        self.redis.take(&storage_key(client_id, key)).await
    }

    async fn set_if_absent(
        &self,
        client_id: &str,
        key: &str,
        value: Value,
        ttl_seconds: u64,
    ) -> Result<bool, AppError> {
        self.redis
            .set_if_absent(&storage_key(client_id, key), &value, ttl_seconds)
            .await
    }

    async fn remove(&self, client_id: &str, key: &str) -> Result<(), AppError> {
        self.redis.del(&storage_key(client_id, key)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_layout() {
        assert_eq!(storage_key("c-1", keys::LIKES), "client:c-1:sx_likes");
        assert_eq!(keys::saved_jobs("4012"), "jobs_saved_4012");
    }

    #[test]
    fn test_toggled_moves_new_item_to_front() {
        let items = vec!["a".to_string(), "b".to_string()];

        assert_eq!(toggled(&items, "c", true), vec!["c", "a", "b"]);
        assert_eq!(toggled(&items, "b", true), vec!["b", "a"]);
        assert_eq!(toggled(&items, "a", false), vec!["b"]);
        assert_eq!(toggled(&items, "z", false), vec!["a", "b"]);
    }
}
