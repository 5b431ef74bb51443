//! 캐싱 계층 모듈
//!
//! Redis 래퍼와 그 위에 올린 클라이언트 상태 저장소를 제공합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::{client_state::RedisClientStateStore, redis::RedisClient};
//!
//! let redis = RedisClient::new().await?;
//! let store = RedisClientStateStore::new(redis, RedisConfig::client_state_ttl_seconds());
//! let liked = store.get_list(client_id.as_str(), keys::LIKES).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! CLIENT_STATE_TTL_SECONDS=2592000  # 30일
//! ```

pub mod client_state;
pub mod redis;
