//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) 트레이트와 MongoDB 구현을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let repo = MongoUserRepository::new(&database);
//! let user = repo.find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::*;
