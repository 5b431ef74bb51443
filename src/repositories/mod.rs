//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `async_trait` 트레이트와 MongoDB 구현의 쌍으로 구성됩니다.
//! 서비스 계층은 `Arc<dyn ...Repository>` 로만 의존하므로,
//! 테스트에서는 메모리 구현을 그대로 주입할 수 있습니다.
//!
//! | 트레이트 | MongoDB 구현 | 컬렉션 |
//! |----------|--------------|--------|
//! | [`ArticleRepository`](articles::ArticleRepository) | `MongoArticleRepository` | `articles` |
//! | [`UserRepository`](users::UserRepository) | `MongoUserRepository` | `users` |
//! | [`LikeRepository`](likes::LikeRepository) | `MongoLikeRepository` | `user_likes` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let user_repo = MongoUserRepository::new(&database);
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod articles;
pub mod likes;
pub mod users;
