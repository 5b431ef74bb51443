//! 아티클 리포지토리
//!
//! [`ArticleRepository`](article_repo::ArticleRepository) 트레이트와 MongoDB 구현을 제공합니다.

pub mod article_repo;

pub use article_repo::*;
