//! 좋아요 리포지토리

pub mod like_repo;

pub use like_repo::*;
