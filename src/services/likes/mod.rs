//! 좋아요 서비스 모듈
//!
//! - [`LikeService`](like_service::LikeService) - 계정 좋아요, 통계, 관리자 정리
//! - [`AnonymousLikes`](anonymous::AnonymousLikes) - 비로그인 방문자의 클라이언트 상태 좋아요

pub mod anonymous;
pub mod like_service;

pub use anonymous::*;
pub use like_service::*;
