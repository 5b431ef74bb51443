//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 트레이트와 다른 서비스를 생성자로 주입받고,
//! [`AppState`](crate::core::state::AppState) 가 한곳에서 조립합니다.
//!
//! # Features
//!
//! - 아티클 조회, 인기순, 검색, 관리자 CRUD
//! - 좋아요 토글 (로그인 계정 / 비로그인 클라이언트 상태)
//! - 카카오 로그인, 관리자 PIN 로그인, JWT 세션
//! - 사용자 온보딩과 관리
//! - 채용 공고 피드와 저장
//! - 사용 분석 이벤트
//!
//! # Examples
//!
//! ```rust,ignore
//! let feed = state.articles.home_feed().await;
//! let result = state.likes.toggle_for(user.user_id(), client_id.as_str(), &article_id).await?;
//! ```

pub mod admin;
pub mod analytics;
pub mod articles;
pub mod auth;
pub mod jobs;
pub mod likes;
pub mod users;
