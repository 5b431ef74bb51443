//! 스포츠엑스 백엔드
//!
//! 스포츠 산업 콘텐츠 서비스의 REST API 서버입니다.
//! 아티클 열람과 좋아요, 카카오 로그인과 온보딩, 채용 공고 저장,
//! 6자리 PIN 으로 진입하는 관리자 대시보드를 제공합니다.
//!
//! ## 기능
//!
//! - **아티클**: 홈 피드, 카테고리 목록, 인기순, 검색, 상세 조회수
//! - **좋아요**: 로그인 사용자는 계정 기록, 비로그인 사용자는 클라이언트 상태 목록
//! - **카카오 로그인**: 인가 코드 교환, 사용자 upsert, 로그인 전 예약 반영
//! - **온보딩**: 현재 상황, 관심 분야, 이용 목적 3단계
//! - **채용/대외활동**: 목업 카탈로그 목록, 저장한 공고
//! - **관리자**: PIN 세션, 아티클 작성/수정/보관, 사용자 관리, 카카오 사용자 목록
//!
//! ## 계층
//!
//! `routes` (스코프별 인증 정책) → `handlers` → `services` (`core::AppState` 로 조립)
//! → `repositories` (MongoDB) / `caching` (Redis 클라이언트 상태)
//!
//! 서비스는 저장소 trait 에만 의존하므로 테스트는 `test_support` 의 메모리 구현으로
//! 같은 `AppState` 를 조립합니다.
//!
//! ```rust,ignore
//! let state = sportsx_backend::core::AppState::from_env().await?;
//! let app = actix_web::App::new()
//!     .app_data(actix_web::web::Data::new(state))
//!     .configure(sportsx_backend::routes::configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
pub mod test_support;
