//! 사용자 관리 서비스 모듈
//!
//! 로그인 시 사용자 upsert, 온보딩 게이트, 환경설정, 역할과 계정 상태를 관리합니다.
//!
//! # Features
//!
//! - 첫 로그인 시 기본값으로 생성, 이후에는 전달된 프로필 필드만 갱신
//! - 온보딩 세 항목(현재 상황, 관심 분야, 이용 목적)의 일괄 저장
//! - 비활성화된 계정의 로그인 차단
//! - 관리자 역할 부여/회수
//!
//! # Examples
//!
//! ```rust,ignore
//! let (user, is_new_user) = state.users.upsert_on_login(&profile).await?;
//! if state.users.needs_onboarding(&user) {
//!     // 온보딩 모달 표시
//! }
//! ```

pub mod user_service;

pub use user_service::*;
