//! 사용자 DTO
//!
//! - `request/auth_request.rs` - 카카오 코드 교환, 관리자 PIN, 역할 변경
//! - `request/onboarding_request.rs` - 온보딩 세 항목, 알림 설정
//! - `response/user_response.rs` - 사용자, 로그인 결과, 내 프로필

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
