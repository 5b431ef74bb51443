//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 일관된 형태로 전달합니다.
//!
//! - `UserResponse` - 표준 사용자 정보 (시각은 RFC 3339 문자열)
//! - `LoginResponse` - 세션 토큰, 신규 가입 여부, 온보딩 필요 여부
//! - `LoginUrlResponse` - 카카오 인가 URL
//! - `ProfileResponse` - 내 정보 화면

pub mod user_response;

pub use user_response::*;
