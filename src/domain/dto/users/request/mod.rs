//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: PIN 형식 등 기본 규칙 (`validator`)
//! 3. **선택지 검증**: 온보딩 값이 고정된 한국어 선택지 안에 있는지 (`OnboardingRequest::parse`)
//!
//! 검증 실패는 `AppError::ValidationError` 로 변환되어 400 응답이 됩니다.

pub mod auth_request;
pub mod onboarding_request;

pub use auth_request::*;
pub use onboarding_request::*;
