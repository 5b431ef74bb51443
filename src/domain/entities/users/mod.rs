//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`user::User`] - 카카오 로그인으로 생성되는 사용자 문서
//! - [`user::UserChanges`] - 전달된 필드만 덮어쓰는 부분 수정
//! - [`onboarding`] - 커리어 단계, 관심 분야, 이용 목적 선택지
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::from_login(&profile, Utc::now());
//! if user.needs_onboarding() {
//!     // 온보딩 모달 표시
//! }
//! ```

pub mod onboarding;
pub mod user;
