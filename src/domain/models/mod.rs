//! # Domain Models Module
//!
//! 저장소에 직접 매핑되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - MongoDB 문서로 저장되고 고유 ID를 가짐
//! - 예: `User`, `Article`, `UserLike`
//!
//! ### Models (`./`)
//! - 요청 처리 중에만 존재하는 값, 외부 API 응답
//! - 예: `AuthenticatedUser`, `TokenClaims`, `KakaoUserResponse`, `ClientId`
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/     ← 인증 사용자, 인증 모드, 로그인 프로필
//! ├── client/   ← 익명 클라이언트 식별자 추출자
//! ├── oauth/    ← 카카오 API 응답 모델
//! └── token/    ← 세션 토큰 클레임
//! ```

pub mod auth;
pub mod client;
pub mod oauth;
pub mod token;
