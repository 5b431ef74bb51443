//! 인증 및 세션 서비스 모듈
//!
//! 카카오 OAuth 로그인과 관리자 PIN 로그인을 담당하고,
//! 두 방식 모두 같은 형식의 JWT 세션 토큰을 발급합니다.
//!
//! # Features
//!
//! - 카카오 인가 코드 교환과 사용자 upsert
//! - 인가 코드 재사용 차단 (10분)
//! - 관리자 PIN 검증과 `admin` 역할 토큰 발급
//! - 토큰 생성, 검증, Bearer 헤더 파싱
//!
//! # Examples
//!
//! ```rust,ignore
//! let issued = state.tokens.issue_for_user(&user)?;
//! let claims = state.tokens.verify(&issued.access_token)?;
//!
//! let login = state.kakao_auth.login(&request, client_id.as_str()).await?;
//! ```

pub mod admin_auth_service;
pub mod kakao_api;
pub mod kakao_auth_service;
pub mod token_service;

pub use admin_auth_service::*;
pub use kakao_api::*;
pub use kakao_auth_service::*;
pub use token_service::*;
