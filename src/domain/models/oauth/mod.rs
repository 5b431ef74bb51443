//! # OAuth Domain Models Module
//!
//! 외부 OAuth 프로바이더 응답 모델입니다.
//!
//! | Spring Security | 이 모듈 |
//! |-----------------|---------|
//! | `OAuth2AccessTokenResponse` | `KakaoTokenResponse` |
//! | `OAuth2User` | `KakaoUserResponse` |
//!
//! 프로바이더 응답은 [`crate::domain::models::auth::LoginProfile`] 로 정규화된 뒤
//! 사용자 서비스로 전달됩니다.

pub mod kakao;
