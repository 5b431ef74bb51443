//! 인증 관련 도메인 모델
//!
//! - [`authenticated_user`] - 미들웨어가 요청에 주입하는 사용자 정보와 추출자
//! - [`auth_policy`] - 스코프 인증 정책과 판정
//! - [`login_profile`] - 프로바이더 프로필을 정규화한 upsert 입력

pub mod authenticated_user;
pub mod auth_policy;
pub mod login_profile;

pub use authenticated_user::*;
pub use auth_policy::*;
pub use login_profile::*;
