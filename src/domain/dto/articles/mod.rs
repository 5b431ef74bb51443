//! 아티클 DTO
//!
//! - [`request`] - 관리자 작성/수정 폼, 목록/검색 쿼리 파라미터
//! - [`response`] - 아티클, 상세, 홈 피드 응답

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
