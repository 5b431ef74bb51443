//! 도메인 계층
//!
//! - [`entities`] - MongoDB 문서 (`User`, `Article`, `UserLike`)와 상태 enum
//! - [`dto`] - HTTP 요청/응답 계약. `validator` 로 입력을 검사합니다
//! - [`models`] - 요청 단위 인증 정보, 토큰 클레임, 카카오 API 응답, 클라이언트 상태
//!
//! 요청 DTO 는 서비스에서 엔티티로 바뀌어 저장소로 내려가고,
//! 응답은 엔티티에서 `From` 변환으로 만들어집니다.

pub mod dto;
pub mod entities;
pub mod models;
