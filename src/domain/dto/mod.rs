//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행합니다.
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `*Request`, `*Query` | HTTP 요청 본문/쿼리 매핑 |
//! | `@ResponseBody` | `*Response` | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `ResponseEntity<T>` | `Result<T, AppError>` | 상태 코드와 함께 응답 |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── admin/      # 관리자 로그인, 카카오 사용자 목록, 대시보드
//! ├── articles/   # 아티클 작성/수정/목록, 홈 피드
//! ├── jobs/       # 공고 목록, 저장
//! ├── likes/      # 좋아요 토글, 통계
//! └── users/      # 카카오 로그인, 온보딩, 내 정보
//! ```
//!
//! 엔티티를 그대로 응답하지 않고 `From<Entity>` 변환을 거칩니다.
//! 응답의 시각 필드는 모두 RFC 3339 문자열입니다.

pub mod admin;
pub mod articles;
pub mod jobs;
pub mod likes;
pub mod users;
