//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//! 화면 단위의 뷰 모델을 JSON 으로 돌려주며, 비즈니스 로직은 모두 서비스 계층에 있습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (X-Client-Id, Authorization 헤더)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services (web::Data<AppState>)                ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories / Client State                   ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 공통 추출자
//!
//! | 추출자 | 내용 |
//! |--------|------|
//! | `web::Data<AppState>` | 조립된 서비스 묶음 |
//! | `ClientId` | 익명 상태 키 (`X-Client-Id` → `sx_client` 쿠키 → 새 UUID) |
//! | `OptionalUser` | 선택적 인증 스코프의 로그인 사용자 |
//! | `AuthenticatedUser` | 필수 인증 스코프의 사용자 (없으면 401) |
//!
//! 클라이언트 상태를 쓰는 응답은 `X-Client-Id` 헤더로 키를 돌려줍니다.
//! 브라우저는 새로 발급된 키를 저장해 이후 요청에 그대로 보냅니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! handlers/
//! ├── articles.rs  ← 홈, 목록, 인기, 검색, 상세, 카테고리
//! ├── likes.rs     ← 좋아요 토글/상태, 좋아요한 아티클
//! ├── auth.rs      ← 카카오 로그인 URL, 코드 교환, 로그아웃
//! ├── me.rs        ← 내 프로필, 온보딩, 설정, 탈퇴
//! ├── jobs.rs      ← 공고 목록, 저장, 저장한 공고
//! └── admin.rs     ← PIN 로그인, 대시보드, 아티클/사용자 관리
//! ```

use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::models::client::{ClientId, CLIENT_ID_HEADER};

pub mod admin;
pub mod articles;
pub mod auth;
pub mod jobs;
pub mod likes;
pub mod me;

/// 200 JSON 응답에 클라이언트 ID 헤더를 붙입니다.
pub fn client_json<T: Serialize>(client_id: &ClientId, body: T) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((CLIENT_ID_HEADER, client_id.as_str()))
        .json(body)
}
