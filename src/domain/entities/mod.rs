//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 합니다.
//!
//! ## 엔티티 목록
//!
//! | 엔티티 | 컬렉션 | 문서 ID |
//! |--------|--------|---------|
//! | [`users::user::User`] | `users` | 카카오 사용자 ID |
//! | [`articles::article::Article`] | `articles` | ObjectId hex |
//! | [`likes::user_like::UserLike`] | `user_likes` | `{user_id}_{article_id}` |
//! | [`categories::category::Category`] | 없음 (집계) | - |
//! | [`jobs::job::JobListing`] | 없음 (상수) | `job-001` ~ `job-012` |
//!
//! ## 공통 규칙
//!
//! - 시각 필드는 `DateTime<Utc>` 이며 [`crate::db::timestamp`] 로 저장/정규화합니다.
//! - 부분 수정은 `*Changes` 구조체로 표현하고, `None` 필드는 `$set` 에서 제외됩니다.
//! - 삭제는 상태 전환(아티클 `archived`, 사용자 `is_active = false`)으로만 이루어집니다.

pub mod articles;
pub mod categories;
pub mod jobs;
pub mod likes;
pub mod users;
