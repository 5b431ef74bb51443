//! # 아티클 요청 DTO
//!
//! 관리자 작성/수정 폼과 공개 목록 조회 쿼리 파라미터입니다.
//!
//! 작성 요청의 필수값 검사는 서비스 계층에서 고정된 순서로 먼저 수행합니다.
//!
//! 1. 제목 또는 본문 누락 → `제목과 본문은 필수입니다.`
//! 2. 카테고리 없음 → `최소 하나의 카테고리를 선택해주세요.`
//! 3. 그 외 형식 검증 (`validator`)
//!
//! ```json
//! {
//!   "title_kr": "K리그 관중 수 역대 최다",
//!   "summary_kr": ["유료 관중 300만 돌파", ""],
//!   "content_kr": "<p>...</p>",
//!   "categories": ["스포츠산업"],
//!   "published_at": "2025-11-04"
//! }
//! ```

use serde::Deserialize;
use validator::Validate;

use crate::db::pagination::PageRequest;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateArticleRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "제목은 200자 이하여야 합니다."))]
    pub title_kr: String,

    #[serde(default)]
    pub title_en: Option<String>,

    /// 빈 줄은 저장 전에 제거됩니다.
    #[serde(default)]
    #[validate(length(max = 10, message = "요약은 최대 10줄까지 입력할 수 있습니다."))]
    pub summary_kr: Vec<String>,

    #[serde(default)]
    pub summary_en: Option<Vec<String>>,

    #[serde(default)]
    pub content_kr: String,

    #[serde(default)]
    pub content_en: Option<String>,

    #[serde(default)]
    #[validate(url(message = "이미지 주소 형식이 올바르지 않습니다."))]
    pub image: Option<String>,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub source_url: Option<String>,

    #[serde(default)]
    pub categories: Vec<String>,

    /// 비어 있으면 카테고리를 태그로 사용합니다.
    #[serde(default)]
    pub tags: Vec<String>,

    /// RFC 3339 또는 `YYYY-MM-DD`
    #[serde(default)]
    pub published_at: Option<String>,

    /// 기본값 published
    #[serde(default)]
    pub status: Option<String>,
}

/// 관리자 수정 요청. 전달된 필드만 변경합니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateArticleRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1~200자여야 합니다."))]
    pub title_kr: Option<String>,
    pub title_en: Option<String>,
    pub summary_kr: Option<Vec<String>>,
    pub summary_en: Option<Vec<String>>,
    #[validate(length(min = 1, message = "본문은 비워둘 수 없습니다."))]
    pub content_kr: Option<String>,
    pub content_en: Option<String>,
    #[validate(url(message = "이미지 주소 형식이 올바르지 않습니다."))]
    pub image: Option<String>,
    pub source: Option<String>,
    pub source_url: Option<String>,
    #[validate(length(min = 1, message = "최소 하나의 카테고리를 선택해주세요."))]
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub published_at: Option<String>,
    pub status: Option<String>,
}

/// `GET /api/v1/articles`. 상태는 항상 published 입니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleListQuery {
    /// `전체` 또는 생략 시 필터 없음
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub cursor: Option<String>,
}

impl ArticleListQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.limit, self.cursor.clone())
    }
}

/// `GET /api/v1/admin/articles`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminArticleQuery {
    /// 생략 시 보관 제외 | draft | published | archived | all
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub cursor: Option<String>,
}

impl AdminArticleQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.limit, self.cursor.clone())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

/// `GET /api/v1/articles/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<i64>,
}
