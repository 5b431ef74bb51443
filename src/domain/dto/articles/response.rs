use serde::Serialize;

use crate::db::pagination::Paginated;
use crate::domain::entities::articles::article::{Article, ArticleStatus};
use crate::domain::entities::categories::category::Category;

/// 아티클 응답 DTO
///
/// 시각 필드는 RFC 3339 문자열로 내려갑니다.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleResponse {
    pub id: String,
    pub title_kr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    pub summary_kr: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_en: Option<Vec<String>>,
    pub content_kr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_en: Option<String>,
    pub image: String,
    pub source: String,
    pub source_url: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub status: ArticleStatus,
    pub view_count: i64,
    pub like_count: i64,
    pub created_by: String,
    pub published_at: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        let Article {
            id,
            title_kr,
            title_en,
            summary_kr,
            summary_en,
            content_kr,
            content_en,
            image,
            source,
            source_url,
            categories,
            tags,
            published_at,
            created_at,
            updated_at,
            created_by,
            status,
            view_count,
            like_count,
        } = article;

        Self {
            id,
            title_kr,
            title_en,
            summary_kr,
            summary_en,
            content_kr,
            content_en,
            image,
            source,
            source_url,
            categories,
            tags,
            status,
            view_count,
            like_count,
            created_by,
            published_at: published_at.to_rfc3339(),
            created_at: created_at.to_rfc3339(),
            updated_at: updated_at.to_rfc3339(),
        }
    }
}

/// 상세 화면: 아티클 + 호출자의 좋아요 여부
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDetailResponse {
    #[serde(flatten)]
    pub article: ArticleResponse,
    pub is_liked: bool,
}

/// 홈 화면 뷰 모델
#[derive(Debug, Clone, Serialize)]
pub struct HomeFeedResponse {
    pub popular: Vec<ArticleResponse>,
    pub categories: Vec<Category>,
    pub latest: Paginated<ArticleResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}
