//! Article Entity
//!
//! 관리자가 작성하는 콘텐츠 문서입니다. 한국어 필드가 기본이며
//! 영문 필드는 선택 항목입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::timestamp;

/// 관리자 작성 시 기본 대표 이미지
pub const DEFAULT_ARTICLE_IMAGE: &str = "https://picsum.photos/seed/sportsx/1200/630";

/// 관리자 작성 시 기본 출처
pub const DEFAULT_ARTICLE_SOURCE: &str = "스포츠엑스";

/// 게시 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    #[default]
    Published,
    /// 소프트 삭제
    Archived,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
            ArticleStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Some(ArticleStatus::Draft),
            "published" => Some(ArticleStatus::Published),
            "archived" => Some(ArticleStatus::Archived),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// ObjectId hex 문자열
    #[serde(rename = "_id")]
    pub id: String,
    pub title_kr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(default)]
    pub summary_kr: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_en: Option<Vec<String>>,
    pub content_kr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_en: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "timestamp")]
    pub published_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub like_count: i64,
}

impl Article {
    /// 인기 점수: 조회수 + 좋아요 × 3
    pub fn popularity_score(&self) -> i64 {
        self.view_count + self.like_count * 3
    }

    pub fn is_public(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// 제목, 태그, 카테고리에 대소문자 구분 없는 부분 일치
    pub fn matches_term(&self, lowered_term: &str) -> bool {
        self.title_kr.to_lowercase().contains(lowered_term)
            || self.tags.iter().any(|t| t.to_lowercase().contains(lowered_term))
            || self.categories.iter().any(|c| c.to_lowercase().contains(lowered_term))
    }
}

/// 아티클 부분 수정
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticleChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_kr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_kr: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_en: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_kr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ArticleChanges {
    pub fn archive() -> Self {
        Self {
            status: Some(ArticleStatus::Archived),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title_kr.is_none()
            && self.title_en.is_none()
            && self.summary_kr.is_none()
            && self.summary_en.is_none()
            && self.content_kr.is_none()
            && self.content_en.is_none()
            && self.image.is_none()
            && self.source.is_none()
            && self.source_url.is_none()
            && self.categories.is_none()
            && self.tags.is_none()
            && self.status.is_none()
            && self.published_at.is_none()
    }

    pub fn apply_to(&self, article: &mut Article) {
        macro_rules! assign {
            ($($field:ident),*) => {
                $(if let Some(value) = &self.$field {
                    article.$field = value.clone();
                })*
            };
        }
        macro_rules! assign_optional {
            ($($field:ident),*) => {
                $(if let Some(value) = &self.$field {
                    article.$field = Some(value.clone());
                })*
            };
        }

        assign!(title_kr, summary_kr, content_kr, image, source, source_url, categories, tags);
        assign_optional!(title_en, summary_en, content_en);

        if let Some(status) = self.status {
            article.status = status;
        }
        if let Some(at) = self.published_at {
            article.published_at = at;
        }
        if let Some(at) = self.updated_at {
            article.updated_at = at;
        }
    }
}
