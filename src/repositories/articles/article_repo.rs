//! 아티클 데이터 액세스 계층
//!
//! 목록 조회는 상태 필터, 카테고리 필터, 정렬, 커서를 모두 저장소 쿼리로 내려보냅니다.
//! 인기순 정렬과 검색은 서비스 계층이 제한된 창(window)을 받아 메모리에서 처리합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{self, doc, Bson, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};

use crate::core::errors::{AppError, ErrorContext};
use crate::db::{pagination::Cursor, Database};
use crate::domain::entities::articles::article::{Article, ArticleChanges, ArticleStatus};

/// 목록 조회 시 상태 조건
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Only(ArticleStatus),
    /// 관리자 기본 목록
    NotArchived,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleSort {
    PublishedDesc,
    CreatedDesc,
}

impl ArticleSort {
    pub fn field(&self) -> &'static str {
        match self {
            ArticleSort::PublishedDesc => "published_at",
            ArticleSort::CreatedDesc => "created_at",
        }
    }

    /// 정렬 기준 시각
    pub fn key_of(&self, article: &Article) -> chrono::DateTime<chrono::Utc> {
        match self {
            ArticleSort::PublishedDesc => article.published_at,
            ArticleSort::CreatedDesc => article.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleQuery {
    pub status: StatusFilter,
    pub category: Option<String>,
    pub sort: ArticleSort,
    pub after: Option<Cursor>,
    pub limit: i64,
}

impl ArticleQuery {
    /// 공개 목록: 게시 상태, 게시일 내림차순
    pub fn published(limit: i64) -> Self {
        Self {
            status: StatusFilter::Only(ArticleStatus::Published),
            category: None,
            sort: ArticleSort::PublishedDesc,
            after: None,
            limit,
        }
    }

    pub fn in_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn after(mut self, cursor: Option<Cursor>) -> Self {
        self.after = cursor;
        self
    }

    /// 메모리 구현과 공유하는 조건 판정
    pub fn matches(&self, article: &Article) -> bool {
        let status_ok = match self.status {
            StatusFilter::Only(status) => article.status == status,
            StatusFilter::NotArchived => article.status != ArticleStatus::Archived,
            StatusFilter::Any => true,
        };
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |category| article.has_category(category));
        let cursor_ok = self
            .after
            .as_ref()
            .map_or(true, |cursor| cursor.precedes(self.sort.key_of(article), &article.id));

        status_ok && category_ok && cursor_ok
    }

    fn to_filter(&self) -> Document {
        let mut filter = Document::new();

        match self.status {
            StatusFilter::Only(status) => {
                filter.insert("status", status.as_str());
            }
            StatusFilter::NotArchived => {
                filter.insert("status", doc! { "$ne": ArticleStatus::Archived.as_str() });
            }
            StatusFilter::Any => {}
        }

        if let Some(category) = &self.category {
            filter.insert("categories", category.as_str());
        }

        if let Some(cursor) = &self.after {
            let field = self.sort.field();
            let at = bson::DateTime::from_millis(cursor.millis);
            filter.insert(
                "$or",
                vec![
                    Bson::Document(doc! { field: { "$lt": at } }),
                    Bson::Document(doc! { field: at, "_id": { "$lt": cursor.id.as_str() } }),
                ],
            );
        }

        filter
    }
}

/// 증감 가능한 카운터 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleCounter {
    Views,
    Likes,
}

impl ArticleCounter {
    pub fn field(&self) -> &'static str {
        match self {
            ArticleCounter::Views => "view_count",
            ArticleCounter::Likes => "like_count",
        }
    }
}

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: &Article) -> Result<(), AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>, AppError>;

    async fn find(&self, query: &ArticleQuery) -> Result<Vec<Article>, AppError>;

    /// 수정 후 문서를 반환합니다. 대상이 없으면 `None`.
    async fn update(&self, id: &str, changes: &ArticleChanges) -> Result<Option<Article>, AppError>;

    /// 카운터를 원자적으로 증감합니다. 대상이 없으면 `false`.
    async fn increment(&self, id: &str, counter: ArticleCounter, delta: i64) -> Result<bool, AppError>;

    async fn set_like_count(&self, id: &str, like_count: i64) -> Result<bool, AppError>;

    /// 게시 상태 아티클의 카테고리별 개수
    async fn category_counts(&self) -> Result<Vec<(String, u64)>, AppError>;

    async fn count_by_status(&self, status: ArticleStatus) -> Result<u64, AppError>;
}

pub struct MongoArticleRepository {
    collection: Collection<Article>,
}

impl MongoArticleRepository {
    pub fn new(database: &Database) -> Self {
        Self { collection: database.articles() }
    }
}

#[async_trait]
impl ArticleRepository for MongoArticleRepository {
    async fn insert(&self, article: &Article) -> Result<(), AppError> {
        self.collection
            .insert_one(article)
            .await
            .map_err(AppError::from_store)?;

        debug!("아티클 저장: {}", article.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>, AppError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(AppError::from_store)
    }

    async fn find(&self, query: &ArticleQuery) -> Result<Vec<Article>, AppError> {
        let field = query.sort.field();

        self.collection
            .find(query.to_filter())
            .sort(doc! { field: -1, "_id": -1 })
            .limit(query.limit)
            .await
            .map_err(AppError::from_store)?
            .try_collect()
            .await
            .map_err(AppError::from_store)
    }

    async fn update(&self, id: &str, changes: &ArticleChanges) -> Result<Option<Article>, AppError> {
        let set = bson::to_document(changes).context("아티클 수정 내용 직렬화 실패")?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .with_options(options)
            .await
            .map_err(AppError::from_store)
    }

    async fn increment(&self, id: &str, counter: ArticleCounter, delta: i64) -> Result<bool, AppError> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$inc": { counter.field(): delta } })
            .await
            .map_err(AppError::from_store)?;

        Ok(result.matched_count > 0)
    }

    async fn set_like_count(&self, id: &str, like_count: i64) -> Result<bool, AppError> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "like_count": like_count } })
            .await
            .map_err(AppError::from_store)?;

        Ok(result.matched_count > 0)
    }

    async fn category_counts(&self) -> Result<Vec<(String, u64)>, AppError> {
        let pipeline = vec![
            doc! { "$match": { "status": ArticleStatus::Published.as_str() } },
            doc! { "$unwind": "$categories" },
            doc! { "$group": { "_id": "$categories", "count": { "$sum": 1 } } },
        ];

        let rows: Vec<Document> = self
            .collection
            .aggregate(pipeline)
            .await
            .map_err(AppError::from_store)?
            .try_collect()
            .await
            .map_err(AppError::from_store)?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let name = row.get_str("_id").ok()?.to_string();
                let count = match row.get("count")? {
                    Bson::Int32(n) => i64::from(*n),
                    Bson::Int64(n) => *n,
                    _ => return None,
                };
                Some((name, u64::try_from(count).unwrap_or(0)))
            })
            .collect())
    }

    async fn count_by_status(&self, status: ArticleStatus) -> Result<u64, AppError> {
        self.collection
            .count_documents(doc! { "status": status.as_str() })
            .await
            .map_err(AppError::from_store)
    }
}
