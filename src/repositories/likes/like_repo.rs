//! 좋아요 데이터 액세스 계층
//!
//! 토글은 단일 `find_one_and_update` 파이프라인 갱신으로 처리합니다.
//! 레코드가 없으면 활성 상태로 생성되고, 있으면 `is_active` 가 반전됩니다.
//! 반환값은 갱신 직전 문서이므로 호출자는 이전 상태로 되돌릴 수 있습니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc},
    options::{FindOneAndUpdateOptions, ReplaceOptions, ReturnDocument},
    Collection,
};

use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::entities::likes::user_like::UserLike;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn find(&self, user_id: &str, article_id: &str) -> Result<Option<UserLike>, AppError>;

    /// 상태를 반전하고 반전 전 레코드를 반환합니다. 처음 누른 경우 `None`.
    async fn toggle(
        &self,
        user_id: &str,
        article_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UserLike>, AppError>;

    /// 토글 이전 상태로 되돌립니다. `previous` 가 `None` 이면 레코드를 삭제합니다.
    async fn restore(
        &self,
        user_id: &str,
        article_id: &str,
        previous: Option<&UserLike>,
    ) -> Result<(), AppError>;

    /// 마지막 상태 전환 시각 내림차순
    async fn find_by_user(
        &self,
        user_id: &str,
        active_only: bool,
        limit: i64,
    ) -> Result<Vec<UserLike>, AppError>;

    /// 아티클의 활성 좋아요
    async fn find_by_article(&self, article_id: &str, limit: i64) -> Result<Vec<UserLike>, AppError>;

    async fn count_active_by_article(&self, article_id: &str) -> Result<u64, AppError>;

    async fn count_active_by_user(&self, user_id: &str) -> Result<u64, AppError>;

    async fn delete_by_user(&self, user_id: &str) -> Result<u64, AppError>;

    /// 비활성 레코드 정리
    async fn delete_inactive(&self) -> Result<u64, AppError>;
}

pub struct MongoLikeRepository {
    collection: Collection<UserLike>,
}

impl MongoLikeRepository {
    pub fn new(database: &Database) -> Self {
        Self { collection: database.user_likes() }
    }
}

#[async_trait]
impl LikeRepository for MongoLikeRepository {
    async fn find(&self, user_id: &str, article_id: &str) -> Result<Option<UserLike>, AppError> {
        self.collection
            .find_one(doc! { "_id": UserLike::record_id(user_id, article_id) })
            .await
            .map_err(AppError::from_store)
    }

    async fn toggle(
        &self,
        user_id: &str,
        article_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UserLike>, AppError> {
        let now = bson::DateTime::from_millis(now.timestamp_millis());

        // 값이 `$` 로 시작해도 필드 경로로 해석되지 않도록 $literal
        let pipeline = vec![doc! {
            "$set": {
                "user_id": { "$literal": user_id },
                "article_id": { "$literal": article_id },
                "is_active": { "$not": [{ "$ifNull": ["$is_active", false] }] },
                "created_at": { "$ifNull": ["$created_at", now] },
                "updated_at": now,
            }
        }];

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::Before)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": UserLike::record_id(user_id, article_id) }, pipeline)
            .with_options(options)
            .await
            .map_err(AppError::from_store)
    }

    async fn restore(
        &self,
        user_id: &str,
        article_id: &str,
        previous: Option<&UserLike>,
    ) -> Result<(), AppError> {
        let filter = doc! { "_id": UserLike::record_id(user_id, article_id) };

        match previous {
            Some(record) => {
                let options = ReplaceOptions::builder().upsert(true).build();
                self.collection
                    .replace_one(filter, record)
                    .with_options(options)
                    .await
                    .map_err(AppError::from_store)?;
            }
            None => {
                self.collection
                    .delete_one(filter)
                    .await
                    .map_err(AppError::from_store)?;
            }
        }

        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: &str,
        active_only: bool,
        limit: i64,
    ) -> Result<Vec<UserLike>, AppError> {
        let mut filter = doc! { "user_id": user_id };
        if active_only {
            filter.insert("is_active", true);
        }

        self.collection
            .find(filter)
            .sort(doc! { "updated_at": -1, "created_at": -1 })
            .limit(limit)
            .await
            .map_err(AppError::from_store)?
            .try_collect()
            .await
            .map_err(AppError::from_store)
    }

    async fn find_by_article(&self, article_id: &str, limit: i64) -> Result<Vec<UserLike>, AppError> {
        self.collection
            .find(doc! { "article_id": article_id, "is_active": true })
            .sort(doc! { "updated_at": -1, "created_at": -1 })
            .limit(limit)
            .await
            .map_err(AppError::from_store)?
            .try_collect()
            .await
            .map_err(AppError::from_store)
    }

    async fn count_active_by_article(&self, article_id: &str) -> Result<u64, AppError> {
        self.collection
            .count_documents(doc! { "article_id": article_id, "is_active": true })
            .await
            .map_err(AppError::from_store)
    }

    async fn count_active_by_user(&self, user_id: &str) -> Result<u64, AppError> {
        self.collection
            .count_documents(doc! { "user_id": user_id, "is_active": true })
            .await
            .map_err(AppError::from_store)
    }

    async fn delete_by_user(&self, user_id: &str) -> Result<u64, AppError> {
        let result = self
            .collection
            .delete_many(doc! { "user_id": user_id })
            .await
            .map_err(AppError::from_store)?;

        Ok(result.deleted_count)
    }

    async fn delete_inactive(&self) -> Result<u64, AppError> {
        let result = self
            .collection
            .delete_many(doc! { "is_active": false })
            .await
            .map_err(AppError::from_store)?;

        Ok(result.deleted_count)
    }
}
