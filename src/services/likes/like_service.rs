//! # 좋아요 서비스 구현
//!
//! (사용자, 아티클) 쌍마다 하나의 레코드를 두고 세 가지 상태를 오갑니다.
//!
//! ```text
//! 레코드 없음 ──toggle──▶ 활성 ──toggle──▶ 비활성 ──toggle──▶ 활성 ...
//! ```
//!
//! ## 쓰기 순서
//!
//! 1. 레코드 상태를 원자적으로 반전하고 반전 전 상태를 받습니다.
//! 2. 아티클 `like_count` 를 `$inc` 로 ±1 합니다.
//! 3. 2단계가 실패하면 1단계를 이전 상태로 되돌리고 에러를 전파합니다.
//!    되돌리기마저 실패하면 불일치를 로그로 남기고,
//!    [`LikeService::reconcile_like_count`] 가 활성 레코드 수로 카운터를 다시 맞춥니다.
//!
//! 두 기기에서 동시에 토글해도 1단계에서 직렬화되므로 카운터가 두 번 증가하지 않습니다.

use std::sync::Arc;

use chrono::Utc;
use log::{error, info, warn};

use crate::caching::client_state::ClientStateStore;
use crate::core::errors::AppError;
use crate::domain::dto::articles::ArticleResponse;
use crate::domain::dto::likes::{LikeStatsResponse, LikeToggleResponse, LikedArticlesResponse};
use crate::domain::entities::likes::user_like::UserLike;
use crate::repositories::likes::LikeRepository;
use crate::services::analytics::{events, EventReporter};
use crate::services::articles::ArticleService;
use crate::services::likes::anonymous::AnonymousLikes;

/// 좋아요한 아티클 ID 조회 개수
pub const LIKED_IDS_LIMIT: i64 = 50;
/// 아티클별 좋아요 사용자 조회 개수
pub const LIKED_USERS_LIMIT: i64 = 100;
/// 프로필 화면 최근 좋아요 개수
pub const RECENT_LIKES_LIMIT: i64 = 10;
/// 사용자 좋아요 삭제 시 카운터를 다시 맞출 활성 레코드 최대 개수
pub const USER_LIKES_SCAN_LIMIT: i64 = 1_000;

pub struct LikeService {
    likes: Arc<dyn LikeRepository>,
    articles: Arc<ArticleService>,
    anonymous: AnonymousLikes,
    events: Arc<dyn EventReporter>,
}

impl LikeService {
    pub fn new(
        likes: Arc<dyn LikeRepository>,
        articles: Arc<ArticleService>,
        client_state: Arc<dyn ClientStateStore>,
        events: Arc<dyn EventReporter>,
    ) -> Self {
        Self {
            likes,
            anonymous: AnonymousLikes::new(client_state, articles.clone()),
            articles,
            events,
        }
    }

    /// 로그인 사용자의 좋아요 토글
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 아티클 없음
    /// * `AppError::DatabaseError` - 반전 또는 카운터 갱신 실패 (반전은 되돌려짐)
    pub async fn toggle(&self, user_id: &str, article_id: &str) -> Result<LikeToggleResponse, AppError> {
        let article = self.articles.require_public(article_id).await?;

        let previous = self.likes.toggle(user_id, article_id, Utc::now()).await?;
        let is_liked = !previous.as_ref().is_some_and(|record| record.is_active);
        let delta = if is_liked { 1 } else { -1 };

        let counter = match self.articles.adjust_like_count(article_id, delta).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(AppError::NotFound("아티클을 찾을 수 없습니다.".to_string())),
            Err(e) => Err(e),
        };

        if let Err(e) = counter {
            self.compensate(user_id, article_id, previous.as_ref()).await;
            return Err(e);
        }

        let like_count = match self.likes.count_active_by_article(article_id).await {
            Ok(count) => count as i64,
            Err(e) => {
                warn!("좋아요 수 조회 실패, 카운터 값 사용 ({}): {}", article_id, e);
                article.like_count + delta
            }
        };

        let event = if is_liked { events::ARTICLE_LIKE } else { events::ARTICLE_UNLIKE };
        self.events.record_event(event, &[("article_id", article_id.to_string())]);

        Ok(LikeToggleResponse { is_liked, like_count })
    }

    async fn compensate(&self, user_id: &str, article_id: &str, previous: Option<&UserLike>) {
        match self.likes.restore(user_id, article_id, previous).await {
            Ok(()) => warn!("좋아요 카운터 갱신 실패, 레코드 복원: {} / {}", user_id, article_id),
            Err(e) => error!(
                "좋아요 레코드 복원 실패, 카운터 재계산 필요: {} / {} ({})",
                user_id, article_id, e
            ),
        }
    }

    /// 로그인 여부에 따라 계정 또는 클라이언트 상태에서 토글합니다.
    /// 로그인 사용자의 결과는 로컬 목록에도 반영됩니다.
    pub async fn toggle_for(
        &self,
        user_id: Option<&str>,
        client_id: &str,
        article_id: &str,
    ) -> Result<LikeToggleResponse, AppError> {
        match user_id {
            Some(user_id) => {
                let result = self.toggle(user_id, article_id).await?;
                self.anonymous.mirror(client_id, article_id, result.is_liked).await;
                Ok(result)
            }
            None => self.anonymous.toggle(client_id, article_id).await,
        }
    }

    pub async fn is_liked(&self, user_id: &str, article_id: &str) -> Result<bool, AppError> {
        Ok(self
            .likes
            .find(user_id, article_id)
            .await?
            .is_some_and(|record| record.is_active))
    }

    /// 호출자 기준 좋아요 여부. 저장소를 읽지 못하면 로컬 목록으로 대신합니다.
    pub async fn is_liked_for(&self, user_id: Option<&str>, client_id: &str, article_id: &str) -> bool {
        if let Some(user_id) = user_id {
            match self.is_liked(user_id, article_id).await {
                Ok(liked) => return liked,
                Err(e) => warn!("좋아요 상태 조회 실패, 로컬 목록 사용: {}", e),
            }
        }
        self.anonymous.is_liked(client_id, article_id).await
    }

    /// 최근 좋아요한 아티클 ID (최대 50개)
    pub async fn liked_article_ids(&self, user_id: &str) -> Result<Vec<String>, AppError> {
        Ok(self
            .likes
            .find_by_user(user_id, true, LIKED_IDS_LIMIT)
            .await?
            .into_iter()
            .map(|record| record.article_id)
            .collect())
    }

    pub async fn liked_ids_for(&self, user_id: Option<&str>, client_id: &str) -> Vec<String> {
        if let Some(user_id) = user_id {
            match self.liked_article_ids(user_id).await {
                Ok(ids) => return ids,
                Err(e) => warn!("좋아요 목록 조회 실패, 로컬 목록 사용: {}", e),
            }
        }
        self.anonymous.liked_ids(client_id).await
    }

    /// 좋아요한 아티클 화면. 삭제되었거나 비공개가 된 아티클은 빠집니다.
    pub async fn liked_articles(&self, user_id: Option<&str>, client_id: &str) -> LikedArticlesResponse {
        let ids = self.liked_ids_for(user_id, client_id).await;
        let articles: Vec<ArticleResponse> = self
            .articles
            .find_public_many(&ids)
            .await
            .into_iter()
            .map(ArticleResponse::from)
            .collect();

        LikedArticlesResponse {
            total: articles.len(),
            articles,
        }
    }

    /// 활성 레코드 수
    pub async fn like_count(&self, article_id: &str) -> Result<u64, AppError> {
        self.likes.count_active_by_article(article_id).await
    }

    /// 아티클을 좋아요한 사용자 ID (최대 100명)
    pub async fn liked_users(&self, article_id: &str) -> Result<Vec<String>, AppError> {
        Ok(self
            .likes
            .find_by_article(article_id, LIKED_USERS_LIMIT)
            .await?
            .into_iter()
            .map(|record| record.user_id)
            .collect())
    }

    pub async fn stats(&self, user_id: &str) -> Result<LikeStatsResponse, AppError> {
        let total_likes = self.likes.count_active_by_user(user_id).await?;
        let recent_likes = self
            .likes
            .find_by_user(user_id, true, RECENT_LIKES_LIMIT)
            .await?
            .into_iter()
            .map(|record| record.article_id)
            .collect();

        Ok(LikeStatsResponse {
            total_likes,
            recent_likes,
        })
    }

    pub async fn delete_user_likes(&self, user_id: &str) -> Result<u64, AppError> {
        let active = self
            .likes
            .find_by_user(user_id, true, USER_LIKES_SCAN_LIMIT)
            .await?;
        let deleted = self.likes.delete_by_user(user_id).await?;

        for like in &active {
            if let Err(e) = self.reconcile_like_count(&like.article_id).await {
                warn!("좋아요 카운터 재계산 실패 ({}): {}", like.article_id, e);
            }
        }

        info!(
            "🧹 사용자 좋아요 삭제: {} ({}건, 카운터 {}개 재계산)",
            user_id,
            deleted,
            active.len()
        );
        Ok(deleted)
    }

    /// 비활성 레코드 정리
    pub async fn cleanup_inactive(&self) -> Result<u64, AppError> {
        let deleted = self.likes.delete_inactive().await?;
        info!("🧹 비활성 좋아요 정리: {}건", deleted);
        Ok(deleted)
    }

    /// 활성 레코드 수로 아티클 카운터를 다시 맞춥니다.
    pub async fn reconcile_like_count(&self, article_id: &str) -> Result<i64, AppError> {
        let count = self.likes.count_active_by_article(article_id).await? as i64;

        if !self.articles.set_like_count(article_id, count).await? {
            return Err(AppError::NotFound("아티클을 찾을 수 없습니다.".to_string()));
        }

        info!("🔁 좋아요 카운터 재계산: {} = {}", article_id, count);
        Ok(count)
    }

    /// 로그인 전 좋아요 예약을 계정에 반영합니다.
    ///
    /// 예약은 한 번만 꺼내지며, 이미 좋아요한 아티클이면 아무것도 하지 않습니다.
    /// 반영된 아티클 ID를 반환합니다.
    pub async fn consume_pending(&self, user_id: &str, client_id: &str) -> Result<Option<String>, AppError> {
        let Some(article_id) = self.anonymous.take_pending(client_id).await? else {
            return Ok(None);
        };

        if self.is_liked(user_id, &article_id).await? {
            return Ok(None);
        }

        self.toggle(user_id, &article_id).await?;
        info!("💾 로그인 전 좋아요 반영: {} / {}", user_id, article_id);
        Ok(Some(article_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::client_state::keys;
    use crate::repositories::articles::ArticleRepository;
    use crate::services::analytics::NoopEventReporter;
    use crate::test_support::{
        article, MemoryArticleRepository, MemoryClientStateStore, MemoryLikeRepository, RecordingReporter,
    };

    struct Fixture {
        service: LikeService,
        articles: Arc<MemoryArticleRepository>,
        likes: Arc<MemoryLikeRepository>,
        client_state: Arc<MemoryClientStateStore>,
    }

    fn fixture_with_events(events: Arc<dyn EventReporter>) -> Fixture {
        let articles = Arc::new(MemoryArticleRepository::with(vec![
            article("a1", 1, &["기타"]),
            article("a2", 2, &["기타"]),
        ]));
        let likes = Arc::new(MemoryLikeRepository::default());
        let client_state = Arc::new(MemoryClientStateStore::default());
        let service = LikeService::new(
            likes.clone(),
            Arc::new(ArticleService::new(articles.clone())),
            client_state.clone(),
            events,
        );

        Fixture {
            service,
            articles,
            likes,
            client_state,
        }
    }

    fn fixture() -> Fixture {
        fixture_with_events(Arc::new(NoopEventReporter))
    }

    #[actix_web::test]
    async fn test_toggle_walks_the_three_states() {
        let f = fixture();

        let first = f.service.toggle("u1", "a1").await.unwrap();
        assert_eq!(first, LikeToggleResponse { is_liked: true, like_count: 1 });
        assert_eq!(f.articles.get("a1").unwrap().like_count, 1);

        let second = f.service.toggle("u1", "a1").await.unwrap();
        assert_eq!(second, LikeToggleResponse { is_liked: false, like_count: 0 });
        assert!(!f.likes.record("u1", "a1").unwrap().is_active);
        assert_eq!(f.articles.get("a1").unwrap().like_count, 0);

        let third = f.service.toggle("u1", "a1").await.unwrap();
        assert!(third.is_liked);
        assert_eq!(f.articles.get("a1").unwrap().like_count, 1);
    }

    #[actix_web::test]
    async fn test_reactivation_keeps_creation_time() {
        let f = fixture();

        f.service.toggle("u1", "a1").await.unwrap();
        let created_at = f.likes.record("u1", "a1").unwrap().created_at;
        f.service.toggle("u1", "a1").await.unwrap();
        f.service.toggle("u1", "a1").await.unwrap();

        let record = f.likes.record("u1", "a1").unwrap();
        assert_eq!(record.created_at, created_at);
        assert!(record.last_changed_at() >= created_at);
    }

    #[actix_web::test]
    async fn test_counter_failure_restores_record() {
        let f = fixture();
        f.service.toggle("u1", "a1").await.unwrap();

        f.articles.fail_next_write();
        let result = f.service.toggle("u1", "a1").await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert!(f.likes.record("u1", "a1").unwrap().is_active);
        assert_eq!(f.articles.get("a1").unwrap().like_count, 1);
    }

    #[actix_web::test]
    async fn test_counter_failure_on_first_like_removes_record() {
        let f = fixture();
        f.articles.fail_next_write();

        assert!(f.service.toggle("u1", "a1").await.is_err());
        assert!(f.likes.record("u1", "a1").is_none());
    }

    #[actix_web::test]
    async fn test_unknown_article_is_not_found() {
        let f = fixture();

        let result = f.service.toggle("u1", "missing").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(f.likes.record("u1", "missing").is_none());
    }

    #[actix_web::test]
    async fn test_reconcile_repairs_drift() {
        let f = fixture();
        f.service.toggle("u1", "a1").await.unwrap();
        f.service.toggle("u2", "a1").await.unwrap();
        f.articles.set_like_count("a1", 7).await.unwrap();

        let count = f.service.reconcile_like_count("a1").await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(f.articles.get("a1").unwrap().like_count, 2);
    }

    #[actix_web::test]
    async fn test_anonymous_toggle_uses_client_state_only() {
        let f = fixture();

        let on = f.service.toggle_for(None, "c1", "a1").await.unwrap();
        assert!(on.is_liked);
        assert_eq!(on.like_count, 0);
        assert_eq!(f.articles.get("a1").unwrap().like_count, 0);
        assert!(f.likes.record("c1", "a1").is_none());
        assert_eq!(
            f.client_state.peek("c1", keys::LIKES_PENDING_SAVE),
            Some(serde_json::json!("a1"))
        );

        let off = f.service.toggle_for(None, "c1", "a1").await.unwrap();
        assert!(!off.is_liked);
        assert!(f.client_state.peek("c1", keys::LIKES_PENDING_SAVE).is_none());
    }

    #[actix_web::test]
    async fn test_pending_like_is_applied_once_after_login() {
        let f = fixture();
        f.service.toggle_for(None, "c1", "a2").await.unwrap();

        let applied = f.service.consume_pending("u1", "c1").await.unwrap();
        assert_eq!(applied.as_deref(), Some("a2"));
        assert!(f.service.is_liked("u1", "a2").await.unwrap());

        let again = f.service.consume_pending("u1", "c1").await.unwrap();
        assert!(again.is_none());
        assert_eq!(f.articles.get("a2").unwrap().like_count, 1);
    }

    #[actix_web::test]
    async fn test_account_toggle_mirrors_into_local_list() {
        let f = fixture();

        f.service.toggle_for(Some("u1"), "c1", "a1").await.unwrap();
        assert_eq!(f.client_state.peek("c1", keys::LIKES), Some(serde_json::json!(["a1"])));

        f.service.toggle_for(Some("u1"), "c1", "a1").await.unwrap();
        assert_eq!(f.client_state.peek("c1", keys::LIKES), Some(serde_json::json!([])));
    }

    #[actix_web::test]
    async fn test_stats_and_liked_articles() {
        let f = fixture();
        f.service.toggle("u1", "a1").await.unwrap();
        f.service.toggle("u1", "a2").await.unwrap();
        f.service.toggle("u2", "a2").await.unwrap();

        let stats = f.service.stats("u1").await.unwrap();
        assert_eq!(stats.total_likes, 2);
        assert_eq!(stats.recent_likes.len(), 2);

        let liked = f.service.liked_articles(Some("u1"), "c1").await;
        assert_eq!(liked.total, 2);

        let mut users = f.service.liked_users("a2").await.unwrap();
        users.sort();
        assert_eq!(users, vec!["u1", "u2"]);
    }

    #[actix_web::test]
    async fn test_cleanup_and_user_deletion() {
        let f = fixture();
        f.service.toggle("u1", "a1").await.unwrap();
        f.service.toggle("u1", "a1").await.unwrap();
        f.service.toggle("u1", "a2").await.unwrap();

        f.service.toggle("u2", "a2").await.unwrap();
        assert_eq!(f.articles.get("a2").unwrap().like_count, 2);

        assert_eq!(f.service.cleanup_inactive().await.unwrap(), 1);
        assert_eq!(f.service.delete_user_likes("u1").await.unwrap(), 1);

        assert_eq!(f.articles.get("a2").unwrap().like_count, 1);
        assert_eq!(f.articles.get("a1").unwrap().like_count, 0);
        assert!(f.likes.record("u1", "a2").is_none());
        assert!(f.likes.record("u2", "a2").unwrap().is_active);
    }

    #[actix_web::test]
    async fn test_like_events_are_reported() {
        let events = Arc::new(RecordingReporter::default());
        let f = fixture_with_events(events.clone());

        f.service.toggle("u1", "a1").await.unwrap();
        f.service.toggle("u1", "a1").await.unwrap();

        assert_eq!(events.names(), vec!["article_like", "article_unlike"]);
    }
}
