//! 비로그인 좋아요
//!
//! 로그인하지 않은 방문자의 좋아요는 클라이언트 상태 목록 `sx_likes` 에만 기록됩니다.
//! 서버 좋아요 레코드와 아티클 카운터는 바뀌지 않습니다.
//!
//! 좋아요를 누르면 `likes_pending_save` 에 아티클 ID가 예약되고,
//! 로그인 직후 한 번만 꺼내져 실제 계정의 좋아요로 저장됩니다.

use std::sync::Arc;

use log::warn;
use serde_json::Value;

use crate::caching::client_state::{keys, toggled, ClientStateStore};
use crate::core::errors::AppError;
use crate::domain::dto::likes::LikeToggleResponse;
use crate::services::articles::ArticleService;

pub struct AnonymousLikes {
    client_state: Arc<dyn ClientStateStore>,
    articles: Arc<ArticleService>,
}

impl AnonymousLikes {
    pub fn new(client_state: Arc<dyn ClientStateStore>, articles: Arc<ArticleService>) -> Self {
        Self { client_state, articles }
    }

    /// 목록 안의 상태를 반전합니다. `like_count` 는 저장된 카운터 그대로입니다.
    pub async fn toggle(&self, client_id: &str, article_id: &str) -> Result<LikeToggleResponse, AppError> {
        let article = self.articles.require_public(article_id).await?;

        let liked = self.client_state.get_list(client_id, keys::LIKES).await?;
        let is_liked = !liked.iter().any(|id| id == article_id);

        self.client_state
            .set_list(client_id, keys::LIKES, &toggled(&liked, article_id, is_liked))
            .await?;

        if is_liked {
            self.client_state
                .set_value(client_id, keys::LIKES_PENDING_SAVE, Value::from(article_id))
                .await?;
        } else if self.pending(client_id).await?.as_deref() == Some(article_id) {
            self.client_state.remove(client_id, keys::LIKES_PENDING_SAVE).await?;
        }

        Ok(LikeToggleResponse {
            is_liked,
            like_count: article.like_count,
        })
    }

    pub async fn liked_ids(&self, client_id: &str) -> Vec<String> {
        self.client_state
            .get_list(client_id, keys::LIKES)
            .await
            .unwrap_or_else(|e| {
                warn!("로컬 좋아요 목록 조회 실패: {}", e);
                Vec::new()
            })
    }

    pub async fn is_liked(&self, client_id: &str, article_id: &str) -> bool {
        self.liked_ids(client_id).await.iter().any(|id| id == article_id)
    }

    /// 로그인한 사용자의 토글 결과를 로컬 목록에도 반영합니다.
    pub async fn mirror(&self, client_id: &str, article_id: &str, is_liked: bool) {
        let result = async {
            let liked = self.client_state.get_list(client_id, keys::LIKES).await?;
            self.client_state
                .set_list(client_id, keys::LIKES, &toggled(&liked, article_id, is_liked))
                .await
        }
        .await;

        if let Err(e) = result {
            warn!("로컬 좋아요 동기화 실패 ({}): {}", article_id, e);
        }
    }

    /// 저장 예약을 꺼냅니다. 같은 예약은 한 번만 반환됩니다.
    pub async fn take_pending(&self, client_id: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .client_state
            .take_value(client_id, keys::LIKES_PENDING_SAVE)
            .await?
            .and_then(|value| value.as_str().map(str::to_string)))
    }

    async fn pending(&self, client_id: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .client_state
            .get_value(client_id, keys::LIKES_PENDING_SAVE)
            .await?
            .and_then(|value| value.as_str().map(str::to_string)))
    }
}
