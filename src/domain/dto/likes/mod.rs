//! 좋아요 DTO

use serde::Serialize;

use crate::domain::dto::articles::ArticleResponse;

/// 좋아요 토글 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeToggleResponse {
    pub is_liked: bool,
    /// 익명 토글은 서버 카운터를 바꾸지 않으므로 현재 저장된 값
    pub like_count: i64,
}

/// `GET /api/v1/articles/{id}/like`
#[derive(Debug, Clone, Serialize)]
pub struct LikeStatusResponse {
    pub article_id: String,
    pub is_liked: bool,
    pub like_count: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LikeStatsResponse {
    pub total_likes: u64,
    /// 최근 좋아요한 아티클 ID (최대 10개)
    pub recent_likes: Vec<String>,
}

/// 좋아요한 아티클 화면
#[derive(Debug, Clone, Serialize)]
pub struct LikedArticlesResponse {
    pub articles: Vec<ArticleResponse>,
    pub total: usize,
}

/// 관리자 좋아요 정리 결과
#[derive(Debug, Clone, Serialize)]
pub struct CleanupResponse {
    pub deleted: u64,
}

/// 관리자 카운터 재계산 결과
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileResponse {
    pub article_id: String,
    pub like_count: i64,
}
