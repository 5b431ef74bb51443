//! 좋아요 API 핸들러
//!
//! 로그인 사용자는 계정 기록을, 비로그인 사용자는 클라이언트 상태 목록을 사용합니다.
//! 응답에는 항상 `X-Client-Id` 가 포함됩니다.

use actix_web::{get, post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::likes::LikeStatusResponse;
use crate::domain::models::auth::OptionalUser;
use crate::domain::models::client::ClientId;
use crate::handlers::client_json;

/// 좋아요 토글
#[post("/{id}/like")]
pub async fn toggle_like(
    state: web::Data<AppState>,
    path: web::Path<String>,
    user: OptionalUser,
    client_id: ClientId,
) -> Result<HttpResponse, AppError> {
    let result = state
        .likes
        .toggle_for(user.user_id(), client_id.as_str(), &path.into_inner())
        .await?;

    Ok(client_json(&client_id, result))
}

#[get("/{id}/like")]
pub async fn like_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    user: OptionalUser,
    client_id: ClientId,
) -> Result<HttpResponse, AppError> {
    let article_id = path.into_inner();
    let article = state.articles.require_public(&article_id).await?;
    let is_liked = state
        .likes
        .is_liked_for(user.user_id(), client_id.as_str(), &article_id)
        .await;

    Ok(client_json(
        &client_id,
        LikeStatusResponse {
            article_id,
            is_liked,
            like_count: article.like_count,
        },
    ))
}

/// 좋아요한 아티클 화면
#[get("/likes")]
pub async fn liked_articles(
    state: web::Data<AppState>,
    user: OptionalUser,
    client_id: ClientId,
) -> Result<HttpResponse, AppError> {
    let response = state
        .likes
        .liked_articles(user.user_id(), client_id.as_str())
        .await;

    Ok(client_json(&client_id, response))
}
