//! 채용/대외활동 API 핸들러
//!
//! 공고는 고정된 목업 카탈로그에서 제공하고, 저장 목록만 클라이언트 상태에 남깁니다.

use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::jobs::JobsQuery;
use crate::domain::models::auth::OptionalUser;
use crate::domain::models::client::ClientId;
use crate::handlers::client_json;

/// 공고 목록 한 페이지
///
/// # Query
///
/// * `type` - `job`(기본) | `activity`
/// * `sort` - `latest`(기본) | `deadline` | `views`
/// * `page` - 1부터, 한 페이지 8개
#[get("")]
pub async fn list_jobs(
    state: web::Data<AppState>,
    query: web::Query<JobsQuery>,
    user: OptionalUser,
    client_id: ClientId,
) -> Result<HttpResponse, AppError> {
    let page = state
        .jobs
        .list(&query, user.user_id(), client_id.as_str(), Utc::now())
        .await?;

    Ok(client_json(&client_id, page))
}

/// 저장 버튼
///
/// 비로그인 상태면 저장을 예약하고 `login_required` 를 돌려줍니다.
/// 예약은 다음 카카오 로그인 때 반영됩니다.
#[post("/{id}/save")]
pub async fn toggle_save(
    state: web::Data<AppState>,
    path: web::Path<String>,
    user: OptionalUser,
    client_id: ClientId,
) -> Result<HttpResponse, AppError> {
    let response = state
        .jobs
        .toggle_save(user.user_id(), client_id.as_str(), &path.into_inner())
        .await?;

    Ok(client_json(&client_id, response))
}

#[get("/saved")]
pub async fn saved_jobs(
    state: web::Data<AppState>,
    user: OptionalUser,
    client_id: ClientId,
) -> Result<HttpResponse, AppError> {
    let user_id = user
        .user_id()
        .ok_or_else(|| AppError::AuthenticationError("로그인이 필요합니다.".to_string()))?;

    let response = state.jobs.saved(user_id, client_id.as_str(), Utc::now()).await?;
    Ok(client_json(&client_id, response))
}
