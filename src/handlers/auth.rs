//! Authentication HTTP Handlers
//!
//! 카카오 OAuth 2.0 로그인 흐름을 처리합니다.
//!
//! # Flow
//!
//! 1. `GET /api/v1/auth/kakao` - 카카오 인가 페이지 URL 발급
//! 2. 브라우저가 카카오 동의 후 프론트엔드 콜백으로 돌아옴
//! 3. `POST /api/v1/auth/kakao` - 프론트엔드가 인가 코드를 전달, 세션 토큰 발급
//! 4. `POST /api/v1/auth/logout` - 클라이언트 세션 정보 삭제
//!
//! 토큰은 상태 없는 JWT 이므로 로그아웃 후 폐기는 브라우저가 담당합니다.

use actix_web::{get, post, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::users::{KakaoLoginRequest, LoginUrlQuery};
use crate::domain::models::client::ClientId;
use crate::handlers::client_json;

/// 카카오 로그인 URL
///
/// # Query
///
/// * `state` - 콜백에서 그대로 돌려받을 값 (선택)
#[get("/kakao")]
pub async fn kakao_login_url(
    state: web::Data<AppState>,
    query: web::Query<LoginUrlQuery>,
) -> Result<HttpResponse, AppError> {
    let response = state.kakao_auth.login_url(query.state.as_deref())?;
    Ok(HttpResponse::Ok().json(response))
}

/// 카카오 인가 코드 교환 + 로그인
///
/// 로그인 전에 눌러 둔 좋아요/공고 저장 예약이 있으면 계정에 반영하고
/// 결과를 `pending` 으로 돌려줍니다.
///
/// # Errors
///
/// * `400` - 인가 코드 누락
/// * `409` - 이미 처리된 인가 코드
/// * `500` - 카카오 동의 거부 또는 API 실패
#[post("/kakao")]
pub async fn kakao_login(
    state: web::Data<AppState>,
    payload: web::Json<KakaoLoginRequest>,
    client_id: ClientId,
) -> Result<HttpResponse, AppError> {
    let response = state.kakao_auth.login(&payload, client_id.as_str()).await?;
    Ok(client_json(&client_id, response))
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>, client_id: ClientId) -> Result<HttpResponse, AppError> {
    state.kakao_auth.logout(client_id.as_str()).await?;
    Ok(client_json(&client_id, json!({ "message": "로그아웃되었습니다." })))
}
