//! 로그인 사용자 본인 API 핸들러
//!
//! `/api/v1/me` 스코프는 `AuthMiddleware::required()` 뒤에 있으므로
//! 모든 핸들러가 [`AuthenticatedUser`] 를 바로 받습니다.

use actix_web::{delete, get, put, web, HttpResponse};
use log::warn;
use serde_json::json;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::users::{OnboardingRequest, PreferencesRequest, ProfileResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::analytics::events;

fn not_found() -> AppError {
    AppError::NotFound("사용자를 찾을 수 없습니다.".to_string())
}

/// 관리자 PIN 토큰도 `required()` 를 통과하지만 계정 문서가 없습니다
fn account(user: AuthenticatedUser) -> Result<AuthenticatedUser, AppError> {
    if user.is_pin_session() {
        return Err(AppError::AuthorizationError(
            "관리자 세션에는 사용자 프로필이 없습니다.".to_string(),
        ));
    }
    Ok(user)
}

/// 내 프로필, 온보딩 필요 여부, 좋아요 통계
#[get("")]
pub async fn get_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = account(user)?;
    let stored = state.users.get_by_id(&user.user_id).await?.ok_or_else(not_found)?;
    let needs_onboarding = state.users.needs_onboarding(&stored);

    let like_stats = state.likes.stats(&user.user_id).await.unwrap_or_else(|e| {
        warn!("좋아요 통계 조회 실패 ({}): {}", user.user_id, e);
        Default::default()
    });

    Ok(HttpResponse::Ok().json(ProfileResponse {
        user: UserResponse::from(stored),
        needs_onboarding,
        like_stats,
    }))
}

/// 온보딩 세 항목 저장
#[put("/onboarding")]
pub async fn complete_onboarding(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<OnboardingRequest>,
) -> Result<HttpResponse, AppError> {
    let user = account(user)?;
    let updated = state.users.save_onboarding(&user.user_id, &payload).await?;

    state.events.record_event(
        events::ONBOARDING_COMPLETED,
        &[
            ("user_id", user.user_id.clone()),
            ("interests", updated.interests.len().to_string()),
        ],
    );

    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

#[put("/preferences")]
pub async fn update_preferences(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<PreferencesRequest>,
) -> Result<HttpResponse, AppError> {
    let user = account(user)?;
    let updated = state.users.update_preferences(&user.user_id, &payload).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

/// 회원 탈퇴: 계정 비활성화 후 좋아요 기록 삭제, 카운터 재계산
#[delete("")]
pub async fn deactivate(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = account(user)?;
    state.users.deactivate(&user.user_id).await?;

    if let Err(e) = state.likes.delete_user_likes(&user.user_id).await {
        warn!("탈퇴 사용자 좋아요 삭제 실패 ({}): {}", user.user_id, e);
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "탈퇴 처리되었습니다." })))
}
