//! 관리자 API 핸들러
//!
//! `POST /api/v1/admin/login` 만 공개이고, 나머지는 `/api/v1/admin` 스코프에서
//! `AuthMiddleware::required_with_role("admin")` 이 PIN 세션 토큰을 검사합니다.
//!
//! | 메서드 | 경로 | 내용 |
//! |--------|------|------|
//! | GET | `/dashboard` | 상태별 아티클 수, 사용자 수, 카테고리 수 |
//! | GET/POST | `/articles` | 관리자 목록 (보관 제외), 작성 |
//! | GET/PUT/DELETE | `/articles/{id}` | 조회, 수정, 보관 |
//! | POST | `/articles/{id}/reconcile-likes` | 좋아요 카운터 재계산 |
//! | GET | `/users` | 가입일 역순 사용자 목록 |
//! | PUT | `/users/{id}/role` | 역할 변경 |
//! | DELETE | `/users/{id}` | 비활성화 |
//! | GET | `/kakao-users` | 카카오 앱 연결 사용자 |
//! | POST | `/likes/cleanup` | 비활성 좋아요 기록 정리 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use log::warn;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::admin::KakaoUsersQuery;
use crate::domain::dto::articles::{
    AdminArticleQuery, ArticleResponse, CreateArticleRequest, LimitQuery, UpdateArticleRequest,
};
use crate::domain::dto::likes::{CleanupResponse, ReconcileResponse};
use crate::domain::dto::users::{AdminLoginRequest, RoleUpdateRequest, UserListResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;

/// 관리자 PIN 로그인
///
/// # Errors
///
/// * `400` - 6자리 숫자가 아님
/// * `401` - PIN 불일치
#[post("/api/v1/admin/login")]
pub async fn admin_login(
    state: web::Data<AppState>,
    payload: web::Json<AdminLoginRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.admin_auth.login(&payload)?))
}

#[get("/dashboard")]
pub async fn dashboard(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.admin.dashboard().await?))
}

#[get("/articles")]
pub async fn list_articles(
    state: web::Data<AppState>,
    query: web::Query<AdminArticleQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state
        .articles
        .admin_list(&query.page(), query.status.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(page.map(ArticleResponse::from)))
}

#[post("/articles")]
pub async fn create_article(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<CreateArticleRequest>,
) -> Result<HttpResponse, AppError> {
    let article = state
        .articles
        .create(payload.into_inner(), &user.user_id)
        .await?;

    Ok(HttpResponse::Created().json(ArticleResponse::from(article)))
}

/// 상태와 무관하게 조회 (임시 저장, 보관 포함)
#[get("/articles/{id}")]
pub async fn get_article(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let article = state.articles.require(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ArticleResponse::from(article)))
}

#[put("/articles/{id}")]
pub async fn update_article(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateArticleRequest>,
) -> Result<HttpResponse, AppError> {
    let article = state
        .articles
        .update(&path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ArticleResponse::from(article)))
}

/// 보관 처리. 문서는 지우지 않습니다.
#[delete("/articles/{id}")]
pub async fn archive_article(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let article = state.articles.soft_delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ArticleResponse::from(article)))
}

#[post("/articles/{id}/reconcile-likes")]
pub async fn reconcile_likes(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let article_id = path.into_inner();
    let like_count = state.likes.reconcile_like_count(&article_id).await?;

    Ok(HttpResponse::Ok().json(ReconcileResponse {
        article_id,
        like_count,
    }))
}

#[get("/users")]
pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse, AppError> {
    let users = state.users.list(query.limit).await?;
    let total = state.users.count().await?;

    Ok(HttpResponse::Ok().json(UserListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
        total,
    }))
}

#[put("/users/{id}/role")]
pub async fn update_user_role(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<RoleUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.users.set_role(&path.into_inner(), &payload.role).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[delete("/users/{id}")]
pub async fn deactivate_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = state.users.deactivate(&path.into_inner()).await?;

    if let Err(e) = state.likes.delete_user_likes(&user.id).await {
        warn!("비활성 사용자 좋아요 삭제 실패 ({}): {}", user.id, e);
    }

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[get("/kakao-users")]
pub async fn kakao_users(
    state: web::Data<AppState>,
    query: web::Query<KakaoUsersQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.admin.kakao_users(&query).await?))
}

#[post("/likes/cleanup")]
pub async fn cleanup_likes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let deleted = state.likes.cleanup_inactive().await?;
    Ok(HttpResponse::Ok().json(CleanupResponse { deleted }))
}
