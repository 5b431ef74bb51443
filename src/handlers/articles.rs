//! 아티클 공개 API 핸들러
//!
//! 홈, 목록, 인기, 검색, 상세, 카테고리 화면의 데이터를 제공합니다.
//! 목록 계열은 저장소 오류를 빈 결과로 돌려주고, 상세만 404 를 반환합니다.

use actix_web::{get, web, HttpResponse};
use log::warn;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::articles::{
    ArticleDetailResponse, ArticleListQuery, ArticleResponse, CategoriesResponse, LimitQuery,
    SearchQuery,
};
use crate::domain::models::auth::OptionalUser;
use crate::domain::models::client::ClientId;
use crate::handlers::client_json;
use crate::services::analytics::events;

const DEFAULT_POPULAR_LIMIT: i64 = 10;
const DEFAULT_SEARCH_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 50;

fn bounded(limit: Option<i64>, default: i64) -> usize {
    usize::try_from(limit.unwrap_or(default).clamp(1, MAX_LIMIT)).unwrap_or(1)
}

/// 홈 화면: 인기 3개, 카테고리, 최신 첫 페이지
#[get("/home")]
pub async fn home(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.articles.home_feed().await))
}

/// 게시 아티클 목록 (커서 페이지네이션)
///
/// # Query
///
/// * `category` - `전체` 또는 생략 시 전체
/// * `limit` - 1..=50, 기본 20
/// * `cursor` - 이전 응답의 `next_cursor`
#[get("")]
pub async fn list_articles(
    state: web::Data<AppState>,
    query: web::Query<ArticleListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state
        .articles
        .list(&query.page(), query.category.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(page.map(ArticleResponse::from)))
}

#[get("/popular")]
pub async fn popular_articles(
    state: web::Data<AppState>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse, AppError> {
    let articles: Vec<ArticleResponse> = state
        .articles
        .popular(bounded(query.limit, DEFAULT_POPULAR_LIMIT))
        .await
        .into_iter()
        .map(ArticleResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(articles))
}

#[get("/search")]
pub async fn search_articles(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let result = state
        .articles
        .search(&query.q, bounded(query.limit, DEFAULT_SEARCH_LIMIT))
        .await;

    Ok(HttpResponse::Ok().json(result.map(ArticleResponse::from)))
}

/// 아티클 상세
///
/// 조회수를 올리고 호출자 기준 좋아요 여부를 함께 돌려줍니다.
/// 임시 저장, 보관된 아티클은 404 입니다.
#[get("/{id}")]
pub async fn get_article(
    state: web::Data<AppState>,
    path: web::Path<String>,
    user: OptionalUser,
    client_id: ClientId,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let mut article = state
        .articles
        .get_public(&id)
        .await
        .ok_or_else(|| AppError::NotFound("아티클을 찾을 수 없습니다.".to_string()))?;

    match state.articles.increment_view(&id).await {
        Ok(true) => article.view_count += 1,
        Ok(false) => {}
        Err(e) => warn!("조회수 증가 실패 ({}): {}", id, e),
    }

    state.events.record_event(
        events::ARTICLE_VIEW,
        &[
            ("article_id", id.clone()),
            ("logged_in", user.0.is_some().to_string()),
        ],
    );

    let is_liked = state
        .likes
        .is_liked_for(user.user_id(), client_id.as_str(), &id)
        .await;

    Ok(client_json(
        &client_id,
        ArticleDetailResponse {
            article: ArticleResponse::from(article),
            is_liked,
        },
    ))
}

#[get("/categories")]
pub async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(CategoriesResponse {
        categories: state.articles.categories().await,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::Value;

    use crate::domain::entities::articles::article::ArticleStatus;
    use crate::routes::configure_all_routes;
    use crate::test_support::{article, TestContext};

    fn context() -> TestContext {
        let mut popular = article("a1", 1, &["마케팅 & 팬덤"]);
        popular.view_count = 40;
        let mut draft = article("a3", 3, &["기타"]);
        draft.status = ArticleStatus::Draft;
        TestContext::new().with_articles(vec![popular, article("a2", 2, &["스포츠 테크"]), draft])
    }

    #[actix_web::test]
    async fn test_detail_increments_view_and_echoes_client_id() {
        let ctx = context();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.state()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/articles/a1")
            .insert_header(("X-Client-Id", "browser-1"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 200);
        assert_eq!(res.headers().get("X-Client-Id").unwrap(), "browser-1");
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["id"], "a1");
        assert_eq!(body["view_count"], 41);
        assert_eq!(body["is_liked"], false);
        assert_eq!(ctx.articles.get("a1").unwrap().view_count, 41);
        assert!(ctx.events.names().contains(&"article_view".to_string()));
    }

    #[actix_web::test]
    async fn test_detail_hides_drafts() {
        let ctx = context();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.state()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/articles/a3").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 404);
        assert_eq!(ctx.articles.get("a3").unwrap().view_count, 0);
    }

    #[actix_web::test]
    async fn test_popular_and_search_are_not_treated_as_ids() {
        let ctx = context();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.state()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/articles/popular?limit=1")
            .to_request();
        let popular: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(popular.as_array().unwrap().len(), 1);
        assert_eq!(popular[0]["id"], "a1");

        let req = test::TestRequest::get()
            .uri("/api/v1/articles/search?q=%EC%8A%A4%ED%8F%AC%EC%B8%A0")
            .to_request();
        let found: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found["data"].as_array().unwrap().len(), 1);
        assert_eq!(found["data"][0]["id"], "a2");
    }

    #[actix_web::test]
    async fn test_list_only_shows_published() {
        let ctx = context();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.state()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/articles").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["a2", "a1"]);
        assert_eq!(body["has_more"], false);
    }

    #[actix_web::test]
    async fn test_list_ignores_status_parameter() {
        let mut archived = article("z1", 5, &["기타"]);
        archived.status = ArticleStatus::Archived;
        let mut draft = article("d1", 6, &["기타"]);
        draft.status = ArticleStatus::Draft;
        let ctx = TestContext::new().with_articles(vec![article("a1", 1, &["기타"]), archived, draft]);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.state()))
                .configure(configure_all_routes),
        )
        .await;

        for status in ["archived", "draft", "all"] {
            let req = test::TestRequest::get()
                .uri(&format!("/api/v1/articles?status={}", status))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;

            let ids: Vec<&str> = body["data"]
                .as_array()
                .unwrap()
                .iter()
                .map(|a| a["id"].as_str().unwrap())
                .collect();
            assert_eq!(ids, vec!["a1"], "status={}", status);
        }
    }
}
