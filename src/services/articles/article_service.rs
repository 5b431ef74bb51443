//! # 아티클 서비스 구현
//!
//! 공개 화면(홈, 목록, 상세, 검색)과 관리자 화면(작성, 수정, 보관)의
//! 아티클 비즈니스 로직을 담당합니다.
//!
//! ## 실패 정책
//!
//! | 종류 | 저장소 실패 시 |
//! |------|----------------|
//! | 읽기 (목록, 상세, 인기, 검색, 카테고리) | 빈 결과 또는 `None`, `error!` 로그 |
//! | 쓰기 (작성, 수정, 보관, 카운터) | 에러 전파 |
//!
//! ## 인기 점수
//!
//! ```text
//! score = view_count + like_count × 3
//! ```
//!
//! 최근 게시된 [`POPULAR_WINDOW`] 개 안에서 점수, 조회수, 작성일 순으로 정렬합니다.
//!
//! ## 검색
//!
//! 제목, 태그, 카테고리에 대한 대소문자 무시 부분 일치입니다.
//! 최근 게시된 [`SEARCH_WINDOW`] 개만 대상으로 하므로 그보다 오래된 아티클은 검색되지 않습니다.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use log::{error, info, warn};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::errors::AppError;
use crate::db::pagination::{Cursor, PageRequest, Paginated};
use crate::domain::dto::admin::ArticleStatusCounts;
use crate::domain::dto::articles::{
    ArticleResponse, CreateArticleRequest, HomeFeedResponse, UpdateArticleRequest,
};
use crate::domain::entities::articles::article::{
    Article, ArticleChanges, ArticleStatus, DEFAULT_ARTICLE_IMAGE, DEFAULT_ARTICLE_SOURCE,
};
use crate::domain::entities::categories::category::Category;
use crate::repositories::articles::{
    ArticleCounter, ArticleQuery, ArticleRepository, ArticleSort, StatusFilter,
};

/// 인기순 계산 대상 (최근 게시 기준)
pub const POPULAR_WINDOW: i64 = 50;

/// 검색 대상 (최근 게시 기준)
pub const SEARCH_WINDOW: i64 = 200;

/// 홈 화면 인기 아티클 개수
pub const HOME_POPULAR_COUNT: usize = 3;

const NOT_FOUND: &str = "아티클을 찾을 수 없습니다.";

pub struct ArticleService {
    articles: Arc<dyn ArticleRepository>,
}

impl ArticleService {
    pub fn new(articles: Arc<dyn ArticleRepository>) -> Self {
        Self { articles }
    }

    /// 관리자 아티클 작성
    ///
    /// # 기본값
    ///
    /// - `image`: [`DEFAULT_ARTICLE_IMAGE`]
    /// - `source`: [`DEFAULT_ARTICLE_SOURCE`]
    /// - `tags`: 비어 있으면 카테고리 복사
    /// - `published_at`: 생략 시 현재 시각
    /// - `status`: published
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 제목/본문 누락, 카테고리 없음, 형식 오류
    /// * `AppError::DatabaseError` - 저장 실패
    pub async fn create(&self, input: CreateArticleRequest, created_by: &str) -> Result<Article, AppError> {
        if input.title_kr.trim().is_empty() || input.content_kr.trim().is_empty() {
            return Err(AppError::ValidationError("제목과 본문은 필수입니다.".to_string()));
        }

        let categories = clean_list(&input.categories);
        if categories.is_empty() {
            return Err(AppError::ValidationError(
                "최소 하나의 카테고리를 선택해주세요.".to_string(),
            ));
        }

        input.validate().map_err(AppError::from_validation)?;

        let now = Utc::now();
        let published_at = input
            .published_at
            .as_deref()
            .map(parse_published_at)
            .transpose()?
            .unwrap_or(now);
        let status = input
            .status
            .as_deref()
            .map(parse_status)
            .transpose()?
            .unwrap_or_default();

        let tags = match clean_list(&input.tags) {
            tags if tags.is_empty() => categories.clone(),
            tags => tags,
        };

        let article = Article {
            id: ObjectId::new().to_hex(),
            title_kr: input.title_kr.trim().to_string(),
            title_en: non_empty(input.title_en),
            summary_kr: clean_list(&input.summary_kr),
            summary_en: input.summary_en.map(|lines| clean_list(&lines)).filter(|l| !l.is_empty()),
            content_kr: input.content_kr,
            content_en: non_empty(input.content_en),
            image: non_empty(input.image).unwrap_or_else(|| DEFAULT_ARTICLE_IMAGE.to_string()),
            source: non_empty(input.source).unwrap_or_else(|| DEFAULT_ARTICLE_SOURCE.to_string()),
            source_url: non_empty(input.source_url).unwrap_or_default(),
            categories,
            tags,
            published_at,
            created_at: now,
            updated_at: now,
            created_by: created_by.to_string(),
            status,
            view_count: 0,
            like_count: 0,
        };

        self.articles.insert(&article).await?;
        info!("📝 아티클 생성: {} ({})", article.id, article.title_kr);

        Ok(article)
    }

    /// 상태와 무관하게 조회합니다. 저장소 오류는 `None` 으로 처리합니다.
    pub async fn get_by_id(&self, id: &str) -> Option<Article> {
        match self.articles.find_by_id(id).await {
            Ok(article) => article,
            Err(e) => {
                error!("아티클 조회 실패 ({}): {}", id, e);
                None
            }
        }
    }

    /// 쓰기 경로용 조회. 저장소 오류는 그대로 전파합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 대상 아티클 없음
    pub async fn require(&self, id: &str) -> Result<Article, AppError> {
        self.articles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// 공개 상세 화면용. 임시 저장/보관된 아티클은 보이지 않습니다.
    pub async fn get_public(&self, id: &str) -> Option<Article> {
        self.get_by_id(id).await.filter(Article::is_public)
    }

    /// 좋아요처럼 공개 아티클에만 허용되는 쓰기 경로용 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 없거나 임시 저장/보관 상태
    pub async fn require_public(&self, id: &str) -> Result<Article, AppError> {
        let article = self.require(id).await?;
        if !article.is_public() {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        Ok(article)
    }

    /// 공개 목록. 게시 상태만, 게시일 내림차순
    ///
    /// `category` 가 `전체` 또는 생략이면 필터 없음.
    /// 커서가 잘못되면 `ValidationError`, 저장소 오류는 빈 페이지입니다.
    pub async fn list(
        &self,
        page: &PageRequest,
        category: Option<&str>,
    ) -> Result<Paginated<Article>, AppError> {
        let category = if Category::is_unfiltered(category) {
            None
        } else {
            category.map(|c| c.trim().to_string())
        };

        let query = ArticleQuery::published(page.limit() + 1)
            .in_category(category)
            .after(page.cursor()?);

        Ok(self.page_of(&query, page.limit()).await)
    }

    pub async fn list_by_category(
        &self,
        category: &str,
        page: &PageRequest,
    ) -> Result<Paginated<Article>, AppError> {
        self.list(page, Some(category)).await
    }

    /// 관리자 목록: 작성일 내림차순
    ///
    /// - `status`: 생략 시 보관 제외(임시 저장 포함), `all` 이면 전체
    pub async fn admin_list(
        &self,
        page: &PageRequest,
        status: Option<&str>,
    ) -> Result<Paginated<Article>, AppError> {
        let status = match status.map(str::trim).filter(|s| !s.is_empty()) {
            None => StatusFilter::NotArchived,
            Some(s) if s.eq_ignore_ascii_case("all") => StatusFilter::Any,
            Some(s) => StatusFilter::Only(parse_status(s)?),
        };

        let query = ArticleQuery {
            status,
            category: None,
            sort: ArticleSort::CreatedDesc,
            after: page.cursor()?,
            limit: page.limit() + 1,
        };

        Ok(self.page_of(&query, page.limit()).await)
    }

    async fn page_of(&self, query: &ArticleQuery, limit: i64) -> Paginated<Article> {
        let sort = query.sort;
        match self.articles.find(query).await {
            Ok(rows) => Paginated::from_window(rows, usize::try_from(limit).unwrap_or(0), |a| {
                Cursor::new(sort.key_of(a), a.id.clone())
            }),
            Err(e) => {
                error!("아티클 목록 조회 실패: {}", e);
                Paginated::empty()
            }
        }
    }

    /// 인기 아티클
    pub async fn popular(&self, limit: usize) -> Vec<Article> {
        let mut window = match self.articles.find(&ArticleQuery::published(POPULAR_WINDOW)).await {
            Ok(rows) => rows,
            Err(e) => {
                error!("인기 아티클 조회 실패: {}", e);
                return Vec::new();
            }
        };

        window.sort_by(|a, b| {
            b.popularity_score()
                .cmp(&a.popularity_score())
                .then_with(|| b.view_count.cmp(&a.view_count))
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        window.truncate(limit);
        window
    }

    /// 제목, 태그, 카테고리 검색. `total` 은 창 안의 전체 일치 개수입니다.
    pub async fn search(&self, term: &str, limit: usize) -> Paginated<Article> {
        let lowered = term.trim().to_lowercase();
        if lowered.is_empty() {
            return Paginated::empty();
        }

        let window = match self.articles.find(&ArticleQuery::published(SEARCH_WINDOW)).await {
            Ok(rows) => rows,
            Err(e) => {
                error!("아티클 검색 실패 ({}): {}", term, e);
                return Paginated::empty();
            }
        };

        let mut matches: Vec<Article> = window.into_iter().filter(|a| a.matches_term(&lowered)).collect();
        let total = matches.len();
        matches.truncate(limit);

        Paginated {
            data: matches,
            has_more: total > limit,
            next_cursor: None,
            total: Some(total as u64),
        }
    }

    /// 게시된 아티클에서 집계한 카테고리 목록
    ///
    /// 집계에 실패하거나 게시된 아티클이 없으면 기본 목록을 반환합니다.
    pub async fn categories(&self) -> Vec<Category> {
        let counts = match self.articles.category_counts().await {
            Ok(counts) => counts,
            Err(e) => {
                warn!("카테고리 집계 실패, 기본 목록 사용: {}", e);
                return Category::fallback();
            }
        };

        if counts.is_empty() {
            return Category::fallback();
        }

        let total = self
            .articles
            .count_by_status(ArticleStatus::Published)
            .await
            .unwrap_or_else(|e| {
                warn!("게시 아티클 수 조회 실패: {}", e);
                0
            });

        Category::from_counts(counts, total)
    }

    /// 홈 화면: 인기 3개, 카테고리, 최신 첫 페이지
    pub async fn home_feed(&self) -> HomeFeedResponse {
        let popular = self.popular(HOME_POPULAR_COUNT).await;
        let categories = self.categories().await;
        let latest = self
            .page_of(
                &ArticleQuery::published(PageRequest::default().limit() + 1),
                PageRequest::default().limit(),
            )
            .await;

        HomeFeedResponse {
            popular: popular.into_iter().map(ArticleResponse::from).collect(),
            categories,
            latest: latest.map(ArticleResponse::from),
        }
    }

    /// 관리자 수정. 전달된 필드만 바꾸고 `updated_at` 을 갱신합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 대상 아티클 없음
    pub async fn update(&self, id: &str, patch: UpdateArticleRequest) -> Result<Article, AppError> {
        patch.validate().map_err(AppError::from_validation)?;

        let changes = ArticleChanges {
            title_kr: patch.title_kr.map(|t| t.trim().to_string()),
            title_en: patch.title_en,
            summary_kr: patch.summary_kr.map(|lines| clean_list(&lines)),
            summary_en: patch.summary_en.map(|lines| clean_list(&lines)),
            content_kr: patch.content_kr,
            content_en: patch.content_en,
            image: patch.image,
            source: patch.source,
            source_url: patch.source_url,
            categories: patch.categories.map(|c| clean_list(&c)),
            tags: patch.tags.map(|t| clean_list(&t)),
            status: patch.status.as_deref().map(parse_status).transpose()?,
            published_at: patch.published_at.as_deref().map(parse_published_at).transpose()?,
            updated_at: Some(Utc::now()),
        };

        let updated = self
            .articles
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        info!("✏️ 아티클 수정: {}", id);
        Ok(updated)
    }

    /// 보관 처리 (소프트 삭제)
    pub async fn soft_delete(&self, id: &str) -> Result<Article, AppError> {
        let changes = ArticleChanges {
            updated_at: Some(Utc::now()),
            ..ArticleChanges::archive()
        };

        let archived = self
            .articles
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        info!("🗄️ 아티클 보관: {}", id);
        Ok(archived)
    }

    pub async fn increment_view(&self, id: &str) -> Result<bool, AppError> {
        self.articles.increment(id, ArticleCounter::Views, 1).await
    }

    /// 좋아요 카운터 ±1
    pub async fn adjust_like_count(&self, id: &str, delta: i64) -> Result<bool, AppError> {
        self.articles.increment(id, ArticleCounter::Likes, delta).await
    }

    pub async fn set_like_count(&self, id: &str, like_count: i64) -> Result<bool, AppError> {
        self.articles.set_like_count(id, like_count).await
    }

    /// 주어진 순서대로 공개 아티클을 조회합니다. 없거나 비공개인 ID는 건너뜁니다.
    pub async fn find_public_many(&self, ids: &[String]) -> Vec<Article> {
        let mut articles = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(article) = self.get_public(id).await {
                articles.push(article);
            }
        }
        articles
    }

    pub async fn status_counts(&self) -> Result<ArticleStatusCounts, AppError> {
        Ok(ArticleStatusCounts {
            published: self.articles.count_by_status(ArticleStatus::Published).await?,
            draft: self.articles.count_by_status(ArticleStatus::Draft).await?,
            archived: self.articles.count_by_status(ArticleStatus::Archived).await?,
        })
    }
}

/// `YYYY-MM-DD` 는 해당 날짜 00:00 UTC 로 해석합니다.
fn parse_published_at(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::ValidationError(format!("게시일 형식이 올바르지 않습니다: {}", raw)))
}

fn parse_status(raw: &str) -> Result<ArticleStatus, AppError> {
    ArticleStatus::from_str(raw)
        .ok_or_else(|| AppError::ValidationError(format!("알 수 없는 게시 상태입니다: {}", raw)))
}

/// 앞뒤 공백 제거 후 빈 항목을 뺀 목록
fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{article, MemoryArticleRepository};

    fn service_with(articles: Vec<Article>) -> (ArticleService, Arc<MemoryArticleRepository>) {
        let repo = Arc::new(MemoryArticleRepository::with(articles));
        (ArticleService::new(repo.clone()), repo)
    }

    fn valid_input() -> CreateArticleRequest {
        CreateArticleRequest {
            title_kr: "K리그 관중 수 역대 최다".to_string(),
            summary_kr: vec!["유료 관중 300만 돌파".to_string(), "  ".to_string()],
            content_kr: "<p>본문</p>".to_string(),
            categories: vec!["스포츠산업".to_string()],
            published_at: Some("2025-11-04".to_string()),
            ..CreateArticleRequest::default()
        }
    }

    #[actix_web::test]
    async fn test_create_applies_defaults() {
        let (service, repo) = service_with(vec![]);

        let created = service.create(valid_input(), "admin").await.unwrap();

        assert_eq!(created.image, DEFAULT_ARTICLE_IMAGE);
        assert_eq!(created.source, DEFAULT_ARTICLE_SOURCE);
        assert_eq!(created.tags, vec!["스포츠산업"]);
        assert_eq!(created.summary_kr, vec!["유료 관중 300만 돌파"]);
        assert_eq!(created.status, ArticleStatus::Published);
        assert_eq!(created.published_at.to_rfc3339(), "2025-11-04T00:00:00+00:00");
        assert_eq!(created.id.len(), 24);
        assert!(repo.get(&created.id).is_some());
    }

    #[actix_web::test]
    async fn test_create_checks_required_fields_in_order() {
        let (service, _) = service_with(vec![]);

        let missing_title = CreateArticleRequest {
            title_kr: " ".to_string(),
            categories: vec![],
            ..valid_input()
        };
        let err = service.create(missing_title, "admin").await.unwrap_err();
        assert_eq!(err.message(), "제목과 본문은 필수입니다.");

        let missing_category = CreateArticleRequest {
            categories: vec!["".to_string()],
            ..valid_input()
        };
        let err = service.create(missing_category, "admin").await.unwrap_err();
        assert_eq!(err.message(), "최소 하나의 카테고리를 선택해주세요.");
    }

    #[actix_web::test]
    async fn test_create_propagates_store_failure() {
        let (service, repo) = service_with(vec![]);
        repo.fail_next_write();

        let result = service.create(valid_input(), "admin").await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_list_filters_category_and_pages_with_cursor() {
        let (service, _) = service_with(vec![
            article("a1", 1, &["마케팅 & 팬덤"]),
            article("a2", 2, &["스포츠산업"]),
            article("a3", 3, &["마케팅 & 팬덤"]),
            article("a4", 4, &["마케팅 & 팬덤", "스포츠산업"]),
        ]);

        let first = service
            .list(&PageRequest::first(2), Some("마케팅 & 팬덤"))
            .await
            .unwrap();
        let ids: Vec<_> = first.data.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a4", "a3"]);
        assert!(first.has_more);

        let second = service
            .list_by_category("마케팅 & 팬덤", &PageRequest::new(Some(2), first.next_cursor.clone()))
            .await
            .unwrap();
        let ids: Vec<_> = second.data.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1"]);
        assert!(!second.has_more);

        let all = service.list(&PageRequest::first(10), Some("전체")).await.unwrap();
        assert_eq!(all.data.len(), 4);
    }

    #[actix_web::test]
    async fn test_public_list_shows_only_published() {
        let mut draft = article("d1", 5, &["기타"]);
        draft.status = ArticleStatus::Draft;
        let mut archived = article("z1", 6, &["기타"]);
        archived.status = ArticleStatus::Archived;
        let (service, _) = service_with(vec![article("a1", 1, &["기타"]), draft, archived]);

        let public = service.list(&PageRequest::first(10), None).await.unwrap();
        let ids: Vec<_> = public.data.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1"]);
    }

    #[actix_web::test]
    async fn test_read_failures_are_swallowed() {
        let (service, repo) = service_with(vec![article("a1", 1, &["기타"])]);
        repo.fail_reads(true);

        assert!(service.get_by_id("a1").await.is_none());
        assert!(service.popular(3).await.is_empty());
        assert!(service.list(&PageRequest::first(5), None).await.unwrap().data.is_empty());
        assert_eq!(service.categories().await, Category::fallback());
    }

    #[actix_web::test]
    async fn test_popular_ranks_by_score_then_views() {
        let mut a = article("a", 1, &["기타"]);
        a.view_count = 10;
        a.like_count = 0;
        let mut b = article("b", 2, &["기타"]);
        b.view_count = 1;
        b.like_count = 3;
        let mut c = article("c", 3, &["기타"]);
        c.view_count = 7;
        c.like_count = 1;
        let (service, _) = service_with(vec![a, b, c]);

        let ids: Vec<_> = service.popular(3).await.into_iter().map(|a| a.id).collect();

        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[actix_web::test]
    async fn test_popular_weighs_likes_three_times() {
        let mut viewed = article("viewed", 1, &["기타"]);
        viewed.view_count = 10;
        viewed.like_count = 1;
        let mut liked = article("liked", 2, &["기타"]);
        liked.view_count = 1;
        liked.like_count = 5;
        let (service, _) = service_with(vec![viewed, liked]);

        let ids: Vec<_> = service.popular(2).await.into_iter().map(|a| a.id).collect();

        // 16 (1 + 5×3) > 13 (10 + 1×3)
        assert_eq!(ids, vec!["liked", "viewed"]);
    }

    #[actix_web::test]
    async fn test_popular_full_tie_prefers_newer_creation() {
        // 게시일은 older 가 더 늦어 창에서는 먼저 나옵니다
        let mut older = article("older", 8, &["기타"]);
        older.view_count = 4;
        older.like_count = 2;
        older.created_at = crate::test_support::at(1);
        let mut newer = article("newer", 2, &["기타"]);
        newer.view_count = 4;
        newer.like_count = 2;
        newer.created_at = crate::test_support::at(5);
        let (service, _) = service_with(vec![older, newer]);

        let ids: Vec<_> = service.popular(2).await.into_iter().map(|a| a.id).collect();

        assert_eq!(ids, vec!["newer", "older"]);
    }

    #[actix_web::test]
    async fn test_search_matches_title_tags_and_categories() {
        let mut tagged = article("t", 1, &["기타"]);
        tagged.tags = vec!["NBA".to_string()];
        let mut titled = article("n", 2, &["기타"]);
        titled.title_kr = "nba 파이널 관중 분석".to_string();
        let (service, _) = service_with(vec![tagged, titled, article("x", 3, &["데이터 & 분석"])]);

        let result = service.search("Nba", 1).await;
        assert_eq!(result.total, Some(2));
        assert!(result.has_more);
        assert_eq!(result.data[0].id, "n");

        let by_category = service.search("데이터", 10).await;
        assert_eq!(by_category.data.len(), 1);

        assert!(service.search("   ", 10).await.data.is_empty());
    }

    #[actix_web::test]
    async fn test_search_is_bounded_by_window() {
        let mut articles: Vec<Article> = (0..SEARCH_WINDOW)
            .map(|i| article(&format!("recent-{:03}", i), 100 + i, &["기타"]))
            .collect();
        let mut old = article("old", 0, &["기타"]);
        old.title_kr = "아주 오래된 특집".to_string();
        articles.push(old);
        let (service, _) = service_with(articles);

        assert!(service.search("특집", 10).await.data.is_empty());
    }

    #[actix_web::test]
    async fn test_categories_are_derived_from_published_articles() {
        let mut archived = article("z", 9, &["아카이브"]);
        archived.status = ArticleStatus::Archived;
        let (service, _) = service_with(vec![
            article("a", 1, &["데이터 & 분석"]),
            article("b", 2, &["스포츠산업", "데이터 & 분석"]),
            archived,
        ]);

        let categories = service.categories().await;
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["전체", "스포츠산업", "데이터 & 분석"]);
        assert_eq!(categories[0].article_count, 2);
        assert_eq!(categories[2].article_count, 2);
    }

    #[actix_web::test]
    async fn test_update_and_soft_delete() {
        let (service, repo) = service_with(vec![article("a1", 1, &["기타"])]);

        let patch = UpdateArticleRequest {
            title_kr: Some("새 제목".to_string()),
            ..UpdateArticleRequest::default()
        };
        let updated = service.update("a1", patch).await.unwrap();
        assert_eq!(updated.title_kr, "새 제목");
        assert!(updated.updated_at > updated.created_at);

        service.soft_delete("a1").await.unwrap();
        assert_eq!(repo.get("a1").unwrap().status, ArticleStatus::Archived);
        assert!(service.get_public("a1").await.is_none());

        let missing = service.update("nope", UpdateArticleRequest::default()).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_admin_list_excludes_archived_and_orders_by_creation() {
        let mut draft = article("d", 1, &["기타"]);
        draft.status = ArticleStatus::Draft;
        draft.created_at = crate::test_support::at(10);
        let mut archived = article("z", 2, &["기타"]);
        archived.status = ArticleStatus::Archived;
        let (service, _) = service_with(vec![article("p", 5, &["기타"]), draft, archived]);

        let page = service.admin_list(&PageRequest::first(10), None).await.unwrap();
        let ids: Vec<_> = page.data.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "p"]);

        let archived = service
            .admin_list(&PageRequest::first(10), Some("archived"))
            .await
            .unwrap();
        assert_eq!(archived.data.len(), 1);
        assert_eq!(archived.data[0].id, "z");

        let everything = service.admin_list(&PageRequest::first(10), Some("all")).await.unwrap();
        assert_eq!(everything.data.len(), 3);

        assert!(service.admin_list(&PageRequest::first(10), Some("hidden")).await.is_err());
    }
}
