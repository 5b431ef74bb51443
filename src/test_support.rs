//! 테스트 지원 모듈
//!
//! 모든 저장소 트레이트의 메모리 구현과 고정 응답 카카오 클라이언트,
//! 이벤트 기록기, 픽스처를 제공합니다. MongoDB, Redis, 네트워크 없이
//! 서비스와 HTTP 핸들러를 테스트할 수 있습니다.
//!
//! 메모리 저장소는 `fail_next_write()` 로 다음 쓰기 한 번을 실패시키고,
//! `fail_reads(true)` 로 읽기를 계속 실패시킬 수 있습니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::caching::client_state::ClientStateStore;
use crate::config::{AuthProvider, KakaoSettings};
use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::entities::articles::article::{Article, ArticleChanges, ArticleStatus};
use crate::domain::entities::likes::user_like::UserLike;
use crate::domain::entities::users::user::{User, UserChanges};
use crate::domain::models::auth::LoginProfile;
use crate::domain::models::oauth::kakao::{KakaoTokenResponse, KakaoUserIdsResponse};
use crate::repositories::articles::{ArticleCounter, ArticleQuery, ArticleRepository};
use crate::repositories::likes::LikeRepository;
use crate::repositories::users::UserRepository;
use crate::services::analytics::EventReporter;
use crate::services::auth::kakao_api::KakaoApi;

pub const TEST_JWT_SECRET: &str = "test-secret";
pub const TEST_ADMIN_PIN: &str = "010905";

fn store_down() -> AppError {
    AppError::DatabaseError("서비스가 일시적으로 사용할 수 없습니다.".to_string())
}

/// 쓰기/읽기 실패 주입 스위치
#[derive(Default)]
pub struct FailureSwitch {
    next_write: AtomicBool,
    reads: AtomicBool,
}

impl FailureSwitch {
    fn check_write(&self) -> Result<(), AppError> {
        if self.next_write.swap(false, Ordering::SeqCst) {
            return Err(store_down());
        }
        Ok(())
    }

    fn check_read(&self) -> Result<(), AppError> {
        if self.reads.load(Ordering::SeqCst) {
            return Err(store_down());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// 아티클
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryArticleRepository {
    articles: Mutex<Vec<Article>>,
    failures: FailureSwitch,
}

impl MemoryArticleRepository {
    pub fn with(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
            failures: FailureSwitch::default(),
        }
    }

    pub fn fail_next_write(&self) {
        self.failures.next_write.store(true, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.failures.reads.store(fail, Ordering::SeqCst);
    }

    pub fn get(&self, id: &str) -> Option<Article> {
        self.articles.lock().unwrap().iter().find(|a| a.id == id).cloned()
    }
}

#[async_trait]
impl ArticleRepository for MemoryArticleRepository {
    async fn insert(&self, article: &Article) -> Result<(), AppError> {
        self.failures.check_write()?;
        self.articles.lock().unwrap().push(article.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>, AppError> {
        self.failures.check_read()?;
        Ok(self.get(id))
    }

    async fn find(&self, query: &ArticleQuery) -> Result<Vec<Article>, AppError> {
        self.failures.check_read()?;
        let mut rows: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| query.matches(a))
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            query
                .sort
                .key_of(b)
                .cmp(&query.sort.key_of(a))
                .then_with(|| b.id.cmp(&a.id))
        });
        rows.truncate(usize::try_from(query.limit).unwrap_or(0));
        Ok(rows)
    }

    async fn update(&self, id: &str, changes: &ArticleChanges) -> Result<Option<Article>, AppError> {
        self.failures.check_write()?;
        let mut articles = self.articles.lock().unwrap();
        Ok(articles.iter_mut().find(|a| a.id == id).map(|article| {
            changes.apply_to(article);
            article.clone()
        }))
    }

    async fn increment(&self, id: &str, counter: ArticleCounter, delta: i64) -> Result<bool, AppError> {
        self.failures.check_write()?;
        let mut articles = self.articles.lock().unwrap();
        Ok(match articles.iter_mut().find(|a| a.id == id) {
            Some(article) => {
                match counter {
                    ArticleCounter::Views => article.view_count += delta,
                    ArticleCounter::Likes => article.like_count += delta,
                }
                true
            }
            None => false,
        })
    }

    async fn set_like_count(&self, id: &str, like_count: i64) -> Result<bool, AppError> {
        self.failures.check_write()?;
        let mut articles = self.articles.lock().unwrap();
        Ok(match articles.iter_mut().find(|a| a.id == id) {
            Some(article) => {
                article.like_count = like_count;
                true
            }
            None => false,
        })
    }

    async fn category_counts(&self) -> Result<Vec<(String, u64)>, AppError> {
        self.failures.check_read()?;
        let mut counts: HashMap<String, u64> = HashMap::new();
        for article in self.articles.lock().unwrap().iter().filter(|a| a.is_public()) {
            for category in &article.categories {
                *counts.entry(category.clone()).or_default() += 1;
            }
        }
        Ok(counts.into_iter().collect())
    }

    async fn count_by_status(&self, status: ArticleStatus) -> Result<u64, AppError> {
        self.failures.check_read()?;
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.status == status)
            .count() as u64)
    }
}

// ---------------------------------------------------------------------------
// 사용자
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
    failures: FailureSwitch,
}

impl MemoryUserRepository {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().map(|u| (u.id.clone(), u)).collect()),
            failures: FailureSwitch::default(),
        }
    }

    pub fn fail_next_write(&self) {
        self.failures.next_write.store(true, Ordering::SeqCst);
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.users.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.failures.check_read()?;
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.failures.check_read()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, AppError> {
        self.failures.check_read()?;
        let users = self.users.lock().unwrap();
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn insert(&self, user: &User) -> Result<bool, AppError> {
        self.failures.check_write()?;
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.id) {
            return Ok(false);
        }
        users.insert(user.id.clone(), user.clone());
        Ok(true)
    }

    async fn update(&self, id: &str, changes: &UserChanges) -> Result<Option<User>, AppError> {
        self.failures.check_write()?;
        let mut users = self.users.lock().unwrap();
        Ok(users.get_mut(id).map(|user| {
            changes.apply_to(user);
            user.clone()
        }))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<User>, AppError> {
        self.failures.check_read()?;
        let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        users.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(users)
    }

    async fn count(&self) -> Result<u64, AppError> {
        self.failures.check_read()?;
        Ok(self.users.lock().unwrap().len() as u64)
    }
}

// ---------------------------------------------------------------------------
// 좋아요
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryLikeRepository {
    likes: Mutex<HashMap<String, UserLike>>,
    failures: FailureSwitch,
}

impl MemoryLikeRepository {
    pub fn fail_next_write(&self) {
        self.failures.next_write.store(true, Ordering::SeqCst);
    }

    pub fn record(&self, user_id: &str, article_id: &str) -> Option<UserLike> {
        self.likes
            .lock()
            .unwrap()
            .get(&UserLike::record_id(user_id, article_id))
            .cloned()
    }

    pub fn put(&self, like: UserLike) {
        self.likes.lock().unwrap().insert(like.id.clone(), like);
    }

    fn sorted(&self, keep: impl Fn(&UserLike) -> bool, limit: i64) -> Vec<UserLike> {
        let mut rows: Vec<UserLike> = self.likes.lock().unwrap().values().filter(|l| keep(l)).cloned().collect();
        rows.sort_by(|a, b| b.last_changed_at().cmp(&a.last_changed_at()));
        rows.truncate(usize::try_from(limit).unwrap_or(0));
        rows
    }
}

#[async_trait]
impl LikeRepository for MemoryLikeRepository {
    async fn find(&self, user_id: &str, article_id: &str) -> Result<Option<UserLike>, AppError> {
        self.failures.check_read()?;
        Ok(self.record(user_id, article_id))
    }

    async fn toggle(
        &self,
        user_id: &str,
        article_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UserLike>, AppError> {
        self.failures.check_write()?;
        let mut likes = self.likes.lock().unwrap();
        let id = UserLike::record_id(user_id, article_id);

        let previous = likes.get(&id).cloned();
        let next = match &previous {
            Some(record) => UserLike {
                is_active: !record.is_active,
                updated_at: Some(now),
                ..record.clone()
            },
            None => UserLike::new(user_id, article_id, now),
        };
        likes.insert(id, next);
        Ok(previous)
    }

    async fn restore(
        &self,
        user_id: &str,
        article_id: &str,
        previous: Option<&UserLike>,
    ) -> Result<(), AppError> {
        self.failures.check_write()?;
        let mut likes = self.likes.lock().unwrap();
        let id = UserLike::record_id(user_id, article_id);
        match previous {
            Some(record) => {
                likes.insert(id, record.clone());
            }
            None => {
                likes.remove(&id);
            }
        }
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: &str,
        active_only: bool,
        limit: i64,
    ) -> Result<Vec<UserLike>, AppError> {
        self.failures.check_read()?;
        Ok(self.sorted(|l| l.user_id == user_id && (!active_only || l.is_active), limit))
    }

    async fn find_by_article(&self, article_id: &str, limit: i64) -> Result<Vec<UserLike>, AppError> {
        self.failures.check_read()?;
        Ok(self.sorted(|l| l.article_id == article_id && l.is_active, limit))
    }

    async fn count_active_by_article(&self, article_id: &str) -> Result<u64, AppError> {
        self.failures.check_read()?;
        Ok(self
            .likes
            .lock()
            .unwrap()
            .values()
            .filter(|l| l.article_id == article_id && l.is_active)
            .count() as u64)
    }

    async fn count_active_by_user(&self, user_id: &str) -> Result<u64, AppError> {
        self.failures.check_read()?;
        Ok(self
            .likes
            .lock()
            .unwrap()
            .values()
            .filter(|l| l.user_id == user_id && l.is_active)
            .count() as u64)
    }

    async fn delete_by_user(&self, user_id: &str) -> Result<u64, AppError> {
        self.failures.check_write()?;
        let mut likes = self.likes.lock().unwrap();
        let before = likes.len();
        likes.retain(|_, l| l.user_id != user_id);
        Ok((before - likes.len()) as u64)
    }

    async fn delete_inactive(&self) -> Result<u64, AppError> {
        self.failures.check_write()?;
        let mut likes = self.likes.lock().unwrap();
        let before = likes.len();
        likes.retain(|_, l| l.is_active);
        Ok((before - likes.len()) as u64)
    }
}

// ---------------------------------------------------------------------------
// 클라이언트 상태
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryClientStateStore {
    values: Mutex<HashMap<(String, String), Value>>,
}

impl MemoryClientStateStore {
    pub fn peek(&self, client_id: &str, key: &str) -> Option<Value> {
        self.values
            .lock()
            .unwrap()
            .get(&(client_id.to_string(), key.to_string()))
            .cloned()
    }
}

#[async_trait]
impl ClientStateStore for MemoryClientStateStore {
    async fn get_value(&self, client_id: &str, key: &str) -> Result<Option<Value>, AppError> {
        Ok(self.peek(client_id, key))
    }

    async fn set_value(&self, client_id: &str, key: &str, value: Value) -> Result<(), AppError> {
        self.values
            .lock()
            .unwrap()
            .insert((client_id.to_string(), key.to_string()), value);
        Ok(())
    }

    async fn take_value(&self, client_id: &str, key: &str) -> Result<Option<Value>, AppError> {
        Ok(self
            .values
            .lock()
            .unwrap()
            .remove(&(client_id.to_string(), key.to_string())))
    }

    async fn set_if_absent(
        &self,
        client_id: &str,
        key: &str,
        value: Value,
        _ttl_seconds: u64,
    ) -> Result<bool, AppError> {
        let mut values = self.values.lock().unwrap();
        let slot = (client_id.to_string(), key.to_string());
        if values.contains_key(&slot) {
            return Ok(false);
        }
        values.insert(slot, value);
        Ok(true)
    }

    async fn remove(&self, client_id: &str, key: &str) -> Result<(), AppError> {
        self.values
            .lock()
            .unwrap()
            .remove(&(client_id.to_string(), key.to_string()));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// 카카오, 이벤트
// ---------------------------------------------------------------------------

pub struct FakeKakaoApi {
    pub profile: Mutex<LoginProfile>,
    pub user_ids: Vec<i64>,
    pub fail_exchange: AtomicBool,
    pub exchange_calls: AtomicUsize,
}

impl FakeKakaoApi {
    pub fn new(profile: LoginProfile) -> Self {
        Self {
            profile: Mutex::new(profile),
            user_ids: Vec::new(),
            fail_exchange: AtomicBool::new(false),
            exchange_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_user_ids(mut self, ids: Vec<i64>) -> Self {
        self.user_ids = ids;
        self
    }

    pub fn calls(&self) -> usize {
        self.exchange_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KakaoApi for FakeKakaoApi {
    async fn exchange_code(&self, code: &str) -> Result<KakaoTokenResponse, AppError> {
        self.exchange_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_exchange.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError(
                "카카오 인증에 실패했습니다. 다시 로그인해주세요.".to_string(),
            ));
        }
        Ok(KakaoTokenResponse {
            access_token: format!("kakao-token-{}", code),
            token_type: Some("bearer".to_string()),
            refresh_token: None,
            expires_in: Some(21599),
            scope: None,
        })
    }

    async fn fetch_profile(&self, _access_token: &str) -> Result<LoginProfile, AppError> {
        Ok(self.profile.lock().unwrap().clone())
    }

    async fn list_user_ids(&self) -> Result<KakaoUserIdsResponse, AppError> {
        Ok(KakaoUserIdsResponse {
            elements: self.user_ids.clone(),
            total_count: Some(self.user_ids.len() as u64),
            after_id: None,
            before_id: None,
        })
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl RecordingReporter {
    pub fn names(&self) -> Vec<String> {
        self.events.lock().unwrap().iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn attrs_of(&self, name: &str) -> Option<Vec<(String, String)>> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|(event, _)| event == name)
            .map(|(_, attrs)| attrs.clone())
    }
}

impl EventReporter for RecordingReporter {
    fn record_event(&self, name: &str, attrs: &[(&str, String)]) {
        self.events.lock().unwrap().push((
            name.to_string(),
            attrs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        ));
    }
}

// ---------------------------------------------------------------------------
// 픽스처
// ---------------------------------------------------------------------------

/// 2025-11-01 00:00 UTC 에서 `hours` 시간 뒤
pub fn at(hours: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap() + Duration::hours(hours)
}

pub fn article(id: &str, published_hours: i64, categories: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title_kr: format!("아티클 {}", id),
        title_en: None,
        summary_kr: vec!["요약".to_string()],
        summary_en: None,
        content_kr: "본문".to_string(),
        content_en: None,
        image: "https://picsum.photos/seed/test/1200/630".to_string(),
        source: "스포츠엑스".to_string(),
        source_url: String::new(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        tags: Vec::new(),
        published_at: at(published_hours),
        created_at: at(published_hours),
        updated_at: at(published_hours),
        created_by: "admin".to_string(),
        status: ArticleStatus::Published,
        view_count: 0,
        like_count: 0,
    }
}

pub fn kakao_profile(id: &str) -> LoginProfile {
    LoginProfile {
        id: id.to_string(),
        nickname: Some("스포츠팬".to_string()),
        email: Some(format!("{}@kakao.test", id)),
        profile_image: None,
        provider: AuthProvider::Kakao,
    }
}

pub fn user(id: &str) -> User {
    User::from_login(&kakao_profile(id), at(0))
}

pub fn kakao_settings() -> KakaoSettings {
    KakaoSettings {
        client_id: Some("test-client".to_string()),
        client_secret: None,
        redirect_uri: Some("http://localhost:3000/auth/kakao/callback".to_string()),
        admin_key: Some("test-admin-key".to_string()),
        auth_uri: "https://kauth.kakao.com/oauth/authorize".to_string(),
        token_uri: "https://kauth.kakao.com/oauth/token".to_string(),
        user_info_uri: "https://kapi.kakao.com/v2/user/me".to_string(),
        user_ids_uri: "https://kapi.kakao.com/v1/user/ids".to_string(),
        scope: "profile_nickname,account_email".to_string(),
    }
}

/// 모든 의존성을 메모리 구현으로 채운 테스트 컨텍스트
pub struct TestContext {
    pub articles: Arc<MemoryArticleRepository>,
    pub users: Arc<MemoryUserRepository>,
    pub likes: Arc<MemoryLikeRepository>,
    pub client_state: Arc<MemoryClientStateStore>,
    pub kakao: Arc<FakeKakaoApi>,
    pub events: Arc<RecordingReporter>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            articles: Arc::new(MemoryArticleRepository::default()),
            users: Arc::new(MemoryUserRepository::default()),
            likes: Arc::new(MemoryLikeRepository::default()),
            client_state: Arc::new(MemoryClientStateStore::default()),
            kakao: Arc::new(FakeKakaoApi::new(kakao_profile("4012345678"))),
            events: Arc::new(RecordingReporter::default()),
        }
    }

    pub fn with_articles(mut self, articles: Vec<Article>) -> Self {
        self.articles = Arc::new(MemoryArticleRepository::with(articles));
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = Arc::new(MemoryUserRepository::with(users));
        self
    }

    pub fn with_kakao(mut self, kakao: FakeKakaoApi) -> Self {
        self.kakao = Arc::new(kakao);
        self
    }

    pub fn state(&self) -> AppState {
        AppState::assemble(crate::core::state::Infrastructure {
            articles: self.articles.clone(),
            users: self.users.clone(),
            likes: self.likes.clone(),
            client_state: self.client_state.clone(),
            kakao_api: self.kakao.clone(),
            events: self.events.clone(),
            kakao_settings: kakao_settings(),
            jwt_secret: TEST_JWT_SECRET.to_string(),
            jwt_expiration_hours: 24,
            admin_pin: TEST_ADMIN_PIN.to_string(),
            admin_session_hours: 8,
        })
    }
}
