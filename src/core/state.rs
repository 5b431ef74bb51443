//! # 서비스 조립 루트
//!
//! 모든 서비스를 한곳에서 생성해 `web::Data<AppState>` 로 공유합니다.
//! 전역 서비스 로케이터 없이 생성자 주입만 사용합니다.
//!
//! ```text
//! Infrastructure (저장소, 클라이언트 상태, 카카오 API, 이벤트, 설정 값)
//!        │
//!        ▼
//! AppState::assemble()
//!        │
//!        ├─ ArticleService ◀── UserService
//!        ├─ LikeService ──▶ ArticleService
//!        ├─ JobService
//!        ├─ KakaoAuthService ──▶ UserService, TokenService, LikeService, JobService
//!        ├─ AdminAuthService ──▶ TokenService
//!        └─ AdminService ──▶ UserService, ArticleService
//! ```
//!
//! 운영 환경은 [`AppState::from_env`] 가 MongoDB, Redis 구현을 채우고,
//! 테스트는 메모리 구현으로 [`Infrastructure`] 를 채웁니다.

use std::sync::Arc;

use log::info;

use crate::caching::client_state::{ClientStateStore, RedisClientStateStore};
use crate::caching::redis::RedisClient;
use crate::config::{AdminConfig, JwtConfig, KakaoSettings, RedisConfig};
use crate::core::errors::AppError;
use crate::db::Database;
use crate::repositories::articles::{ArticleRepository, MongoArticleRepository};
use crate::repositories::likes::{LikeRepository, MongoLikeRepository};
use crate::repositories::users::{MongoUserRepository, UserRepository};
use crate::services::admin::AdminService;
use crate::services::analytics::{EventReporter, LogEventReporter};
use crate::services::articles::ArticleService;
use crate::services::auth::{AdminAuthService, KakaoApi, KakaoAuthService, ReqwestKakaoApi, TokenService};
use crate::services::jobs::JobService;
use crate::services::likes::LikeService;
use crate::services::users::UserService;

/// 서비스 조립에 필요한 외부 자원과 설정 값
pub struct Infrastructure {
    pub articles: Arc<dyn ArticleRepository>,
    pub users: Arc<dyn UserRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub client_state: Arc<dyn ClientStateStore>,
    pub kakao_api: Arc<dyn KakaoApi>,
    pub events: Arc<dyn EventReporter>,
    pub kakao_settings: KakaoSettings,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub admin_pin: String,
    pub admin_session_hours: i64,
}

#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<ArticleService>,
    pub likes: Arc<LikeService>,
    pub users: Arc<UserService>,
    pub tokens: Arc<TokenService>,
    pub kakao_auth: Arc<KakaoAuthService>,
    pub admin_auth: Arc<AdminAuthService>,
    pub admin: Arc<AdminService>,
    pub jobs: Arc<JobService>,
    pub client_state: Arc<dyn ClientStateStore>,
    pub events: Arc<dyn EventReporter>,
}

impl AppState {
    pub fn assemble(infra: Infrastructure) -> Self {
        let Infrastructure {
            articles,
            users,
            likes,
            client_state,
            kakao_api,
            events,
            kakao_settings,
            jwt_secret,
            jwt_expiration_hours,
            admin_pin,
            admin_session_hours,
        } = infra;

        let tokens = Arc::new(TokenService::new(jwt_secret, jwt_expiration_hours));
        let article_service = Arc::new(ArticleService::new(articles));
        let user_service = Arc::new(UserService::new(users));
        let like_service = Arc::new(LikeService::new(
            likes,
            article_service.clone(),
            client_state.clone(),
            events.clone(),
        ));
        let job_service = Arc::new(JobService::new(client_state.clone(), events.clone()));

        let kakao_auth = Arc::new(KakaoAuthService::new(
            kakao_api.clone(),
            user_service.clone(),
            tokens.clone(),
            like_service.clone(),
            job_service.clone(),
            client_state.clone(),
            events.clone(),
            kakao_settings,
        ));
        let admin_auth = Arc::new(AdminAuthService::new(
            &admin_pin,
            admin_session_hours,
            tokens.clone(),
            events.clone(),
        ));
        let admin = Arc::new(AdminService::new(
            kakao_api,
            user_service.clone(),
            article_service.clone(),
        ));

        Self {
            articles: article_service,
            likes: like_service,
            users: user_service,
            tokens,
            kakao_auth,
            admin_auth,
            admin,
            jobs: job_service,
            client_state,
            events,
        }
    }

    /// MongoDB, Redis 에 연결하고 환경변수 설정으로 서비스를 조립합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - MongoDB 연결 또는 인덱스 생성 실패
    /// * `AppError::RedisError` - Redis 연결 실패
    pub async fn from_env() -> Result<Self, AppError> {
        info!("📡 데이터베이스 연결 중...");
        let database = Database::connect().await?;
        database.create_indexes().await?;

        let redis = RedisClient::new().await?;
        let kakao_settings = KakaoSettings::from_env();

        let state = Self::assemble(Infrastructure {
            articles: Arc::new(MongoArticleRepository::new(&database)),
            users: Arc::new(MongoUserRepository::new(&database)),
            likes: Arc::new(MongoLikeRepository::new(&database)),
            client_state: Arc::new(RedisClientStateStore::new(
                redis,
                RedisConfig::client_state_ttl_seconds(),
            )),
            kakao_api: Arc::new(ReqwestKakaoApi::new(kakao_settings.clone())),
            events: Arc::new(LogEventReporter),
            kakao_settings,
            jwt_secret: JwtConfig::secret(),
            jwt_expiration_hours: JwtConfig::expiration_hours(),
            admin_pin: AdminConfig::pin(),
            admin_session_hours: AdminConfig::session_hours(),
        });

        info!("✅ 모든 서비스가 초기화되었습니다");
        Ok(state)
    }
}
