//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, Redis, 서버, 실행 환경 관련 설정을 관리합니다.

use std::env;

/// 실행 환경 (`ENVIRONMENT`, 없으면 `NODE_ENV`). 알 수 없는 값은 운영으로 취급합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());
        Self::from_str(&raw)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(4)
    }
}

/// MongoDB 연결 설정
///
/// ```bash
/// export MONGODB_URI="mongodb://localhost:27017"
/// export DATABASE_NAME="sportsx_dev"
/// ```
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "sportsx_dev".to_string())
    }
}

/// Redis 연결 및 클라이언트 상태 보존 설정
pub struct RedisConfig;

impl RedisConfig {
    pub fn url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 클라이언트 상태(익명 좋아요 목록 등) 보존 기간 (초). 기본값: 30일
    pub fn client_state_ttl_seconds() -> u64 {
        env::var("CLIENT_STATE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60 * 60 * 24 * 30)
    }
}

/// 요청 속도 제한 (actix-governor)
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            per_second: parsed_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parsed_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// 허용 CORS origin
///
/// `CORS_ALLOWED_ORIGINS` 에 콤마로 구분해 지정합니다.
/// 지정하지 않으면 운영 환경이 아닐 때만 로컬 프론트엔드 주소를 허용합니다.
pub struct CorsConfig;

impl CorsConfig {
    const LOCAL_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => split_origins(&raw),
            Err(_) if Environment::current().is_production() => {
                log::warn!("CORS_ALLOWED_ORIGINS not set in production, cross-origin requests are blocked");
                Vec::new()
            }
            Err(_) => Self::LOCAL_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// 파싱 실패 시 로그를 남기고 기본값을 씁니다
fn parsed_or<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
        Err(_) => default,
    }
}
