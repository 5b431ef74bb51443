//! 스포츠엑스 백엔드 실행 파일
//!
//! 프로필별 `.env` 로드, 로깅 초기화, `AppState` 조립 후 HTTP 서버를 띄웁니다.

use std::io;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};
use sportsx_backend::config::{CorsConfig, RateLimitConfig, ServerConfig};
use sportsx_backend::core::AppState;
use sportsx_backend::domain::models::client::CLIENT_ID_HEADER;
use sportsx_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let env_loaded = load_env_file(&profile);
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));

    info!("🚀 스포츠엑스 백엔드 시작중... (profile: {})", profile);
    match env_loaded {
        Ok(path) => info!("📄 {} 로드 됨", path),
        Err(e) => warn!("환경 파일 로드 실패, 프로세스 환경변수만 사용합니다: {}", e),
    }

    let state = AppState::from_env().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ MongoDB, Redis, 카카오 클라이언트 준비 완료");

    serve(web::Data::new(state)).await
}

/// `PROFILE=prod` → `.env.prod`, `PROFILE=dev` → `.env.dev`, 그 외 → `.env`
///
/// 로거보다 먼저 호출되므로 결과만 돌려주고 로그는 호출자가 남깁니다.
fn load_env_file(profile: &str) -> Result<String, dotenv::Error> {
    let file = match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };
    dotenv::from_filename(file).map(|_| file.to_string())
}

/// 미들웨어는 바깥쪽부터 Rate Limiting, CORS, 요청 로그, 경로 정규화 순입니다.
async fn serve(state: web::Data<AppState>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let rate_limit = RateLimitConfig::from_env();
    let origins = CorsConfig::allowed_origins();

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );
    info!("🌍 CORS 허용 origin: {:?}", origins);
    info!("🌐 http://{} (health: /health, api: /api/v1)", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(cors(&origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 익명 상태 키 헤더(`X-Client-Id`)는 요청에서 받고 응답에서 노출합니다.
fn cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .allowed_header(CLIENT_ID_HEADER)
        .expose_headers(vec![CLIENT_ID_HEADER])
        .supports_credentials()
        .max_age(3600)
}
