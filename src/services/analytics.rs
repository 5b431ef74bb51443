//! 사용 분석 이벤트
//!
//! 서비스는 [`EventReporter`] 트레이트에만 의존합니다.
//! 운영 환경은 `analytics` 로그 타깃으로 한 줄씩 남기고,
//! 테스트는 기록용 구현을 주입해 어떤 이벤트가 발생했는지 검증합니다.

use log::info;
use serde_json::{Map, Value};

/// 이벤트 이름
pub mod events {
    pub const LOGIN: &str = "login";
    pub const SIGN_UP: &str = "sign_up";
    pub const LOGIN_FAILED: &str = "login_failed";
    pub const ARTICLE_LIKE: &str = "article_like";
    pub const ARTICLE_UNLIKE: &str = "article_unlike";
    pub const ARTICLE_VIEW: &str = "article_view";
    pub const ONBOARDING_COMPLETED: &str = "onboarding_completed";
    pub const JOBS_VIEWED: &str = "jobs_viewed";
    pub const JOB_SAVED: &str = "job_saved";
    pub const ADMIN_LOGIN: &str = "admin_login";
}

pub trait EventReporter: Send + Sync {
    fn record_event(&self, name: &str, attrs: &[(&str, String)]);
}

/// 구조화된 `info!` 로그로 이벤트를 남깁니다.
pub struct LogEventReporter;

impl EventReporter for LogEventReporter {
    fn record_event(&self, name: &str, attrs: &[(&str, String)]) {
        let payload: Map<String, Value> = attrs
            .iter()
            .map(|(key, value)| (key.to_string(), Value::String(value.clone())))
            .collect();

        info!(target: "analytics", "📊 {} {}", name, Value::Object(payload));
    }
}

pub struct NoopEventReporter;

impl EventReporter for NoopEventReporter {
    fn record_event(&self, _name: &str, _attrs: &[(&str, String)]) {}
}
