//! 클라이언트 식별자
//!
//! 브라우저 로컬 상태(익명 좋아요 목록, 저장 대기 표시 등)를 서버에 보관하기 위한
//! 불투명한 키입니다. 브라우저는 응답 헤더로 받은 값을 이후 요청에 그대로 보냅니다.
//!
//! 조회 순서: `X-Client-Id` 헤더 → `sx_client` 쿠키 → 새 UUID v4

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpRequest};

pub const CLIENT_ID_HEADER: &str = "X-Client-Id";
pub const CLIENT_ID_COOKIE: &str = "sx_client";

const MAX_CLIENT_ID_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId {
    value: String,
    /// 요청에 없어서 새로 발급했는지
    issued: bool,
}

impl ClientId {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            issued: false,
        }
    }

    pub fn generate() -> Self {
        Self {
            value: uuid::Uuid::new_v4().to_string(),
            issued: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_issued(&self) -> bool {
        self.issued
    }

    fn accept(raw: &str) -> Option<String> {
        let value = raw.trim();
        let valid = !value.is_empty()
            && value.len() <= MAX_CLIENT_ID_LEN
            && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| value.to_string())
    }

    pub fn from_http_request(req: &HttpRequest) -> Self {
        let from_header = req
            .headers()
            .get(CLIENT_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(Self::accept);

        let from_cookie = || {
            req.cookie(CLIENT_ID_COOKIE)
                .and_then(|cookie| Self::accept(cookie.value()))
        };

        match from_header.or_else(from_cookie) {
            Some(value) => Self::new(value),
            None => Self::generate(),
        }
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromRequest for ClientId {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(Self::from_http_request(req)))
    }
}
