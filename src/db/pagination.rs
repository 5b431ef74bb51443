//! 커서 기반 페이지네이션
//!
//! 목록 API는 `limit + 1` 개를 조회해 다음 페이지 존재 여부를 판단하고,
//! 마지막 항목의 (정렬 시각, ID) 를 불투명한 커서 문자열로 돌려줍니다.
//!
//! ```text
//! GET /api/v1/articles?limit=20
//!   → { data: [...20개], has_more: true, next_cursor: "MTc2MjIyMzQwMDAwMDo2NzJm..." }
//! GET /api/v1/articles?limit=20&cursor=MTc2MjIyMzQwMDAwMDo2NzJm...
//! ```

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 50;

/// 정렬 키 위치 (정렬 시각 밀리초 + 문서 ID)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub millis: i64,
    pub id: String,
}

impl Cursor {
    pub fn new(at: DateTime<Utc>, id: impl Into<String>) -> Self {
        Self {
            millis: at.timestamp_millis(),
            id: id.into(),
        }
    }

    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(format!("{}:{}", self.millis, self.id))
    }

    /// # Errors
    ///
    /// * `AppError::ValidationError` - 디코딩할 수 없는 커서
    pub fn decode(token: &str) -> Result<Self, AppError> {
        let invalid = || AppError::ValidationError("유효하지 않은 페이지 커서입니다.".to_string());

        let bytes = URL_SAFE_NO_PAD.decode(token.trim()).map_err(|_| invalid())?;
        let text = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (millis, id) = text.split_once(':').ok_or_else(invalid)?;

        if id.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            millis: millis.parse().map_err(|_| invalid())?,
            id: id.to_string(),
        })
    }

    /// 내림차순 정렬에서 이 커서보다 뒤에 오는 항목인지
    pub fn precedes(&self, at: DateTime<Utc>, id: &str) -> bool {
        let millis = at.timestamp_millis();
        millis < self.millis || (millis == self.millis && id < self.id.as_str())
    }
}

/// 목록 조회 요청 (`?limit=&cursor=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRequest {
    pub limit: Option<i64>,
    pub cursor: Option<String>,
}

impl PageRequest {
    pub fn new(limit: Option<i64>, cursor: Option<String>) -> Self {
        Self { limit, cursor }
    }

    pub fn first(limit: i64) -> Self {
        Self::new(Some(limit), None)
    }

    /// 1 ~ `MAX_PAGE_SIZE` 범위로 보정된 페이지 크기
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    pub fn cursor(&self) -> Result<Option<Cursor>, AppError> {
        match self.cursor.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(token) => Cursor::decode(token).map(Some),
        }
    }
}

/// 페이지 응답
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> Paginated<T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            has_more: false,
            next_cursor: None,
            total: None,
        }
    }

    /// `limit + 1` 개까지 조회한 결과로 페이지를 구성합니다.
    pub fn from_window<F>(mut rows: Vec<T>, limit: usize, cursor_of: F) -> Self
    where
        F: Fn(&T) -> Cursor,
    {
        let has_more = rows.len() > limit;
        rows.truncate(limit);

        let next_cursor = if has_more {
            rows.last().map(|row| cursor_of(row).encode())
        } else {
            None
        };

        Self {
            data: rows,
            has_more,
            next_cursor,
            total: None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            has_more: self.has_more,
            next_cursor: self.next_cursor,
            total: self.total,
        }
    }
}
