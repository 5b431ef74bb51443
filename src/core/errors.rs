//! # Application Error Handling System
//!
//! 스포츠엑스 백엔드의 통합 에러 처리 시스템입니다.
//! Spring Framework의 `@ExceptionHandler`와 같은 역할을
//! `thiserror` + `actix_web::ResponseError` 조합으로 구현합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 중복 처리, 이미 사용된 인증 코드 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰/관리자 PIN 인증 실패 |
//! | `AuthorizationError` | 403 Forbidden | 권한 부족, 비활성 계정 |
//! | `DatabaseError` | 500 Internal Server Error | 문서 저장소 오류 |
//! | `RedisError` | 500 Internal Server Error | 클라이언트 상태 저장소 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | 카카오 API 오류 |
//! | `InternalError` | 500 Internal Server Error | 설정 누락 등 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "validation_error", "message": "제목과 본문은 필수입니다." }
//! ```
//!
//! `message` 는 사용자에게 그대로 노출되는 한국어 문구이고,
//! `error` 는 클라이언트 분기용 고정 식별자입니다.
//!
//! ## 저장소 에러 분류
//!
//! MongoDB 드라이버 에러는 [`StoreErrorCode`] 로 분류된 뒤
//! 고정된 한국어 메시지로 변환됩니다.
//!
//! ```rust,ignore
//! collection.insert_one(&article).await
//!     .map_err(AppError::from_store)?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 모든 변형은 사용자에게 보여줄 메시지를 그대로 담습니다.
/// `Display` 구현은 로그용으로 카테고리 접두어를 붙입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 문서 저장소(MongoDB) 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 클라이언트 상태 저장소 관련 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 요청, 비즈니스 규칙 충돌
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스(카카오) 호출 실패
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 예상치 못한 내부 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트 분기용 고정 에러 코드
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "database_error",
            AppError::RedisError(_) => "cache_error",
            AppError::ValidationError(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::ConflictError(_) => "conflict",
            AppError::AuthenticationError(_) => "authentication_required",
            AppError::AuthorizationError(_) => "insufficient_permissions",
            AppError::ExternalServiceError(_) => "external_service_error",
            AppError::InternalError(_) => "internal_error",
        }
    }

    /// 사용자에게 노출되는 메시지 (접두어 없음)
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::RedisError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::ExternalServiceError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }

    /// MongoDB 드라이버 에러를 한국어 메시지의 `DatabaseError` 로 변환합니다.
    pub fn from_store(error: mongodb::error::Error) -> Self {
        let code = StoreErrorCode::from_mongo(&error);
        log::error!("문서 저장소 오류 ({:?}): {}", code, error);
        AppError::DatabaseError(code.message(&error.to_string()))
    }

    /// `validator` 검증 결과를 `ValidationError` 로 변환합니다.
    ///
    /// 필드 이름 순으로 정렬한 뒤 첫 번째 메시지를 사용합니다.
    pub fn from_validation(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "입력값이 올바르지 않습니다.".to_string());

        AppError::ValidationError(message)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.error_code(),
                "message": self.message(),
            }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

/// 문서 저장소 에러 분류
///
/// 드라이버 에러 종류와 서버 에러 코드를 사용자 메시지 단위로 묶습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    PermissionDenied,
    NotFound,
    AlreadyExists,
    FailedPrecondition,
    Aborted,
    Unavailable,
    Unknown,
}

impl StoreErrorCode {
    /// 드라이버 에러에서 분류 코드를 추출합니다.
    pub fn from_mongo(error: &mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        match error.kind.as_ref() {
            ErrorKind::Authentication { .. } => StoreErrorCode::PermissionDenied,
            ErrorKind::Command(command) => Self::from_server_code(command.code),
            ErrorKind::Write(WriteFailure::WriteError(write)) => Self::from_server_code(write.code),
            ErrorKind::Write(WriteFailure::WriteConcernError(concern)) => {
                Self::from_server_code(concern.code)
            }
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. } => StoreErrorCode::Unavailable,
            ErrorKind::Transaction { .. } => StoreErrorCode::Aborted,
            _ => StoreErrorCode::Unknown,
        }
    }

    /// MongoDB 서버 에러 코드를 분류합니다.
    pub fn from_server_code(code: i32) -> Self {
        match code {
            11000 | 11001 => StoreErrorCode::AlreadyExists,
            13 | 18 => StoreErrorCode::PermissionDenied,
            26 | 47 => StoreErrorCode::NotFound,
            2 | 121 => StoreErrorCode::FailedPrecondition,
            24 | 112 | 251 => StoreErrorCode::Aborted,
            6 | 7 | 89 | 91 | 189 => StoreErrorCode::Unavailable,
            _ => StoreErrorCode::Unknown,
        }
    }

    /// 사용자에게 노출할 한국어 메시지
    pub fn message(&self, detail: &str) -> String {
        match self {
            StoreErrorCode::PermissionDenied => "권한이 없습니다.".to_string(),
            StoreErrorCode::NotFound => "데이터를 찾을 수 없습니다.".to_string(),
            StoreErrorCode::AlreadyExists => "이미 존재하는 데이터입니다.".to_string(),
            StoreErrorCode::FailedPrecondition => "요청 조건이 맞지 않습니다.".to_string(),
            StoreErrorCode::Aborted => "요청이 중단되었습니다.".to_string(),
            StoreErrorCode::Unavailable => "서비스가 일시적으로 사용할 수 없습니다.".to_string(),
            StoreErrorCode::Unknown => format!("데이터베이스 오류: {}", detail),
        }
    }
}
