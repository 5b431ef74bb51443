//! 인증 요청관련 DTO
//!
//! 카카오 콜백 페이지가 전달하는 인가 코드와 관리자 PIN 요청을 매핑합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 카카오 인가 코드 교환 요청
///
/// `code` 누락은 서비스 계층에서 `인증 코드가 필요합니다.` 로 응답합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KakaoLoginRequest {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    /// 사용자가 동의를 거부했거나 카카오 측 에러가 있는 경우
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// 로그인 URL 요청 쿼리
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginUrlQuery {
    pub state: Option<String>,
}

/// 관리자 PIN 로그인 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(custom(function = "validate_pin_format"))]
    pub pin: String,
}

fn validate_pin_format(pin: &str) -> Result<(), ValidationError> {
    if pin.len() == 6 && pin.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("pin_format");
        error.message = Some("관리자 비밀번호는 6자리 숫자입니다.".into());
        Err(error)
    }
}

/// 역할 변경 요청
#[derive(Debug, Clone, Deserialize)]
pub struct RoleUpdateRequest {
    /// user | admin
    pub role: String,
}
