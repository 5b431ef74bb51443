//! 카카오 REST API 클라이언트
//!
//! 로그인 서비스와 관리자 서비스는 [`KakaoApi`] 트레이트에만 의존합니다.
//! 운영 구현은 `reqwest` 로 카카오 서버를 호출하고, 테스트는 고정 응답 구현을 주입합니다.
//!
//! 모든 호출 실패는 재시도 없이 `ExternalServiceError` 로 끝납니다.

use async_trait::async_trait;
use log::{debug, error};

use crate::config::KakaoSettings;
use crate::core::errors::AppError;
use crate::domain::models::auth::LoginProfile;
use crate::domain::models::oauth::kakao::{KakaoTokenResponse, KakaoUserIdsResponse, KakaoUserResponse};

#[async_trait]
pub trait KakaoApi: Send + Sync {
    /// 인가 코드를 액세스 토큰으로 교환합니다.
    async fn exchange_code(&self, code: &str) -> Result<KakaoTokenResponse, AppError>;

    /// `/v2/user/me` 를 호출해 로그인 프로필로 정규화합니다.
    async fn fetch_profile(&self, access_token: &str) -> Result<LoginProfile, AppError>;

    /// 앱에 연결된 사용자 ID 목록 (Admin 키 필요)
    async fn list_user_ids(&self) -> Result<KakaoUserIdsResponse, AppError>;
}

pub struct ReqwestKakaoApi {
    http: reqwest::Client,
    settings: KakaoSettings,
}

impl ReqwestKakaoApi {
    pub fn new(settings: KakaoSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }
}

#[async_trait]
impl KakaoApi for ReqwestKakaoApi {
    /// ```text
    /// POST https://kauth.kakao.com/oauth/token
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// grant_type=authorization_code&client_id=...&redirect_uri=...&code=...
    /// ```
    async fn exchange_code(&self, code: &str) -> Result<KakaoTokenResponse, AppError> {
        let (client_id, redirect_uri) = self.settings.login_credentials()?;

        let mut params = vec![
            ("grant_type", "authorization_code"),
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("code", code),
        ];
        if let Some(secret) = self.settings.client_secret.as_deref() {
            params.push(("client_secret", secret));
        }

        let response = self
            .http
            .post(&self.settings.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| external("카카오 토큰 요청 실패", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("카카오 토큰 교환 실패: {} {}", status, body);
            return Err(AppError::ExternalServiceError(
                "카카오 인증에 실패했습니다. 다시 로그인해주세요.".to_string(),
            ));
        }

        response
            .json::<KakaoTokenResponse>()
            .await
            .map_err(|e| external("카카오 토큰 응답 파싱 실패", e))
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<LoginProfile, AppError> {
        let response = self
            .http
            .get(&self.settings.user_info_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| external("카카오 사용자 정보 요청 실패", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("카카오 사용자 정보 조회 실패: {} {}", status, body);
            return Err(AppError::ExternalServiceError(
                "카카오 사용자 정보를 가져올 수 없습니다.".to_string(),
            ));
        }

        let user = response
            .json::<KakaoUserResponse>()
            .await
            .map_err(|e| external("카카오 사용자 정보 파싱 실패", e))?;

        debug!("카카오 사용자 정보 수신: {}", user.id);
        Ok(user.into_login_profile())
    }

    /// ```text
    /// GET https://kapi.kakao.com/v1/user/ids
    /// Authorization: KakaoAK {admin_key}
    /// ```
    async fn list_user_ids(&self) -> Result<KakaoUserIdsResponse, AppError> {
        let admin_key = self.settings.admin_key()?;

        let response = self
            .http
            .get(&self.settings.user_ids_uri)
            .header("Authorization", format!("KakaoAK {}", admin_key))
            .send()
            .await
            .map_err(|e| external("카카오 사용자 목록 요청 실패", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("카카오 API 응답 오류: {} {}", status, body);
            return Err(AppError::ExternalServiceError(
                "카카오 사용자 목록을 가져올 수 없습니다.".to_string(),
            ));
        }

        response
            .json::<KakaoUserIdsResponse>()
            .await
            .map_err(|e| external("카카오 사용자 목록 파싱 실패", e))
    }
}

fn external(context: &str, e: reqwest::Error) -> AppError {
    error!("{}: {}", context, e);
    AppError::ExternalServiceError(context.to_string())
}
