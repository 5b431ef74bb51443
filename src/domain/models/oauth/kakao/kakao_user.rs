//! # 카카오 OAuth 응답 모델
//!
//! 카카오 인증 서버와 사용자 API 응답을 역직렬화하기 위한 모델입니다.
//!
//! ## API 엔드포인트
//!
//! | 용도 | 엔드포인트 | 인증 |
//! |------|-----------|------|
//! | 토큰 교환 | `POST https://kauth.kakao.com/oauth/token` | form 파라미터 |
//! | 내 정보 | `GET https://kapi.kakao.com/v2/user/me` | `Bearer {access_token}` |
//! | 앱 사용자 목록 | `GET https://kapi.kakao.com/v1/user/ids` | `KakaoAK {admin_key}` |
//!
//! 이메일은 사용자가 `account_email` 동의 항목에 동의한 경우에만 포함됩니다.

use serde::Deserialize;

use crate::config::AuthProvider;
use crate::domain::entities::users::user::DEFAULT_NICKNAME;
use crate::domain::models::auth::login_profile::LoginProfile;

/// 토큰 교환 응답
#[derive(Debug, Clone, Deserialize)]
pub struct KakaoTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// `/v2/user/me` 응답
#[derive(Debug, Clone, Deserialize)]
pub struct KakaoUserResponse {
    /// 앱 단위 회원번호
    pub id: i64,
    #[serde(default)]
    pub kakao_account: Option<KakaoAccount>,
    #[serde(default)]
    pub properties: Option<KakaoProperties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KakaoAccount {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile: Option<KakaoProfile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KakaoProfile {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// 구버전 사용자 프로퍼티
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KakaoProperties {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl KakaoUserResponse {
    fn profile(&self) -> Option<&KakaoProfile> {
        self.kakao_account.as_ref().and_then(|account| account.profile.as_ref())
    }

    /// 로그인용 프로필로 정규화합니다.
    ///
    /// 닉네임이 없으면 `익명`, 빈 문자열은 값 없음으로 취급합니다.
    pub fn into_login_profile(self) -> LoginProfile {
        let nickname = self
            .profile()
            .and_then(|p| p.nickname.clone())
            .or_else(|| self.properties.as_ref().and_then(|p| p.nickname.clone()))
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NICKNAME.to_string());

        let profile_image = self
            .profile()
            .and_then(|p| p.profile_image_url.clone())
            .or_else(|| self.properties.as_ref().and_then(|p| p.profile_image.clone()))
            .filter(|url| !url.trim().is_empty());

        let email = self
            .kakao_account
            .as_ref()
            .and_then(|account| account.email.clone())
            .filter(|email| !email.trim().is_empty());

        LoginProfile {
            id: self.id.to_string(),
            nickname: Some(nickname),
            email,
            profile_image,
            provider: AuthProvider::Kakao,
        }
    }
}

/// `/v1/user/ids` 응답
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KakaoUserIdsResponse {
    #[serde(default)]
    pub elements: Vec<i64>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub after_id: Option<i64>,
    #[serde(default)]
    pub before_id: Option<i64>,
}
