use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;

/// 프로바이더 프로필을 정규화한 로그인 정보
///
/// 사용자 upsert 의 입력입니다. `None` 필드는 기존 값을 덮어쓰지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginProfile {
    pub id: String,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub profile_image: Option<String>,
    pub provider: AuthProvider,
}
