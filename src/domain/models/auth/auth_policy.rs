//! 스코프별 인증 정책

use super::AuthenticatedUser;

/// 스코프에 선언하는 인증 정책
///
/// - `Optional` - 토큰이 유효하면 사용자, 아니면 익명 (`X-Client-Id` 기준)
/// - `Required` - 유효한 토큰 필수
/// - `Role` - 유효한 토큰 + 해당 역할
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthPolicy {
    Optional,
    Required,
    Role(String),
}

/// 토큰 검증과 계정 조회를 거친 요청자
///
/// 역할은 토큰 발급 시점이 아니라 저장된 계정 기준입니다.
#[derive(Debug)]
pub enum Credential {
    /// 토큰 없음, 무효, 또는 계정 문서 없음
    Anonymous,
    Active(AuthenticatedUser),
    /// 비활성화된 계정의 토큰
    Deactivated(AuthenticatedUser),
}

/// 정책을 적용한 판정
#[derive(Debug)]
pub enum AuthDecision {
    /// 통과. 사용자가 있으면 extensions 에 넣습니다
    Admit(Option<AuthenticatedUser>),
    /// 401
    Unauthenticated,
    /// 403
    Forbidden(AuthenticatedUser),
}

impl AuthPolicy {
    pub fn decide(&self, credential: Credential) -> AuthDecision {
        match (self, credential) {
            (AuthPolicy::Optional, Credential::Active(user)) => AuthDecision::Admit(Some(user)),
            (AuthPolicy::Optional, _) => AuthDecision::Admit(None),
            (_, Credential::Anonymous) => AuthDecision::Unauthenticated,
            (_, Credential::Deactivated(user)) => AuthDecision::Forbidden(user),
            (AuthPolicy::Required, Credential::Active(user)) => AuthDecision::Admit(Some(user)),
            (AuthPolicy::Role(role), Credential::Active(user)) if user.has_role(role) => {
                AuthDecision::Admit(Some(user))
            }
            (AuthPolicy::Role(_), Credential::Active(user)) => AuthDecision::Forbidden(user),
        }
    }
}
