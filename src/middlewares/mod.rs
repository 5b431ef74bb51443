//! 요청 파이프라인 미들웨어
//!
//! [`AuthMiddleware`] 는 `Authorization: Bearer` 토큰을 `AppState` 의 `TokenService` 로 검증하고,
//! 스코프에 선언된 `AuthPolicy` 에 따라 통과/401/403 을 결정합니다.
//! 통과한 사용자는 요청 extensions 에 들어가 `AuthenticatedUser`, `OptionalUser` 추출자로 꺼냅니다.

mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
