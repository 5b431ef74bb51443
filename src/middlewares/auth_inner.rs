//! AuthMiddleware 의 요청 처리부
//!
//! 1. `Authorization: Bearer` 토큰 검증
//! 2. 카카오 계정이면 저장된 계정으로 역할과 활성 여부를 다시 확인
//! 3. 스코프 정책으로 통과/401/403 판정
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;
use serde_json::json;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::models::auth::{AuthDecision, AuthPolicy, AuthenticatedUser, Credential};

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub policy: AuthPolicy,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let policy = self.policy.clone();

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                let err = AppError::InternalError("애플리케이션 상태가 등록되지 않았습니다".to_string());
                return Ok(reject(req, err.error_response()));
            };

            let credential = match identify(&state, &req).await {
                Ok(credential) => credential,
                Err(err) if policy == AuthPolicy::Optional => {
                    log::warn!("계정 조회 실패, 익명으로 처리: {}", err);
                    Credential::Anonymous
                }
                Err(err) => {
                    log::error!("계정 조회 실패 {} {}: {}", req.method(), req.path(), err);
                    return Ok(reject(req, err.error_response()));
                }
            };

            match policy.decide(credential) {
                AuthDecision::Admit(Some(user)) => {
                    log::debug!("인증 사용자: {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                AuthDecision::Admit(None) => {}
                AuthDecision::Unauthenticated => {
                    log::warn!("인증 실패: {} {}", req.method(), req.path());
                    let body = json!({
                        "error": "authentication_required",
                        "message": "유효한 인증 토큰이 필요합니다"
                    });
                    return Ok(reject(req, HttpResponse::Unauthorized().json(body)));
                }
                AuthDecision::Forbidden(user) => {
                    log::warn!("권한 부족: {} {:?} ({:?})", user.user_id, user.roles, policy);
                    let body = json!({
                        "error": "insufficient_permissions",
                        "message": "접근 권한이 부족합니다"
                    });
                    return Ok(reject(req, HttpResponse::Forbidden().json(body)));
                }
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

fn reject<B>(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<EitherBody<B>> {
    req.into_response(response).map_into_right_body()
}

/// 저장소 오류만 `Err` 입니다. 토큰 문제는 `Credential::Anonymous` 로 끝납니다.
async fn identify(state: &AppState, req: &ServiceRequest) -> Result<Credential, AppError> {
    let user = match verify_bearer(state, req) {
        Ok(user) => user,
        Err(err) => {
            log::debug!("토큰 없음/무효 {} {}: {}", req.method(), req.path(), err);
            return Ok(Credential::Anonymous);
        }
    };

    if user.is_pin_session() {
        return Ok(Credential::Active(user));
    }

    let credential = match state.users.get_by_id(&user.user_id).await? {
        None => {
            log::warn!("토큰의 계정이 없습니다: {}", user.user_id);
            Credential::Anonymous
        }
        Some(stored) if !stored.is_active => Credential::Deactivated(user),
        Some(stored) => Credential::Active(AuthenticatedUser {
            roles: stored.token_roles(),
            ..user
        }),
    };

    Ok(credential)
}

fn verify_bearer(state: &AppState, req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = state.tokens.extract_bearer_token(header)?;
    state.tokens.verify(token).map(AuthenticatedUser::from)
}
