//! JWT 인증 미들웨어
//!
//! 스코프 단위로 인증 정책을 선언합니다.
//!
//! | 생성자 | 토큰 없음/무효 | 비활성 계정 | 역할 불일치 |
//! |--------|----------------|-------------|-------------|
//! | `required()` | 401 | 403 | - |
//! | `optional()` | 익명으로 통과 | 익명으로 통과 | - |
//! | `required_with_role("admin")` | 401 | 403 | 403 |
//!
//! 역할은 토큰의 클레임이 아니라 저장된 계정 기준입니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::AuthPolicy;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    policy: AuthPolicy,
}

impl AuthMiddleware {
    pub fn required() -> Self {
        Self { policy: AuthPolicy::Required }
    }

    /// 토큰이 유효하면 사용자 정보를 넣고, 아니면 익명으로 통과시킵니다.
    pub fn optional() -> Self {
        Self { policy: AuthPolicy::Optional }
    }

    pub fn required_with_role(role: &str) -> Self {
        Self {
            policy: AuthPolicy::Role(role.to_string()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            policy: self.policy.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, test, web, App, HttpResponse};

    use crate::config::AuthProvider;
    use crate::domain::entities::users::user::UserRole;
    use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
    use crate::test_support::{user, TestContext};

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    #[get("/maybe")]
    async fn maybe(user: OptionalUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id().unwrap_or("anonymous").to_string())
    }

    fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", token))
    }

    #[actix_web::test]
    async fn test_required_scope_rejects_missing_token() {
        let state = TestContext::new().state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/me").wrap(AuthMiddleware::required()).service(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/me/whoami").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 401);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "authentication_required");
    }

    #[actix_web::test]
    async fn test_role_scope_rejects_user_token() {
        let state = TestContext::new().with_users(vec![user("4012345678")]).state();
        let user_token = state
            .tokens
            .issue("4012345678", AuthProvider::Kakao, vec!["user".to_string()])
            .unwrap()
            .access_token;
        let admin_token = state
            .tokens
            .issue("admin", AuthProvider::Admin, vec!["admin".to_string()])
            .unwrap()
            .access_token;

        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::scope("/admin")
                    .wrap(AuthMiddleware::required_with_role("admin"))
                    .service(whoami),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/whoami")
            .insert_header(bearer(&user_token))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 403);

        let req = test::TestRequest::get()
            .uri("/admin/whoami")
            .insert_header(bearer(&admin_token))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "admin");
    }

    #[actix_web::test]
    async fn test_optional_scope_passes_anonymous_and_invalid_tokens() {
        let state = TestContext::new().with_users(vec![user("4012345678")]).state();
        let token = state
            .tokens
            .issue("4012345678", AuthProvider::Kakao, vec!["user".to_string()])
            .unwrap()
            .access_token;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api").wrap(AuthMiddleware::optional()).service(maybe)),
        )
        .await;

        let anonymous = test::TestRequest::get().uri("/api/maybe").to_request();
        assert_eq!(test::call_and_read_body(&app, anonymous).await, "anonymous");

        let invalid = test::TestRequest::get()
            .uri("/api/maybe")
            .insert_header(bearer("not-a-token"))
            .to_request();
        assert_eq!(test::call_and_read_body(&app, invalid).await, "anonymous");

        let valid = test::TestRequest::get()
            .uri("/api/maybe")
            .insert_header(bearer(&token))
            .to_request();
        assert_eq!(test::call_and_read_body(&app, valid).await, "4012345678");
    }

    #[actix_web::test]
    async fn test_roles_follow_the_stored_account() {
        let mut admin = user("u9");
        admin.role = UserRole::Admin;
        let ctx = TestContext::new().with_users(vec![admin.clone(), user("u2")]);
        let state = ctx.state();
        let admin_token = state.tokens.issue_for_user(&admin).unwrap().access_token;
        let user_token = state.tokens.issue_for_user(&user("u2")).unwrap().access_token;
        let users = state.users.clone();

        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::scope("/admin")
                    .wrap(AuthMiddleware::required_with_role("admin"))
                    .service(whoami),
            ),
        )
        .await;

        let call = |token: &str| {
            test::TestRequest::get()
                .uri("/admin/whoami")
                .insert_header(bearer(token))
                .to_request()
        };

        assert_eq!(test::call_service(&app, call(&admin_token)).await.status(), 200);

        users.revoke_admin("u9").await.unwrap();
        users.grant_admin("u2").await.unwrap();

        assert_eq!(test::call_service(&app, call(&admin_token)).await.status(), 403);
        assert_eq!(test::call_service(&app, call(&user_token)).await.status(), 200);
    }

    #[actix_web::test]
    async fn test_deactivated_account_is_shut_out() {
        let ctx = TestContext::new().with_users(vec![user("u1")]);
        let state = ctx.state();
        let token = state.tokens.issue_for_user(&user("u1")).unwrap().access_token;
        state.users.deactivate("u1").await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/me").wrap(AuthMiddleware::required()).service(whoami))
                .service(web::scope("/api").wrap(AuthMiddleware::optional()).service(maybe)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me/whoami")
            .insert_header(bearer(&token))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 403);

        let req = test::TestRequest::get()
            .uri("/api/maybe")
            .insert_header(bearer(&token))
            .to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "anonymous");
    }

    #[actix_web::test]
    async fn test_token_without_account_is_unauthenticated() {
        let state = TestContext::new().state();
        let token = state
            .tokens
            .issue("ghost", AuthProvider::Kakao, vec!["user".to_string()])
            .unwrap()
            .access_token;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/me").wrap(AuthMiddleware::required()).service(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me/whoami")
            .insert_header(bearer(&token))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 401);
    }
}
