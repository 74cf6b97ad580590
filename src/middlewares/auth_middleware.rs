//! 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 액세스 토큰을 검증하고 사용자 정보를
//! Request Extensions에 저장합니다. [`TokenService`](crate::services::auth::TokenService)는
//! `web::Data`로 등록되어 있어야 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 액세스 토큰 인증 미들웨어
///
/// 검증 실패 시 핸들러를 호출하지 않고 401을 응답합니다.
#[derive(Debug, Clone, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
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
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use actix_web::{test, web, App, HttpResponse, http::StatusCode};
    use chrono::Duration;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::domain::models::token::TokenType;
    use crate::errors::errors::UNAUTHORIZED_MESSAGE;
    use crate::test_support::{alice, symmetric_token_service};

    /// 핸들러 호출 횟수를 세는 테스트 앱
    macro_rules! guarded_app {
        ($calls:expr) => {{
            let calls = $calls.clone();
            test::init_service(
                App::new()
                    .app_data(web::Data::new(symmetric_token_service()))
                    .service(
                        web::scope("/protected")
                            .wrap(AuthMiddleware::required())
                            .route(
                                "",
                                web::get().to(move |user: AuthenticatedUser| {
                                    let calls = calls.clone();
                                    async move {
                                        calls.fetch_add(1, Ordering::SeqCst);
                                        HttpResponse::Ok().json(serde_json::json!({
                                            "userId": user.user_id(),
                                            "roles": user.roles(),
                                        }))
                                    }
                                }),
                            ),
                    ),
            )
            .await
        }};
    }

    async fn assert_rejected(header: Option<&str>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = guarded_app!(calls);

        let mut req = test::TestRequest::get().uri("/protected");
        if let Some(value) = header {
            req = req.insert_header(("Authorization", value));
        }
        let resp = test::call_service(&app, req.to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "unauthorized");
        assert_eq!(body["message"], UNAUTHORIZED_MESSAGE);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_valid_access_token_reaches_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = guarded_app!(calls);

        let token = symmetric_token_service()
            .issue(&alice(), TokenType::Access, Duration::hours(1))
            .unwrap();
        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["userId"], "u1");
        assert_eq!(body["roles"][0], "user");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_rejects_missing_header() {
        assert_rejected(None).await;
    }

    #[actix_web::test]
    async fn test_rejects_other_scheme() {
        assert_rejected(Some("Token abc123")).await;
    }

    #[actix_web::test]
    async fn test_rejects_empty_bearer() {
        assert_rejected(Some("Bearer ")).await;
    }

    #[actix_web::test]
    async fn test_rejects_garbage_token() {
        assert_rejected(Some("Bearer not-a-token")).await;
    }

    #[actix_web::test]
    async fn test_rejects_refresh_token() {
        let token = symmetric_token_service()
            .issue(&alice(), TokenType::Refresh, Duration::hours(1))
            .unwrap();

        assert_rejected(Some(format!("Bearer {}", token).as_str())).await;
    }

    #[actix_web::test]
    async fn test_rejects_when_token_service_missing() {
        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(|| async { HttpResponse::Ok().finish() })),
            ),
        )
        .await;

        let token = symmetric_token_service()
            .issue(&alice(), TokenType::Access, Duration::hours(1))
            .unwrap();
        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
