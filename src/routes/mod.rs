//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | `GET` | `/health` | - |
//! | `GET` | `/.well-known/jwks.json` | - |
//! | `POST` | `/api/users` | - |
//! | `GET` | `/api/users/me` | 액세스 토큰 |
//! | `POST` | `/api/auth/login` | - |
//! | `POST` | `/api/licenses` | 액세스 토큰 |
//!
//! 핸들러가 사용하는 `TokenService`, `UserService`, `LicenseService`는
//! 호출하는 쪽에서 `web::Data`로 등록해야 합니다.
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(token_service.clone())
//!     .app_data(user_service.clone())
//!     .app_data(license_service.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // JSON 파싱 실패도 400 ValidationError로 응답
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );

    cfg.service(health_check);
    cfg.service(handlers::auth::jwks);

    configure_user_routes(cfg);
    configure_auth_routes(cfg);
    configure_license_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// `/api/users/me` 스코프는 `/api/users`보다 먼저 등록해야 합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // Protected
    cfg.service(
        web::scope("/api/users/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::me)
    );

    // Public
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::register)
    );
}

/// 인증 관련 라우트를 설정합니다
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::login)
    );
}

/// 라이선스 라우트를 설정합니다 (모두 인증 필요)
fn configure_license_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/licenses")
            .wrap(AuthMiddleware::required())
            .service(handlers::licenses::create_license)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
