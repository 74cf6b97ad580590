//! License HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/licenses` | 라이선스 생성 (인증 필요) | 201 Created |

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::licenses::LicenseRequest;
use crate::domain::dto::ApiResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::licenses::LicenseService;

/// 라이선스 생성 핸들러
///
/// ```bash
/// curl -X POST http://localhost:3000/api/licenses \
///   -H "Authorization: Bearer eyJ..." \
///   -H "Content-Type: application/json" \
///   -d '{"code":"LIC-2024-001","qty":10}'
/// ```
///
/// 코드가 이미 있으면 409 `{"error":"license already exists"}`.
#[post("")]
pub async fn create_license(
    payload: web::Json<LicenseRequest>,
    user: AuthenticatedUser,
    license_service: web::Data<LicenseService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let license = license_service.create(payload.into_inner(), &user).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(license)))
}
