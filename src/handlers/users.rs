//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/users` | 회원가입 | 201 Created |
//! | `GET` | `/api/users/me` | 토큰의 사용자 정보 (인증 필요) | 200 OK |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::users::RegisterUserRequest;
use crate::domain::dto::ApiResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// # 요청 예시
///
/// ```bash
/// curl -X POST http://localhost:3000/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"username":"alice","password":"password123","fullName":"Alice Kim"}'
/// ```
///
/// # 응답 (201 Created)
///
/// ```json
/// {
///   "data": {
///     "id": "0190b4c2-...",
///     "username": "alice",
///     "fullName": "Alice Kim",
///     "roles": ["user"],
///     "createdDate": "2024-07-01T00:00:00Z"
///   }
/// }
/// ```
///
/// 사용자명이 이미 있으면 409 `{"error":"username already exists"}`.
#[post("")]
pub async fn register(
    payload: web::Json<RegisterUserRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(response)))
}

/// 현재 토큰의 사용자 정보
///
/// 미들웨어가 검증한 토큰 클레임을 그대로 반환합니다.
#[get("")]
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}
