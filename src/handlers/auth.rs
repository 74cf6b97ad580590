//! Authentication HTTP Handlers
//!
//! - **로컬 로그인**: 사용자명/비밀번호 → 토큰 쌍 (`POST /api/auth/login`)
//! - **JWKS**: 토큰 검증용 공개키 (`GET /.well-known/jwks.json`)
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::users::{LoginRequest, LoginResponse};
use crate::domain::dto::ApiResponse;
use crate::errors::AppError;
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 로컬 로그인 핸들러
///
/// 비밀번호를 검증한 뒤 액세스(12시간)/리프레시(30일) 토큰 쌍을 발급합니다.
///
/// # Endpoint
/// `POST /api/auth/login`
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "data": {
///     "user": { "id": "...", "username": "alice", ... },
///     "accessToken": "eyJ...",
///     "refreshToken": "eyJ...",
///     "tokenType": "Bearer",
///     "expiresIn": 43200
///   }
/// }
/// ```
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = user_service
        .authenticate(&payload.username, &payload.password)
        .await?;

    // 발급 실패도 401로 응답 (원인은 error_response에서 로그)
    let tokens = token_service.issue_pair(&user.identity()).await?;

    log::info!("로그인 성공 - 사용자: {}, ID: {}", user.username, user.id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(LoginResponse {
        user: user.into(),
        tokens,
    })))
}

/// JWKS 엔드포인트
///
/// 비대칭(RS256) 모드에서만 공개키를 제공하며, 대칭 모드에서는 404입니다.
#[get("/.well-known/jwks.json")]
pub async fn jwks(token_service: web::Data<TokenService>) -> Result<HttpResponse, AppError> {
    let jwks = token_service
        .jwks()
        .ok_or_else(|| AppError::NotFound("no public signing key is published".to_string()))?;

    Ok(HttpResponse::Ok()
        .insert_header(("Cache-Control", "public, max-age=3600"))
        .json(jwks))
}
