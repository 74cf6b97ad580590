//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `Unauthorized` | 401 Unauthorized |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | `DatabaseError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn create_license(&self, data: LicenseRequest) -> Result<License, AppError> {
//!     if self.license_repo.exists_by_code(&data.code).await? {
//!         return Err(AppError::ConflictError("license already exists".to_string()));
//!     }
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;
use crate::errors::auth_error::{AuthError, AuthErrorKind};

/// 인증 실패 시 클라이언트에게 항상 동일하게 전달되는 메시지
pub const UNAUTHORIZED_MESSAGE: &str = "유효한 인증 토큰이 필요합니다";

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("{0}")]
    ConflictError(String),

    /// 토큰 인증 실패 (401 Unauthorized)
    ///
    /// 내부 원인(`AuthError`)은 로그로만 남기고 응답은 항상 동일합니다.
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AuthError),

    /// 로그인 자격 증명 불일치 (401 Unauthorized)
    #[error("{0}")]
    InvalidCredentials(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 로그에 남길 인증 에러를 기록합니다.
    ///
    /// 설정 문제는 개발자가 고쳐야 하므로 `error`, 나머지는 `warn` 레벨입니다.
    pub fn log_auth_failure(err: &AuthError) {
        match err.kind() {
            AuthErrorKind::Configuration => {
                log::error!("인증 설정 오류 [{:?}]: {}", err.kind(), err)
            }
            kind => log::warn!("인증 실패 [{:?}]: {}", kind, err),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러와 토큰 인증 에러는 내부 정보를 노출하지 않습니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = match self {
            AppError::Unauthorized(err) => {
                Self::log_auth_failure(err);
                serde_json::json!({
                    "error": "unauthorized",
                    "message": UNAUTHORIZED_MESSAGE
                })
            }
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("{}", self);
                serde_json::json!({ "error": "Internal server error" })
            }
            _ => serde_json::json!({ "error": self.to_string() }),
        };

        HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
