//! 에러 모듈
//!
//! - [`errors`] - HTTP 응답으로 변환되는 애플리케이션 전역 에러 (`AppError`)
//! - [`auth_error`] - 토큰 발급/검증 에러 (`AuthError`)

pub mod errors;
pub mod auth_error;

pub use errors::{AppError, AppResult, ErrorContext};
pub use auth_error::{AuthError, AuthErrorKind};
