//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록과 비밀번호 인증을 담당합니다.
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo, PasswordConfig::bcrypt_cost());
//! let response = user_service.register(request).await?;
//! ```

pub mod user_service;

pub use user_service::*;
