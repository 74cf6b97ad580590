//! 영속 도메인 엔티티
//!
//! - [`users`] - 로그인 가능한 사용자
//! - [`licenses`] - 발급된 라이선스

pub mod users;
pub mod licenses;

pub use users::*;
pub use licenses::*;
