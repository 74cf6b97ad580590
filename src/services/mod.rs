//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스들은 `main`에서 명시적으로 생성되어 `web::Data`로 공유됩니다.
//!
//! - [`auth`] - 토큰 발급/검증
//! - [`users`] - 사용자 등록/인증/조회
//! - [`licenses`] - 라이선스 발급

pub mod users;
pub mod auth;
pub mod licenses;
