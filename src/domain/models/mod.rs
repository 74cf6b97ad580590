//! 도메인 모델 모듈
//!
//! 영속되지 않는 도메인 값들을 제공합니다.
//!
//! - [`token`] - 토큰 클레임, 토큰 용도, 토큰 쌍
//! - [`auth`] - 검증을 통과한 요청 사용자

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
