//! 인증 및 보안 서비스 모듈
//!
//! 토큰 발급과 검증을 담당하는 [`TokenService`]를 제공합니다.
//! 키 자료는 [`KeyMaterial`](crate::config::KeyMaterial)로 주입됩니다.

pub mod token_service;

pub use token_service::*;
