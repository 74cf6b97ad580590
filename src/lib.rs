//! 라이선스 서비스 백엔드
//!
//! 사용자 등록과 로그인, 그리고 서명된 Bearer 토큰으로 보호되는
//! 라이선스 발급 API를 제공합니다.
//!
//! # Features
//!
//! - **토큰 발급/검증**: 액세스(12시간)/리프레시(30일) 토큰, HS256 또는 RS256
//! - **접근 가드**: `Authorization: Bearer <token>` 헤더를 검증하는 미들웨어
//! - **사용자 관리**: 회원가입, 로그인, 현재 사용자 조회
//! - **라이선스**: 인증된 사용자의 라이선스 생성
//! - **JWKS**: RS256 모드에서 검증용 공개키 제공
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, TokenService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB 또는 메모리 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use license_service::config::KeyMaterial;
//! use license_service::services::auth::TokenService;
//!
//! let token_service = TokenService::new(KeyMaterial::from_env()?)?;
//! let pair = token_service.issue_pair(&user.identity()).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
mod test_support;
