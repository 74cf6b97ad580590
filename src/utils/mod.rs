//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리 유틸리티
//! - [`id`] - 엔티티 ID 생성

pub mod string_utils;
pub mod id;
