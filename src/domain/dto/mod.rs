//! # Data Transfer Objects
//!
//! HTTP 요청/응답 계약을 정의합니다. 엔티티를 그대로 노출하지 않고
//! 응답 DTO로 변환하여 민감한 필드(비밀번호 해시 등)를 제외합니다.
//!
//! - [`users`] - 회원가입, 로그인 요청 및 사용자 응답
//! - [`licenses`] - 라이선스 생성 요청 및 응답
//! - [`response`] - `{ "data": ... }` 성공 응답 래퍼

pub mod users;
pub mod licenses;
pub mod response;

pub use response::ApiResponse;
