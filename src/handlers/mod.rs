//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 요청 본문을 `validator`로 검증한 뒤 서비스에 위임하고,
//! 성공 결과를 `{ "data": ... }`로 감싸 응답합니다. 실패는 모두
//! [`AppError`](crate::errors::AppError)의 `ResponseError` 구현이 처리합니다.
//!
//! 서비스 인스턴스는 `web::Data<T>` 추출자로 주입됩니다.

pub mod users;
pub mod auth;
pub mod licenses;
