//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `async_trait` 기반 trait으로 정의되며, 서비스는
//! `Arc<dyn ...Repository>`로 의존합니다. 구현체는 `DATABASE_BACKEND`에 따라
//! MongoDB 또는 메모리 버전이 선택됩니다.
//!
//! - [`users`] - 사용자 (`users` 컬렉션)
//! - [`licenses`] - 라이선스 (`licenses` 컬렉션)

pub mod users;
pub mod licenses;
