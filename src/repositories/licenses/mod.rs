//! 라이선스 데이터 액세스 계층

pub mod license_repo;

pub use license_repo::*;
