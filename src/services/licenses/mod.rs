//! 라이선스 서비스 모듈

pub mod license_service;

pub use license_service::LicenseService;
