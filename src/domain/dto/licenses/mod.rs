//! 라이선스 관련 DTO

pub mod license_request;
pub mod license_response;

pub use license_request::LicenseRequest;
pub use license_response::LicenseResponse;
