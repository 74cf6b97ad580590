//! 라이선스 발급 서비스

use std::sync::Arc;
use crate::domain::dto::licenses::{LicenseRequest, LicenseResponse};
use crate::domain::entities::licenses::License;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::repositories::licenses::LicenseRepository;
use crate::utils::string_utils::validate_required_string;

pub struct LicenseService {
    license_repo: Arc<dyn LicenseRepository>,
}

impl LicenseService {
    pub fn new(license_repo: Arc<dyn LicenseRepository>) -> Self {
        Self { license_repo }
    }

    /// 검증된 요청으로 새 라이선스를 생성합니다.
    ///
    /// 생성자는 토큰으로 검증된 사용자 ID로 기록됩니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 공백뿐인 코드
    /// * `ConflictError` - 이미 존재하는 코드
    pub async fn create(
        &self,
        request: LicenseRequest,
        creator: &AuthenticatedUser,
    ) -> Result<LicenseResponse, AppError> {
        let code = validate_required_string(&request.code, "code")?;
        let license = License::new(code, request.quantity(), creator.user_id().to_string());

        let created = self.license_repo.create(license).await?;
        log::info!("라이선스 생성: {} (by {})", created.code, created.created_by);

        Ok(LicenseResponse::from(created))
    }
}
