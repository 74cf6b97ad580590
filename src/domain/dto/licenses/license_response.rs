use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::licenses::License;

/// 라이선스 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseResponse {
    pub id: String,
    pub code: String,
    pub qty: Option<i64>,
    pub created_by: String,
    pub is_deleted: bool,
    pub created_date: DateTime<Utc>,
}

impl From<License> for LicenseResponse {
    fn from(license: License) -> Self {
        Self {
            id: license.id,
            code: license.code,
            qty: license.qty,
            created_by: license.created_by,
            is_deleted: license.is_deleted,
            created_date: license.created_date,
        }
    }
}
