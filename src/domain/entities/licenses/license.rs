//! License Entity Implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::utils::id::generate_id;

/// 라이선스 엔티티
///
/// `code`는 전체 컬렉션에서 유일합니다. 삭제는 `is_deleted` 플래그로만 표시합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    #[serde(rename = "_id")]
    pub id: String,
    /// 라이선스 코드 (최대 32자)
    pub code: String,
    /// 수량. `None`이면 수량 제한 없음
    pub qty: Option<i64>,
    /// 생성한 사용자 ID
    pub created_by: String,
    pub is_deleted: bool,
    pub created_date: DateTime<Utc>,
}

impl License {
    pub fn new(code: String, qty: Option<i64>, created_by: String) -> Self {
        Self {
            id: generate_id(),
            code,
            qty,
            created_by,
            is_deleted: false,
            created_date: Utc::now(),
        }
    }
}
