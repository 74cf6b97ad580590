//! 라이선스 생성 요청 DTO
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// 라이선스 생성 요청
///
/// `qty` 키는 반드시 존재해야 하며 값은 `null` 또는 1 이상의 정수입니다.
///
/// | JSON | `qty` |
/// |------|-------|
/// | 키 없음 | `None` (검증 실패) |
/// | `"qty": null` | `Some(None)` |
/// | `"qty": 5` | `Some(Some(5))` |
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_qty"))]
pub struct LicenseRequest {
    #[validate(length(min = 1, max = 32, message = "code must be 1-32 characters"))]
    pub code: String,

    #[serde(default, deserialize_with = "deserialize_present")]
    pub qty: Option<Option<i64>>,
}

impl LicenseRequest {
    /// 검증을 통과한 요청의 수량 값
    pub fn quantity(&self) -> Option<i64> {
        self.qty.flatten()
    }
}

/// 키가 존재하면 값이 null이어도 `Some`으로 감쌈
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

fn validate_qty(req: &LicenseRequest) -> Result<(), ValidationError> {
    match req.qty {
        None => Err(ValidationError::new("qty_required")
            .with_message("qty is required (null or an integer >= 1)".into())),
        Some(Some(qty)) if qty < 1 => Err(ValidationError::new("qty_range")
            .with_message("qty must be null or an integer >= 1".into())),
        _ => Ok(()),
    }
}
