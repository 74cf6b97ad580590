use serde::Serialize;

/// 성공 응답 래퍼
///
/// 모든 성공 응답은 `{ "data": ... }` 형태입니다.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { data }
    }
}
