//! 사용자 등록 요청 DTO
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    /// 로그인 이름 (1-128자)
    #[validate(length(
        min = 1,
        max = 128,
        message = "username must be 1-128 characters"
    ))]
    pub username: String,

    /// 비밀번호 (최소 8자)
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,

    /// 실명 (1-128자)
    #[validate(length(
        min = 1,
        max = 128,
        message = "fullName must be 1-128 characters"
    ))]
    pub full_name: String,
}
