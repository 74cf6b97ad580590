use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;
use crate::domain::models::token::TokenPair;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub roles: Vec<String>,
    pub created_date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            full_name,
            roles,
            created_date,
            ..
        } = user;

        Self {
            id,
            username,
            full_name,
            roles,
            created_date,
        }
    }
}

/// 로그인 성공 응답
///
/// 토큰 필드는 평탄화되어 `user`와 같은 레벨에 놓입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    #[serde(flatten)]
    pub tokens: TokenPair,
}
