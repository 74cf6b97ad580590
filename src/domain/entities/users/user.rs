//! User Entity Implementation
//!
//! 비밀번호 로그인으로 토큰을 발급받는 사용자 엔티티입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::models::token::Identity;
use crate::utils::id::generate_id;

/// 신규 사용자에게 부여되는 기본 역할
pub const DEFAULT_ROLE: &str = "user";

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 시간 순 정렬 가능한 UUID v7 문자열
    #[serde(rename = "_id")]
    pub id: String,
    /// 로그인 이름 (unique)
    pub username: String,
    /// bcrypt 해시. 응답 DTO로 절대 노출하지 않음
    pub password_hash: String,
    pub full_name: String,
    pub roles: Vec<String>,
    pub created_date: DateTime<Utc>,
}

impl User {
    /// 새 로컬 사용자 생성
    pub fn new(username: String, password_hash: String, full_name: String) -> Self {
        Self {
            id: generate_id(),
            username,
            password_hash,
            full_name,
            roles: vec![DEFAULT_ROLE.to_string()],
            created_date: Utc::now(),
        }
    }

    /// 토큰 발급용 신원 정보
    pub fn identity(&self) -> Identity {
        Identity::new(self.id.clone(), self.username.clone(), self.roles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("alice".to_string(), "hash".to_string(), "Alice Kim".to_string());

        assert_eq!(user.roles, vec!["user".to_string()]);
        assert!(!user.id.is_empty());
        assert_eq!(user.identity(), Identity::new(user.id.clone(), "alice", vec!["user".to_string()]));
    }

    #[test]
    fn test_document_field_names() {
        let user = User::new("alice".to_string(), "hash".to_string(), "Alice Kim".to_string());
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("_id").is_some());
        assert_eq!(json["fullName"], "Alice Kim");
        assert_eq!(json["passwordHash"], "hash");
    }
}
