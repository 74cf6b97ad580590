//! 서명 토큰에 담기는 클레임 구조체와 토큰 쌍
//!
//! 토큰의 내부 구조는 [`TokenService`](crate::services::auth::TokenService)만
//! 해석합니다. 그 외 계층은 토큰을 불투명한 문자열로 취급합니다.

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::utils::string_utils::is_valid_string;

/// 토큰 용도 구분자
///
/// 서명된 페이로드 안에 들어가므로 전송 계층에서 제거하거나 바꿀 수 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// 보호된 API 접근용 단기 토큰
    Access,
    /// 새 토큰 쌍 발급용 장기 토큰
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 토큰 발급을 요청하는 쪽이 제공하는 신원 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Identity {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            roles,
        }
    }

    /// `userId`, `username`이 모두 비어있지 않은지 확인합니다.
    ///
    /// 비어있는 첫 필드 이름을 돌려줍니다.
    pub fn missing_field(&self) -> Option<&'static str> {
        if !is_valid_string(&self.user_id) {
            Some("userId")
        } else if !is_valid_string(&self.username) {
            Some("username")
        } else {
            None
        }
    }
}

/// 토큰 페이로드
///
/// 필수 필드가 빠진 페이로드는 역직렬화 단계에서 거부됩니다.
/// `roles`만 생략 가능하며 빈 목록으로 채워집니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 고유 ID
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
    /// 사용자 역할 목록 (순서 유지)
    #[serde(default)]
    pub roles: Vec<String>,
    /// 토큰 용도
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// 발급자
    pub iss: String,
    /// 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.user_id.clone(),
            username: self.username.clone(),
            roles: self.roles.clone(),
        }
    }
}

/// 로그인 시 클라이언트에게 전달되는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// 항상 "Bearer"
    pub token_type: String,
    /// 액세스 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_serialization() {
        assert_eq!(serde_json::to_string(&TokenType::Access).unwrap(), "\"access\"");
        assert_eq!(serde_json::to_string(&TokenType::Refresh).unwrap(), "\"refresh\"");
        assert!(serde_json::from_str::<TokenType>("\"both\"").is_err());
    }

    #[test]
    fn test_identity_missing_field() {
        assert_eq!(Identity::new("u1", "alice", vec![]).missing_field(), None);
        assert_eq!(Identity::new("", "alice", vec![]).missing_field(), Some("userId"));
        assert_eq!(Identity::new("u1", "  ", vec![]).missing_field(), Some("username"));
    }

    #[test]
    fn test_claims_wire_names() {
        let claims = TokenClaims {
            user_id: "u1".to_string(),
            username: "alice".to_string(),
            roles: vec!["user".to_string()],
            token_type: TokenType::Access,
            iss: "license-service".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_043_200,
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["type"], "access");
        assert_eq!(claims.identity(), Identity::new("u1", "alice", vec!["user".to_string()]));
    }

    #[test]
    fn test_claims_require_identity_fields() {
        let missing_username = serde_json::json!({
            "userId": "u1",
            "type": "access",
            "iss": "x",
            "iat": 1,
            "exp": 2
        });
        assert!(serde_json::from_value::<TokenClaims>(missing_username).is_err());

        let without_roles = serde_json::json!({
            "userId": "u1",
            "username": "alice",
            "type": "refresh",
            "iss": "x",
            "iat": 1,
            "exp": 2
        });
        let claims: TokenClaims = serde_json::from_value(without_roles).unwrap();
        assert!(claims.roles.is_empty());
    }
}
