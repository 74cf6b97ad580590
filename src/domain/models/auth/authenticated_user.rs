use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;
use crate::domain::models::token::{Identity, TokenClaims};
use crate::errors::{AppError, AuthError};

/// 액세스 토큰 검증을 통과한 사용자 정보
///
/// [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 검증에 성공했을 때만
/// Request Extensions에 저장합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuthenticatedUser {
    claims: TokenClaims,
}

impl AuthenticatedUser {
    pub fn new(claims: TokenClaims) -> Self {
        Self { claims }
    }

    pub fn user_id(&self) -> &str {
        &self.claims.user_id
    }

    pub fn username(&self) -> &str {
        &self.claims.username
    }

    pub fn roles(&self) -> &[String] {
        &self.claims.roles
    }

    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.claims.roles.iter().any(|r| r == role)
    }

    pub fn identity(&self) -> Identity {
        self.claims.identity()
    }

    pub fn claims(&self) -> &TokenClaims {
        &self.claims
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 미들웨어가 적용되지 않은 라우트에서 사용하면 401로 거부됩니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::Unauthorized(AuthError::MissingHeader))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::token::TokenType;

    fn sample_claims() -> TokenClaims {
        TokenClaims {
            user_id: "u1".to_string(),
            username: "alice".to_string(),
            roles: vec!["user".to_string(), "admin".to_string()],
            token_type: TokenType::Access,
            iss: "license-service".to_string(),
            iat: 0,
            exp: 60,
        }
    }

    #[test]
    fn test_authenticated_user_has_role() {
        let user = AuthenticatedUser::new(sample_claims());

        assert!(user.has_role("admin"));
        assert!(user.has_role("user"));
        assert!(!user.has_role("moderator"));
        assert_eq!(user.user_id(), "u1");
        assert_eq!(user.username(), "alice");
    }

    #[test]
    fn test_serializes_as_claims() {
        let user = AuthenticatedUser::new(sample_claims());
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["userId"], "u1");
        assert_eq!(json["type"], "access");
    }

    #[actix_web::test]
    async fn test_extractor_rejects_without_extension() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let result = AuthenticatedUser::extract(&req).await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[actix_web::test]
    async fn test_extractor_reads_extension() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser::new(sample_claims()));

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.user_id(), "u1");
    }
}
