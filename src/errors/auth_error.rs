//! 토큰 인증 에러
//!
//! 토큰 발급/검증과 Bearer 헤더 파싱에서 발생하는 모든 실패를 표현합니다.
//! 클라이언트에는 항상 401 하나로 보이지만, 로그에서는 [`AuthErrorKind`]로
//! 원인을 구분할 수 있습니다.

use thiserror::Error;
use crate::domain::models::token::TokenType;

/// 인증 에러 분류
///
/// | Kind | 누가 고쳐야 하는가 |
/// |------|-------------------|
/// | `Configuration` | 운영자 (키/모드 설정 누락) |
/// | `MalformedCredential` | 클라이언트 (헤더 형식) |
/// | `Cryptographic` | 클라이언트 (만료/변조/손상 토큰) |
/// | `SemanticMismatch` | 클라이언트 (access/refresh 혼용) |
/// | `ClaimsIncomplete` | 발급 측 또는 클라이언트 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    Configuration,
    MalformedCredential,
    Cryptographic,
    SemanticMismatch,
    ClaimsIncomplete,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("auth mode is not set")]
    ModeNotSet,

    #[error("signing key is not set")]
    SigningKeyNotSet,

    #[error("verification key is not set")]
    VerificationKeyNotSet,

    /// 키가 존재하지만 해석할 수 없음 (PEM 손상 등)
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    #[error("authorization header is missing")]
    MissingHeader,

    #[error("invalid authorization scheme")]
    InvalidScheme,

    #[error("token is empty")]
    EmptyToken,

    #[error("token verification failed: {0}")]
    Verification(String),

    #[error("token has expired")]
    Expired,

    #[error("token signing failed: {0}")]
    Signing(String),

    #[error("token type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: TokenType,
        actual: TokenType,
    },

    #[error("token claims are incomplete: {0}")]
    IncompleteClaims(String),
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            AuthError::ModeNotSet
            | AuthError::SigningKeyNotSet
            | AuthError::VerificationKeyNotSet
            | AuthError::InvalidKey(_) => AuthErrorKind::Configuration,
            AuthError::MissingHeader | AuthError::InvalidScheme | AuthError::EmptyToken => {
                AuthErrorKind::MalformedCredential
            }
            AuthError::Verification(_) | AuthError::Expired | AuthError::Signing(_) => {
                AuthErrorKind::Cryptographic
            }
            AuthError::TypeMismatch { .. } => AuthErrorKind::SemanticMismatch,
            AuthError::IncompleteClaims(_) => AuthErrorKind::ClaimsIncomplete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(AuthError::ModeNotSet.kind(), AuthErrorKind::Configuration);
        assert_eq!(AuthError::VerificationKeyNotSet.kind(), AuthErrorKind::Configuration);
        assert_eq!(AuthError::InvalidScheme.kind(), AuthErrorKind::MalformedCredential);
        assert_eq!(AuthError::EmptyToken.kind(), AuthErrorKind::MalformedCredential);
        assert_eq!(AuthError::Expired.kind(), AuthErrorKind::Cryptographic);
        assert_eq!(
            AuthError::TypeMismatch {
                expected: TokenType::Access,
                actual: TokenType::Refresh,
            }
            .kind(),
            AuthErrorKind::SemanticMismatch
        );
        assert_eq!(
            AuthError::IncompleteClaims("userId".to_string()).kind(),
            AuthErrorKind::ClaimsIncomplete
        );
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = AuthError::TypeMismatch {
            expected: TokenType::Access,
            actual: TokenType::Refresh,
        };

        assert_eq!(err.to_string(), "token type mismatch: expected access, got refresh");
    }
}
