//! 토큰 발급/검증 서비스 (Token Authority)
//!
//! 사용자 신원 정보를 서명된 JWT(JWS compact)로 발급하고, 들어온 토큰을
//! 검증하여 클레임을 복원합니다. 토큰에는 용도(`access`/`refresh`)와 만료 시간이
//! 서명된 페이로드 안에 들어갑니다.
//!
//! # 서명 방식
//!
//! | `AuthMode` | 알고리즘 | 서명 키 | 검증 키 |
//! |------------|----------|---------|---------|
//! | `Asymmetric` | RS256 | RSA 개인키 PEM | RSA 공개키 PEM |
//! | `Symmetric` | HS256 | 공유 비밀 | 공유 비밀 |
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::config::KeyMaterial;
//! use crate::domain::models::token::{Identity, TokenType};
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::new(KeyMaterial::from_env()?)?;
//!
//! let identity = Identity::new("u1", "alice", vec!["user".to_string()]);
//! let pair = token_service.issue_pair(&identity).await?;
//!
//! let claims = token_service.verify(&pair.access_token, TokenType::Access)?;
//! assert_eq!(claims.username, "alice");
//! ```

use std::sync::Arc;
use actix_web::rt::task::{self, JoinHandle};
use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Duration, Utc};
use futures_util::future::try_join;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rsa::RsaPublicKey;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use sha2::{Digest, Sha256};
use crate::config::{AuthMode, KeyMaterial};
use crate::domain::models::token::{Identity, TokenClaims, TokenPair, TokenType};
use crate::errors::AuthError;

/// 액세스 토큰 유효 기간 (12시간, 초 단위)
pub const ACCESS_TOKEN_VALIDITY_SECS: i64 = 12 * 60 * 60;

/// 리프레시 토큰 유효 기간 (30일, 초 단위)
pub const REFRESH_TOKEN_VALIDITY_SECS: i64 = 30 * 24 * 60 * 60;

/// 토큰 발급/검증 서비스
///
/// 생성 시점에 키 자료를 해석해 두고 이후에는 읽기 전용으로 사용합니다.
/// 내부 상태는 모두 `Arc`이므로 복제 비용이 작고, 여러 워커와
/// 블로킹 태스크에서 동시에 사용할 수 있습니다.
#[derive(Clone)]
pub struct TokenService {
    material: Arc<KeyMaterial>,
    encoding_key: Option<Arc<EncodingKey>>,
    decoding_key: Option<Arc<DecodingKey>>,
    key_id: Option<String>,
    jwks: Option<Arc<serde_json::Value>>,
}

impl TokenService {
    /// 키 자료로 서비스를 생성합니다.
    ///
    /// 비어 있는 모드/키는 그대로 두었다가 첫 발급·검증 시 에러로 보고합니다.
    /// 키가 존재하지만 해석할 수 없는 경우에만 여기서 `InvalidKey`를 반환합니다.
    pub fn new(material: KeyMaterial) -> Result<Self, AuthError> {
        let mut key_id = material.key_id().map(str::to_string);

        let (encoding_key, decoding_key, jwks) = match material.mode() {
            None => (None, None, None),
            Some(AuthMode::Symmetric) => (
                material
                    .signing_key()
                    .map(|secret| EncodingKey::from_secret(secret.as_bytes())),
                material
                    .verification_key()
                    .map(|secret| DecodingKey::from_secret(secret.as_bytes())),
                None,
            ),
            Some(AuthMode::Asymmetric) => {
                let encoding_key = material
                    .signing_key()
                    .map(|pem| EncodingKey::from_rsa_pem(pem.as_bytes()))
                    .transpose()
                    .map_err(|e| AuthError::InvalidKey(format!("signing key: {}", e)))?;

                match material.verification_key() {
                    Some(pem) => {
                        let decoding_key = DecodingKey::from_rsa_pem(pem.as_bytes())
                            .map_err(|e| AuthError::InvalidKey(format!("verification key: {}", e)))?;
                        let (n, e) = rsa_components(pem)?;
                        let kid = key_id.get_or_insert_with(|| jwk_thumbprint(&n, &e)).clone();

                        let jwks = serde_json::json!({
                            "keys": [{
                                "kty": "RSA",
                                "use": "sig",
                                "alg": "RS256",
                                "kid": kid,
                                "n": n,
                                "e": e
                            }]
                        });

                        (encoding_key, Some(decoding_key), Some(Arc::new(jwks)))
                    }
                    None => (encoding_key, None, None),
                }
            }
        };

        log::info!(
            "🔐 TokenService 초기화: mode={}, issuer={}, signing={}, verification={}",
            material.mode().map(|m| m.as_str()).unwrap_or("unset"),
            material.issuer(),
            encoding_key.is_some(),
            decoding_key.is_some(),
        );

        Ok(Self {
            material: Arc::new(material),
            encoding_key: encoding_key.map(Arc::new),
            decoding_key: decoding_key.map(Arc::new),
            key_id,
            jwks,
        })
    }

    pub fn issuer(&self) -> &str {
        self.material.issuer()
    }

    /// 신원 정보를 지정한 용도와 유효 기간으로 서명합니다.
    ///
    /// 검사 순서: 모드 → 서명 키 → `userId`/`username` → 유효 기간.
    pub fn issue(
        &self,
        identity: &Identity,
        token_type: TokenType,
        validity: Duration,
    ) -> Result<String, AuthError> {
        self.issue_at(identity, token_type, validity, Utc::now())
    }

    pub(crate) fn issue_at(
        &self,
        identity: &Identity,
        token_type: TokenType,
        validity: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let mode = self.material.mode().ok_or(AuthError::ModeNotSet)?;
        let encoding_key = self.encoding_key.as_ref().ok_or(AuthError::SigningKeyNotSet)?;

        if let Some(field) = identity.missing_field() {
            return Err(AuthError::IncompleteClaims(format!("{} is required", field)));
        }
        // 초 단위로 잘린 뒤에도 exp > iat 이어야 함
        let iat = now.timestamp();
        let exp = (now + validity).timestamp();
        if exp <= iat {
            return Err(AuthError::Signing("validity must be at least one second".to_string()));
        }

        let claims = TokenClaims {
            user_id: identity.user_id.clone(),
            username: identity.username.clone(),
            roles: identity.roles.clone(),
            token_type,
            iss: self.material.issuer().to_string(),
            iat,
            exp,
        };

        let mut header = Header::new(mode.algorithm());
        header.kid = self.key_id.clone();

        encode(&header, &claims, encoding_key).map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// 토큰을 검증하고 클레임을 복원합니다.
    ///
    /// 서명, 알고리즘, 만료(leeway 0), 발급자를 확인한 뒤
    /// 토큰 용도가 `expected_type`과 같은지 확인합니다.
    pub fn verify(&self, token: &str, expected_type: TokenType) -> Result<TokenClaims, AuthError> {
        let mode = self.material.mode().ok_or(AuthError::ModeNotSet)?;
        let decoding_key = self.decoding_key.as_ref().ok_or(AuthError::VerificationKeyNotSet)?;

        if token.trim().is_empty() {
            return Err(AuthError::EmptyToken);
        }

        let mut validation = Validation::new(mode.algorithm());
        validation.leeway = 0;
        validation.set_issuer(&[self.material.issuer()]);
        validation.set_required_spec_claims(&["exp", "iss"]);

        let claims = decode::<TokenClaims>(token, decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => {
                    AuthError::IncompleteClaims(e.to_string())
                }
                _ => AuthError::Verification(e.to_string()),
            })?;

        if let Some(field) = claims.identity().missing_field() {
            return Err(AuthError::IncompleteClaims(format!("{} is empty", field)));
        }

        if claims.token_type != expected_type {
            return Err(AuthError::TypeMismatch {
                expected: expected_type,
                actual: claims.token_type,
            });
        }

        Ok(claims)
    }

    /// 액세스(12시간)/리프레시(30일) 토큰 쌍을 발급합니다.
    ///
    /// 두 서명은 블로킹 풀에서 동시에 실행되며, 하나라도 실패하면 전체가 실패합니다.
    pub async fn issue_pair(&self, identity: &Identity) -> Result<TokenPair, AuthError> {
        let access = self.spawn_issue(identity, TokenType::Access, ACCESS_TOKEN_VALIDITY_SECS);
        let refresh = self.spawn_issue(identity, TokenType::Refresh, REFRESH_TOKEN_VALIDITY_SECS);

        let (access_token, refresh_token) =
            try_join(join_signing(access), join_signing(refresh)).await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: ACCESS_TOKEN_VALIDITY_SECS,
        })
    }

    fn spawn_issue(
        &self,
        identity: &Identity,
        token_type: TokenType,
        validity_secs: i64,
    ) -> JoinHandle<Result<String, AuthError>> {
        let service = self.clone();
        let identity = identity.clone();
        task::spawn_blocking(move || {
            service.issue(&identity, token_type, Duration::seconds(validity_secs))
        })
    }

    /// 검증용 공개키를 JWKS 형식으로 반환합니다.
    ///
    /// 비대칭 모드에서 검증 키가 설정된 경우에만 `Some`입니다.
    pub fn jwks(&self) -> Option<&serde_json::Value> {
        self.jwks.as_deref()
    }
}

async fn join_signing(handle: JoinHandle<Result<String, AuthError>>) -> Result<String, AuthError> {
    handle
        .await
        .map_err(|e| AuthError::Signing(format!("signing task failed: {}", e)))?
}

/// PEM 공개키에서 JWK `n`, `e` (base64url) 값을 추출
fn rsa_components(pem: &str) -> Result<(String, String), AuthError> {
    let public_key = RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| AuthError::InvalidKey(format!("verification key: {}", e)))?;

    let n = general_purpose::URL_SAFE_NO_PAD.encode(public_key.n().to_bytes_be());
    let e = general_purpose::URL_SAFE_NO_PAD.encode(public_key.e().to_bytes_be());
    Ok((n, e))
}

/// RFC 7638 JWK thumbprint
fn jwk_thumbprint(n: &str, e: &str) -> String {
    let canonical = format!(r#"{{"e":"{}","kty":"RSA","n":"{}"}}"#, e, n);
    general_purpose::URL_SAFE_NO_PAD.encode(Sha256::digest(canonical.as_bytes()))
}
