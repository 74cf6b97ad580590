//! 단위 테스트 공용 헬퍼

use std::sync::Arc;
use once_cell::sync::Lazy;
use rsa::RsaPrivateKey;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::EncodePublicKey;
use crate::config::KeyMaterial;
use crate::domain::models::token::Identity;
use crate::repositories::licenses::InMemoryLicenseRepository;
use crate::repositories::users::InMemoryUserRepository;
use crate::services::auth::TokenService;
use crate::services::licenses::LicenseService;
use crate::services::users::UserService;

pub const TEST_SECRET: &str = "test-shared-secret-with-enough-entropy";
pub const TEST_ISSUER: &str = "license-service-test";

/// 테스트용 bcrypt cost (최소값)
pub const TEST_BCRYPT_COST: u32 = 4;

static RSA_TEST_KEYS: Lazy<(String, String)> = Lazy::new(|| {
    let private_key = RsaPrivateKey::new(&mut rsa::rand_core::OsRng, 2048)
        .expect("RSA 테스트 키 생성 실패");
    let private_pem = private_key
        .to_pkcs1_pem(rsa::pkcs1::LineEnding::LF)
        .expect("개인키 PEM 인코딩 실패")
        .to_string();
    let public_pem = private_key
        .to_public_key()
        .to_public_key_pem(rsa::pkcs8::LineEnding::LF)
        .expect("공개키 PEM 인코딩 실패");
    (private_pem, public_pem)
});

/// (PKCS#1 개인키 PEM, SPKI 공개키 PEM)
pub fn rsa_test_keys() -> &'static (String, String) {
    &RSA_TEST_KEYS
}

pub fn symmetric_token_service() -> TokenService {
    TokenService::new(KeyMaterial::symmetric(TEST_SECRET, TEST_ISSUER))
        .expect("HS256 TokenService 생성 실패")
}

pub fn alice() -> Identity {
    Identity::new("u1", "alice", vec!["user".to_string()])
}

pub fn user_service() -> UserService {
    UserService::new(Arc::new(InMemoryUserRepository::new()), TEST_BCRYPT_COST)
}

pub fn license_service() -> LicenseService {
    LicenseService::new(Arc::new(InMemoryLicenseRepository::new()))
}
