//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 한곳에서 관리합니다.
//! 모든 설정은 `main`에서 한 번 읽어 명시적으로 각 서비스에 전달됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, Rate Limit 설정
//! - [`auth_config`] - 토큰 서명/검증 키 자료
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//!
//! # 저장소
//! export DATABASE_BACKEND="mongodb"   # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="license_service"
//!
//! # 인증 키
//! export AUTH_MODE="public"
//! export AUTH_PRIVATE_KEY_PATH="./secrets/auth_private_key.pem"
//! export AUTH_PUBLIC_KEY_PATH="./secrets/auth_public_key.pem"
//! export AUTH_ISSUER="license-service"
//!
//! # 선택
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

use thiserror::Error;

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

/// 설정 로딩 에러
///
/// 시작 시점에만 발생하며 프로세스 기동을 중단시킵니다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error("failed to read {name} from '{path}': {source}")]
    Io {
        name: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
}
