//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 보안 관련 설정을 관리합니다.

use std::env;
use std::str::FromStr;
use log::error;
use super::ConfigError;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());
        Self::from_name(&raw)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 정수이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        Self::bcrypt_cost_from(env::var("BCRYPT_COST").ok().as_deref(), &Environment::current())
    }

    pub fn bcrypt_cost_from(raw: Option<&str>, environment: &Environment) -> u32 {
        raw.and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(environment))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 3000;

    /// `HOST`, `PORT` 환경 변수에서 바인딩 주소를 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_HOST.to_string());

        let port = match lookup("PORT").filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => Self::DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 영속성 계층 구현 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    /// MongoDB 컬렉션 사용
    MongoDb,
    /// 프로세스 메모리 (재시작 시 소실)
    Memory,
}

impl FromStr for DatabaseBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(DatabaseBackend::MongoDb),
            "memory" | "in-memory" => Ok(DatabaseBackend::Memory),
            other => Err(ConfigError::InvalidValue {
                name: "DATABASE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

/// 데이터베이스 연결 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub backend: DatabaseBackend,
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub const DEFAULT_URI: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_DATABASE_NAME: &'static str = "license_service_dev";

    /// `DATABASE_BACKEND`, `MONGODB_URI`, `DATABASE_NAME` 환경 변수를 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("DATABASE_BACKEND").filter(|b| !b.trim().is_empty()) {
            Some(raw) => raw.parse()?,
            None => DatabaseBackend::MongoDb,
        };

        Ok(Self {
            backend,
            uri: lookup("MONGODB_URI").unwrap_or_else(|| Self::DEFAULT_URI.to_string()),
            database_name: lookup("DATABASE_NAME")
                .unwrap_or_else(|| Self::DEFAULT_DATABASE_NAME.to_string()),
        })
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱 실패 시 에러 로그를 남기고 기본값을 사용합니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let per_second = lookup("RATE_LIMIT_PER_SECOND")
            .map(|raw| {
                raw.parse::<u64>().unwrap_or_else(|e| {
                    error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                    100
                })
            })
            .unwrap_or(100);

        let burst_size = lookup("RATE_LIMIT_BURST_SIZE")
            .map(|raw| {
                raw.parse::<u32>().unwrap_or_else(|e| {
                    error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                    200
                })
            })
            .unwrap_or(200);

        Self { per_second, burst_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_bcrypt_cost_override_range() {
        let prod = Environment::Production;
        assert_eq!(PasswordConfig::bcrypt_cost_from(Some("8"), &prod), 8);
        assert_eq!(PasswordConfig::bcrypt_cost_from(Some("3"), &prod), 12);
        assert_eq!(PasswordConfig::bcrypt_cost_from(Some("16"), &prod), 12);
        assert_eq!(PasswordConfig::bcrypt_cost_from(Some("abc"), &prod), 12);
        assert_eq!(PasswordConfig::bcrypt_cost_from(None, &Environment::Test), 4);
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_server_config_rejects_bad_port() {
        let result = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")]));

        assert!(matches!(result, Err(ConfigError::InvalidValue { name: "PORT", .. })));
    }

    #[test]
    fn test_database_config_backend() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[("DATABASE_BACKEND", "memory")])).unwrap();
        assert_eq!(config.backend, DatabaseBackend::Memory);

        let config = DatabaseConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.backend, DatabaseBackend::MongoDb);
        assert_eq!(config.uri, DatabaseConfig::DEFAULT_URI);

        assert!(DatabaseConfig::from_lookup(lookup_from(&[("DATABASE_BACKEND", "sqlite")])).is_err());
    }

    #[test]
    fn test_rate_limit_falls_back_on_parse_error() {
        let config = RateLimitConfig::from_lookup(lookup_from(&[
            ("RATE_LIMIT_PER_SECOND", "fast"),
            ("RATE_LIMIT_BURST_SIZE", "50"),
        ]));

        assert_eq!(config, RateLimitConfig { per_second: 100, burst_size: 50 });
    }
}
