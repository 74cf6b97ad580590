//! 라이선스 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 토큰 키 자료를 로드하고 저장소(MongoDB 또는 메모리)를 선택한 뒤
//! Bearer 토큰으로 보호되는 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use license_service::config::{
    DatabaseBackend, DatabaseConfig, KeyMaterial, PasswordConfig, RateLimitConfig, ServerConfig,
};
use license_service::db::Database;
use license_service::repositories::licenses::{
    InMemoryLicenseRepository, LicenseRepository, MongoLicenseRepository,
};
use license_service::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserRepository,
};
use license_service::routes::configure_all_routes;
use license_service::services::auth::TokenService;
use license_service::services::licenses::LicenseService;
use license_service::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 라이선스 서비스 시작중...");

    let server_config = ServerConfig::from_env().map_err(io::Error::other)?;
    let database_config = DatabaseConfig::from_env().map_err(io::Error::other)?;

    // 알 수 없는 AUTH_MODE나 잘못된 PEM은 시작 단계에서 실패
    let key_material = KeyMaterial::from_env().map_err(io::Error::other)?;
    let token_service = TokenService::new(key_material).map_err(io::Error::other)?;

    let (user_repo, license_repo) = initialize_repositories(&database_config).await?;

    let user_service = web::Data::new(UserService::new(user_repo, PasswordConfig::bcrypt_cost()));
    let license_service = web::Data::new(LicenseService::new(license_repo));
    let token_service = web::Data::new(token_service);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(token_service.clone())
            .app_data(user_service.clone())
            .app_data(license_service.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 설정된 백엔드에 맞는 저장소를 생성합니다
///
/// MongoDB 백엔드는 연결 확인 후 유니크 인덱스를 생성합니다.
/// 연결이나 인덱스 생성에 실패하면 서버를 시작하지 않습니다.
async fn initialize_repositories(
    config: &DatabaseConfig,
) -> io::Result<(Arc<dyn UserRepository>, Arc<dyn LicenseRepository>)> {
    match config.backend {
        DatabaseBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(config).await.map_err(|e| {
                error!("MongoDB 연결 실패: {}", e);
                io::Error::other(e)
            })?;

            info!("✅ MongoDB 연결 성공: {}", database.database_name());

            let users = MongoUserRepository::new(&database);
            users.create_indexes().await.map_err(io::Error::other)?;

            let licenses = MongoLicenseRepository::new(&database);
            licenses.create_indexes().await.map_err(io::Error::other)?;

            Ok((Arc::new(users), Arc::new(licenses)))
        }
        DatabaseBackend::Memory => {
            warn!("메모리 저장소를 사용합니다. 재시작하면 데이터가 사라집니다");
            Ok((
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryLicenseRepository::new()),
            ))
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=license_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
