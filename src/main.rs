//! 사용자 리소스 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 사용자 서비스를 초기화합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_resource_service::config::{Environment, RateLimitConfig, ServerConfig};
use user_resource_service::handlers::users::PAGINATION_HEADER;
use user_resource_service::repositories::users::InMemoryUserStore;
use user_resource_service::routes::configure_all_routes;
use user_resource_service::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 리소스 서비스 시작중...");

    let user_service = web::Data::new(UserService::new(Arc::new(InMemoryUserStore::new())));
    info!("✅ 사용자 서비스 초기화 완료 (In-Memory 저장소)");

    // HTTP 서버 시작
    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Arguments
///
/// * `user_service` - 모든 워커가 공유하는 사용자 서비스
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/v1/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            error!("Rate Limiting 설정이 올바르지 않습니다: {:?}", rate_limit_config);
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid rate limit configuration")
        })?;

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
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod".to_string()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev".to_string()),
        _ => dotenv().map(|path| path.display().to_string()),
    };

    match result {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `ENVIRONMENT`에 따른 기본 필터를 사용합니다.
///
/// # Examples
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 특정 모듈만 debug
/// RUST_LOG=user_resource_service::services=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
    info!("실행 환경: {:?}", environment);
}

/// CORS 설정을 구성합니다
///
/// 목록 응답의 `X-Pagination`과 생성 응답의 `Location`을 브라우저에서 읽을 수 있도록 노출합니다.
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])

        // 클라이언트가 읽을 수 있는 응답 헤더
        .expose_headers(vec![header::LOCATION.as_str(), PAGINATION_HEADER])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
