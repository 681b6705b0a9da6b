//! 사용자 레코드 REST 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 사용자 서비스를 초기화합니다.
//! 사용자 레코드는 메모리에 보관되며 프로세스가 종료되면 사라집니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use users_rest_service::config::{Environment, RateLimitConfig, ServerConfig, UsersConfig};
use users_rest_service::routes::configure_all_routes;
use users_rest_service::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중... (환경: {:?})", Environment::current());

    // 서비스 초기화
    let users_config = UsersConfig::from_env();
    info!("사용자 설정 로드됨: {:?}", users_config);

    let user_service = web::Data::new(UserService::in_memory(users_config));

    info!("✅ 사용자 서비스가 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
///
/// # Examples
///
/// ```rust,ignore
/// // 기본값으로 서버는 127.0.0.1:8080에서 실행됩니다
/// // Health check: http://127.0.0.1:8080/health
/// // API 엔드포인트: http://127.0.0.1:8080/api/v1/users
/// ```
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/v1/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            error!("Rate Limiting 설정이 올바르지 않습니다: {:?}", rate_limit_config);
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "초당 요청 수와 버스트 허용량은 0보다 커야 합니다",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 stderr로 출력합니다.
    eprintln!("Current profile: {}", profile);

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
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
///
/// # Examples
///
/// ```bash
/// # 서비스 계층만 debug
/// RUST_LOG=users_rest_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
