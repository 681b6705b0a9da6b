//! API 라우트 설정 모듈
//!
//! 사용자 관리 API 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(UserService::in_memory(UsersConfig::from_env())))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 추출기 에러 핸들러를 함께 등록하여 잘못된 본문/쿼리/경로 파라미터도
/// 공통 에러 응답 형식으로 반환되도록 합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(handlers::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(handlers::path_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/users` - 페이지 단위 목록
/// - `GET /api/v1/users/search` - 생년월일 구간 검색
/// - `GET /api/v1/users/{userId}` - 단건 조회
/// - `POST /api/v1/users` - 사용자 생성
/// - `PUT /api/v1/users` - 사용자 전체 교체
/// - `PATCH /api/v1/users/{userId}` - 사용자 부분 수정
/// - `DELETE /api/v1/users/{userId}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"data":{"email":"user@example.com","firstName":"Jane","lastName":"Doe","birthDate":"1990-01-01"}}'
///
/// curl "http://localhost:8080/api/v1/users?offset=0&limit=10"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // `/search`는 `/{user_id}`보다 먼저 등록해야 합니다.
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::get_page)
            .service(handlers::users::find_by_birth_date)
            .service(handlers::users::get_user)
            .service(handlers::users::create_user)
            .service(handlers::users::replace_user)
            .service(handlers::users::patch_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "users_rest_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "storage": "In-Memory"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "storage": "In-Memory"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "users_rest_service");
    }
}
