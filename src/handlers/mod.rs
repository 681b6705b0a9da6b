//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 파싱과 필드 검증만 담당하고, 비즈니스 규칙은 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 규칙                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 순서 있는 사용자 저장소           ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 서비스 주입
//!
//! 서비스 인스턴스는 `main`에서 한 번 생성되어 `web::Data`로 공유됩니다.
//!
//! ```rust,ignore
//! #[get("/{user_id}")]
//! pub async fn get_user(
//!     user_id: web::Path<Uuid>,
//!     service: web::Data<UserService>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = service.get_one(user_id.into_inner())?;
//!     Ok(HttpResponse::Ok().json(DataResponse::single(user)))
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 추출기(Json/Query/Path)
//! 실패 역시 아래 에러 핸들러를 통해 `AppError::InvalidInput`으로 변환되어
//! 동일한 `{"errors": [...]}` 형식으로 응답합니다.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};

use crate::core::errors::AppError;

pub mod users;

/// 잘못된 JSON 본문을 400 에러 응답으로 변환합니다.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패 ({}): {}", req.path(), err);
    AppError::InvalidInput(format!("요청 본문을 해석할 수 없습니다: {}", err)).into()
}

/// 잘못된 쿼리 문자열을 400 에러 응답으로 변환합니다.
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("쿼리 파싱 실패 ({}): {}", req.path(), err);
    AppError::InvalidInput(format!("쿼리 파라미터가 올바르지 않습니다: {}", err)).into()
}

/// 잘못된 경로 파라미터를 400 에러 응답으로 변환합니다.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("경로 파라미터 파싱 실패 ({}): {}", req.path(), err);
    AppError::InvalidInput(format!("경로 파라미터가 올바르지 않습니다: {}", err)).into()
}
