//! # Application Error Handling System
//!
//! 사용자 관리 서비스 전역에서 사용하는 에러 타입입니다.
//! 비즈니스 로직은 타입이 지정된 실패(`AppError`)만 반환하고,
//! HTTP 상태 코드로의 변환은 `actix_web::ResponseError` 구현이 전담합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `InvalidInput` | 400 Bad Request | 누락된 페이로드, 잘못된 날짜 범위, 필드 검증 실패 |
//! | `NotFound` | 404 Not Found | 해당 ID의 사용자 없음 |
//! | `EmailConflict` | 400 Bad Request | 다른 사용자가 이미 사용 중인 이메일 |
//! | `AgeNotEligible` | 403 Forbidden | 최소 가입 연령 미달 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! 모든 에러는 동일한 봉투(envelope)로 직렬화됩니다.
//!
//! ```json
//! { "errors": [ { "status": 404, "detail": "사용자를 찾을 수 없습니다" } ] }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::dto::users::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
///
/// 메시지는 그대로 클라이언트의 `detail` 필드로 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 잘못되었거나 누락된 입력 (400 Bad Request)
    #[error("{0}")]
    InvalidInput(String),

    /// 참조한 리소스가 존재하지 않음 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 다른 사용자와 이메일이 충돌함 (400 Bad Request)
    ///
    /// 상태 코드는 `InvalidInput`과 같지만 서비스 계층에서는 별도 종류로 구분됩니다.
    #[error("{0}")]
    EmailConflict(String),

    /// 최소 연령 미달 (403 Forbidden)
    ///
    /// 일반적인 입력 오류보다 심각도가 높은 별도 분류입니다.
    #[error("{0}")]
    AgeNotEligible(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 원본 메시지를 변환하지 않고 그대로 전달합니다.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 종류에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmailConflict(_) => StatusCode::BAD_REQUEST,
            AppError::AgeNotEligible(_) => StatusCode::FORBIDDEN,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// 에러를 `{"errors":[{"status", "detail"}]}` 형식의 JSON 응답으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        }

        HttpResponse::build(status).json(ErrorResponse::single(status.as_u16(), self.to_string()))
    }
}

/// `validator` 검증 실패를 `InvalidInput`으로 변환합니다.
///
/// 필드 이름 순으로 정렬한 뒤 첫 번째 메시지만 사용합니다.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let message = fields
            .into_iter()
            .flat_map(|(field, errs)| errs.iter().map(move |e| (field, e)))
            .next()
            .map(|(field, e)| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} 필드가 유효하지 않습니다", field),
            })
            .unwrap_or_else(|| errors.to_string());

        AppError::InvalidInput(message)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
