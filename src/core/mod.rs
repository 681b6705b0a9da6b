//! # Core Module
//!
//! 서비스 전역에서 공유하는 기반 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 비즈니스 규칙 위반과 내부 오류를 표현하는 단일 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드와 에러 봉투 생성
//! - **자동 변환**: `validator` 검증 실패 → `InvalidInput`
//!
//! ## 에러 처리
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! // 서비스 메서드에서 타입이 지정된 실패 반환
//! fn delete(&self, id: Uuid) -> Result<(), AppError> {
//!     let index = store.position_by_id(&id)
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;
//!     store.remove_at(index)?;
//!     Ok(())
//! }
//!
//! // 핸들러에서는 `?`만으로 HTTP 응답으로 변환됨
//! async fn delete_user(path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
//!     service.delete(path.into_inner())?;
//!     Ok(HttpResponse::Ok().finish())
//! }
//! ```

pub mod errors;

pub use errors::*;
