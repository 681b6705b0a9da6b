//! # Domain Layer Module
//!
//! 비즈니스 객체와 API 계약을 정의하는 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장소에 보관되는 사용자 레코드
//! ├── DTOs      - 요청/응답 봉투와 필드 검증
//! └── Models    - 페이지네이션 결과 값 객체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! `User` 하나로 구성됩니다. 식별자는 저장소가 부여하며,
//! 이메일은 전체 레코드에서 유일해야 합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/   - DataRequest<T>, UserRequest, PatchUserRequest
//!     └── response/  - DataResponse<T>, PageResponse<T>, ErrorResponse
//! ```
//!
//! ### [`models`] - 값 객체
//!
//! `PaginationInfo`, `PaginationLinks`, `Page<T>`, `PageResult<T>`와
//! 페이지 링크 생성 함수 `page_url`을 제공합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::User;
pub use dto::users::{
    ApiError, DataRequest, DataResponse, ErrorResponse, ListResponse, PageResponse,
    PatchUserRequest, UserRequest,
};
pub use models::*;
