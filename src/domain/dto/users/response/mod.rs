//! # 사용자 관련 응답 DTO 모듈
//!
//! 서비스 결과를 클라이언트에게 전달할 JSON 구조로 변환합니다.
//!
//! | 타입 | JSON | 사용처 |
//! |------|------|--------|
//! | `DataResponse<T>` | `{"data": [...]}` | 단건 조회, 생성, 검색 |
//! | `PageResponse<T>` | `{"data", "pagination", "links"}` | 목록 조회 |
//! | `ListResponse<T>` | 위 둘 중 하나 | 목록 조회 (범위 밖이면 빈 `data`) |
//! | `ErrorResponse` | `{"errors": [{"status", "detail"}]}` | 모든 에러 |

pub mod user_response;

pub use user_response::{ApiError, DataResponse, ErrorResponse, ListResponse, PageResponse};
