//! 데이터 전송 객체 (DTO)
//!
//! HTTP 경계에서 주고받는 JSON 구조를 정의합니다.
//! 모든 요청과 응답은 `data` 봉투로 감싸며, 에러는 `errors` 봉투를 사용합니다.

pub mod users;

pub use users::*;
