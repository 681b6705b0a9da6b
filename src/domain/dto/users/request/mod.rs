//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 필드 단위 제약을 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 이메일, 이름 길이, 생년월일, 전화번호 패턴 (`validator`)
//! 3. **비즈니스 검증**: 연령 제한, 이메일 중복 (서비스 계층)
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! `AppError::InvalidInput`으로 변환되어 400 Bad Request로 응답됩니다.

pub mod user_request;

pub use user_request::{DataRequest, PatchUserRequest, UserRequest};
