//! 사용자 관리 서비스 모듈
//!
//! 사용자 레코드에 대한 비즈니스 규칙을 담당합니다.
//!
//! # Features
//!
//! - 연령 제한과 이메일 중복 검사를 거친 사용자 생성
//! - 식별자/이메일 충돌을 판정하는 교체 및 부분 수정
//! - 생년월일 구간 검색
//! - 이전/다음 링크를 포함한 페이지 단위 목록 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::in_memory(UsersConfig::from_env());
//! let user = service.create(Some(request))?;
//! let page = service.list(None, None, "http://localhost:8080/api/v1/users")?;
//! ```

pub mod user_service;

pub use user_service::{UpdateTarget, UserService, age_in_years, page_window, resolve_update_target};
