//! 사용자 레코드 REST 서비스
//!
//! 메모리 기반 사용자 레코드 저장소 위에서 생성, 조회, 교체, 부분 수정, 삭제,
//! 생년월일 검색, 페이지 단위 목록을 제공하는 HTTP 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 이메일 유일성과 최소 나이 규칙을 지키는 CRUD
//! - **검색**: 생년월일 구간(양 끝 제외) 검색
//! - **페이지네이션**: offset/limit 기반 목록과 next/prev 링크
//! - **에러 봉투**: 모든 실패를 `{"errors": [{"status", "detail"}]}`로 응답
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 필드 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 순서 있는 사용자 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use users_rest_service::config::UsersConfig;
//! use users_rest_service::services::users::UserService;
//!
//! let service = UserService::in_memory(UsersConfig::default());
//! let user = service.create(Some(request))?;
//! assert_eq!(service.get_one(user.id)?, user);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
