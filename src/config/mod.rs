//! # Configuration Module
//!
//! 서비스 설정을 환경 변수 기반으로 중앙집중식 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, Rate Limiting 설정
//! - [`users_config`] - 최소 연령 및 페이지네이션 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, UsersConfig};
//!
//! let env = Environment::current();
//! let bind_address = ServerConfig::bind_address();
//! let users_config = UsersConfig::from_env();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 사용자 규칙
//! export USERS_MIN_AGE="18"
//! export PAGINATION_DEFAULT_OFFSET="0"
//! export PAGINATION_DEFAULT_LIMIT="10"
//! export PAGINATION_MAX_LIMIT="50"
//! ```

pub mod data_config;
pub mod users_config;

pub use data_config::*;
pub use users_config::*;
