//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 선택적 문자열 정리 및 serde 헬퍼

pub mod string_utils;
