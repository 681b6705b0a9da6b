//! 도메인 모델 모듈
//!
//! 엔티티는 아니지만 서비스 계층이 결과를 표현하는 데 사용하는 값 객체들입니다.
//!
//! - [`pagination`] - 페이지 정보, 탐색 링크, 목록 조회 결과

pub mod pagination;

pub use pagination::*;
