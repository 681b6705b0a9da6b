//! 도메인 엔티티 모듈
//!
//! 저장소에 보관되는 비즈니스 핵심 객체들입니다.

pub mod users;

pub use users::User;
