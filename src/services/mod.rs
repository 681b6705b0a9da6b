//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 인스턴스를 직접 소유하며 전역 상태를 사용하지 않습니다.
//! HTTP 계층에는 `web::Data`로 주입됩니다.

pub mod users;
