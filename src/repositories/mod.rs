//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 저장소 인터페이스에만 의존하므로,
//! 메모리 저장소를 영속 저장소로 바꿔도 비즈니스 규칙은 그대로 유지됩니다.

pub mod users;
