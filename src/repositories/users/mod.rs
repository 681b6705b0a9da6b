//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](user_repo::UserStore) 인터페이스와 메모리 기반 구현체
//! [`InMemoryUserStore`](user_repo::InMemoryUserStore)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserStore, UserStore};
//!
//! let mut store = InMemoryUserStore::new();
//! store.insert(user)?;
//! let found = store.find_by_id(&id);
//! ```

pub mod user_repo;

pub use user_repo::{InMemoryUserStore, UserStore};
