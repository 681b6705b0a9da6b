//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(
//!     Uuid::new_v4(),
//!     "bob@gmail.com",
//!     "Bob",
//!     "Washington",
//!     NaiveDate::from_ymd_opt(1996, 6, 13).unwrap(),
//! )
//! .with_address("Main St. 1");
//! ```

pub mod user;

pub use user::User;
