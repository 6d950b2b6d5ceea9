//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{Gender, User};
//!
//! let user = User::new("neo".to_string(), "Thomas Anderson".to_string(), Gender::Male, 37);
//! assert!(user.id.is_none()); // 저장소가 할당
//! ```

pub mod user;

pub use user::{Gender, User};
