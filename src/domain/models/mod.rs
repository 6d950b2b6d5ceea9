//! # Domain Models Module
//!
//! 엔티티와 구별되는 값 객체(Value Objects)를 정의합니다.
//!
//! ## Entities vs Models
//!
//! - **Entities** (`../entities/`): 고유 식별자와 생명주기를 가진 객체 (`User`)
//! - **Models** (`./`): 값 자체가 중요한 불변 객체 (`PageWindow`, `Page<T>`)

pub mod page;

pub use page::{Page, PageWindow};
