//! 비즈니스 로직을 담당하는 서비스 계층
//!
//! 서비스는 `web::Data`로 주입되며, 저장소는 `Arc<dyn UserStore>`로 받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::web;
//! use crate::repositories::users::InMemoryUserStore;
//! use crate::services::users::UserService;
//!
//! let service = web::Data::new(UserService::new(Arc::new(InMemoryUserStore::new())));
//! ```

pub mod links;
pub mod users;
