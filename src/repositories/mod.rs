//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 `Arc<dyn UserStore>`로 저장소를 주입받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
//! ```

pub mod users;
