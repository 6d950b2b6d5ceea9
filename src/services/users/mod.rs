//! 사용자 리소스 비즈니스 로직을 담당하는 서비스 모듈
//!
//! - [`user_service`] - 조회, 목록, 생성, 교체, 부분 수정, 삭제
//! - [`pagination_links`] - `X-Pagination` 메타데이터와 이전/다음 링크
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(store);
//! let user = service.get_user(&raw_id).await?;
//! ```

pub mod pagination_links;
pub mod user_service;

pub use user_service::{Created, UpsertOutcome, UserPage, UserService};
