//! 공통 유틸리티 함수 모듈
//!
//! 여러 계층에서 함께 쓰는 작은 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`id_utils`] - 라우트 식별자 해석
//! - [`string_utils`] - 로그인 ID 문자 규칙
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::id_utils::resolve_id;
//! use crate::utils::string_utils::is_alphanumeric;
//!
//! let id = resolve_id(&raw)?;
//! assert!(is_alphanumeric("neo"));
//! ```

pub mod id_utils;
pub mod string_utils;
