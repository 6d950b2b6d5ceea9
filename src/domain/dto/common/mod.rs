//! 여러 리소스가 공유하는 DTO

pub mod pagination;

pub use pagination::{PageQuery, PaginationMetadata};
