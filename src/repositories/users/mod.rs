//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](user_repo::UserStore) trait과 프로세스 내 구현
//! [`InMemoryUserStore`](user_repo::InMemoryUserStore)를 제공합니다.

pub mod user_repo;

pub use user_repo::{InMemoryUserStore, UserStore};
