//! # Domain Layer Module
//!
//! 사용자 리소스의 도메인 타입을 모아 둔 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - User 엔티티, Gender
//! ├── dto       - 요청/응답 DTO, 패치 연산, 페이지네이션 헤더
//! └── models    - PageWindow, Page<T>
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories)
//! ```
//!
//! 엔티티 ↔ DTO 변환은 `From` 구현과 `User::from_create`, `User::from_update`,
//! `User::merge_view`로 이루어집니다.

pub mod dto;
pub mod entities;
pub mod models;
