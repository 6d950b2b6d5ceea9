//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 사용자 리소스를 Rust 구조체로 표현
//! - **타입 안전성**: 컴파일 타임에 데이터 일관성 보장
//! - **직렬화/역직렬화**: `serde`를 통한 변환 지원
//!
//! ## Entity vs DTO
//!
//! 엔티티는 내부 전용 필드(`created_at`, `updated_at`)를 포함합니다.
//! 외부로는 항상 [`crate::domain::dto::users::response::UserResponse`]로
//! 투영되어 나가며, 엔티티 자체가 응답 본문에 실리지 않습니다.
//!
//! ```text
//! CreateUserRequest ──┐
//! UpdateUserRequest ──┼──▶ User (entity) ──▶ UserResponse
//!                     │        │
//!                     └────────┘ PATCH: User → UpdateUserRequest → User
//! ```

pub mod users;
