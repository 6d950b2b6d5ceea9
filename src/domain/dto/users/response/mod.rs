//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에게 안전하고 일관된 형태로 전달합니다.
//!
//! - **데이터 은닉**: 내부 전용 필드(`created_at`, `updated_at`)는 응답에서 제외
//! - **일관성**: 모든 응답 필드는 camelCase
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "6f1c1b7e-8a0d-4d4b-9c53-0b8f8f3f1c2a",
//!   "login": "neo",
//!   "name": "Thomas Anderson",
//!   "gender": "male",
//!   "age": 37
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
