//! # Core Framework Module
//!
//! 서비스 전반에서 공유하는 에러 타입과 검증 에러 수집기를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 에러를 `AppError::Unhandled`로 변환
//!
//! ### [`validation`] - 요청 단위 검증 에러
//! - **FieldErrors**: 필드 이름 → 메시지 목록
//! - 요청마다 새로 생성되어 `&mut`로 전달되며, 요청 사이에 공유되지 않습니다

pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult, ErrorContext};
pub use validation::FieldErrors;
