//! # HTTP Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층에 위임하고 결과를 응답으로 바꾸는 핸들러들입니다.
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현이 JSON 응답으로 변환합니다.
//!
//! ## 모듈 구성
//!
//! - [`users`] - 사용자 리소스 (`/api/v1/users`)

pub mod users;
