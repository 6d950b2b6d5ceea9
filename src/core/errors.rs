//! # Application Error Handling System
//!
//! 사용자 리소스 서비스를 위한 통합 에러 처리 시스템입니다.
//! 모든 연산은 `AppResult<T>`를 반환하며, 실패 경로는 항상 타입이 지정된
//! HTTP 응답으로 변환됩니다. 어떤 에러도 프로세스를 중단시키지 않습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `InvalidIdentifier` | 400 Bad Request | 쓰기 경로의 잘못된 ID 형식 |
//! | `MissingPayload` | 400 Bad Request | 요청 본문이 `null` 또는 누락 |
//! | `MalformedPayload` | 400 Bad Request | 본문/쿼리 역직렬화 실패 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ValidationFailed` | 422 Unprocessable Entity | 필드 검증 실패, 패치 적용 실패 |
//! | `Unhandled` | 500 Internal Server Error | 협력 객체의 기타 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "Validation failed: login: 로그인은 영문자와 숫자만 사용할 수 있습니다",
//!   "details": {
//!     "login": ["로그인은 영문자와 숫자만 사용할 수 있습니다"]
//!   }
//! }
//! ```
//!
//! `details`는 `ValidationFailed`인 경우에만 포함됩니다.

use thiserror::Error;
use crate::core::validation::FieldErrors;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`로 전파하면 자동으로 HTTP 응답이 됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 라우트 식별자가 UUID 형식이 아님 (400)
    ///
    /// 쓰기 경로(PUT)에서만 클라이언트에게 노출됩니다.
    /// 읽기/삭제/패치 경로는 이 경우를 `NotFound`로 접습니다.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// 요청 본문이 `null`이거나 비어 있음 (400)
    #[error("Missing payload: {0}")]
    MissingPayload(String),

    /// 요청 본문 또는 쿼리 문자열을 역직렬화할 수 없음 (400)
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// 리소스 찾을 수 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 필드 단위 검증 실패 (422)
    ///
    /// 하나의 요청에서 누적된 모든 필드 에러를 한 번에 담습니다.
    #[error("Validation failed: {0}")]
    ValidationFailed(FieldErrors),

    /// 모델링되지 않은 내부 오류 (500)
    #[error("Internal server error: {0}")]
    Unhandled(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::InvalidIdentifier(_)
            | AppError::MissingPayload(_)
            | AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 기록하고, 클라이언트에는 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            log::error!("❌ 처리되지 않은 오류: {}", self);
        }

        let body = match self {
            AppError::ValidationFailed(errors) => serde_json::json!({
                "error": self.to_string(),
                "details": errors,
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `AppError::Unhandled`로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let url = req.url_for("get_user", [id.to_string()])
///     .context("사용자 URL 생성 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Unhandled(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::Unhandled(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_invalid_identifier_response() {
        let error = AppError::InvalidIdentifier("not-a-uuid".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_payload_response() {
        let error = AppError::MissingPayload("요청 본문이 없습니다".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_failed_response() {
        let mut errors = FieldErrors::new();
        errors.add("login", "invalid");
        let error = AppError::ValidationFailed(errors);

        assert_eq!(error.error_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unhandled_error_response() {
        let error = AppError::Unhandled("Something went wrong".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::Unhandled(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected Unhandled");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let ok: Result<u8, &str> = Ok(7);
        let value = ok.with_context(|| panic!("must not be evaluated")).unwrap();
        assert_eq!(value, 7);
    }
}
