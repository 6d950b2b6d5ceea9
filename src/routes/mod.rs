//! # Routes Module
//!
//! 애플리케이션의 모든 라우트와 추출기 설정을 한곳에서 등록합니다.
//!
//! ```text
//! /health                 GET
//! /api/v1/users           GET, POST, OPTIONS
//! /api/v1/users/{id}      GET, HEAD, PUT, PATCH, DELETE
//! ```

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest};
use log::debug;
use serde_json::json;
use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// JSON 본문과 쿼리 문자열 추출 실패는 `AppError`로 바꾸어
/// 다른 에러와 같은 JSON 형식으로 응답합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(user_service))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 리소스 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/users/{id}` - 사용자 조회 (라우트 이름 `get_user`)
/// - `HEAD /api/v1/users/{id}` - 사용자 존재 확인
/// - `GET /api/v1/users` - 목록 조회 (라우트 이름 `get_users`)
/// - `POST /api/v1/users` - 사용자 생성
/// - `PUT /api/v1/users/{id}` - 전체 교체 또는 생성
/// - `PATCH /api/v1/users/{id}` - 부분 수정
/// - `DELETE /api/v1/users/{id}` - 사용자 삭제
/// - `OPTIONS /api/v1/users` - 지원 메서드 안내
///
/// # Examples
///
/// ```bash
/// curl -i -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"login":"neo","name":"Thomas Anderson","gender":"male","age":37}'
///
/// curl -i "http://localhost:8080/api/v1/users?pageNumber=1&pageSize=10"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::get_users)
            .service(handlers::users::create_user)
            .service(handlers::users::users_options)
            .service(handlers::users::get_user)
            .service(handlers::users::head_user)
            .service(handlers::users::upsert_user)
            .service(handlers::users::patch_user)
            .service(handlers::users::delete_user)
    );
}

/// JSON 본문 추출 실패를 `AppError`로 변환합니다
///
/// 본문이 비어 있으면 `MissingPayload`, 그 밖의 실패는 `MalformedPayload`입니다.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("JSON 본문 추출 실패: {}", err);

    let app_error = match &err {
        JsonPayloadError::Deserialize(e) if e.is_eof() && e.line() == 1 && e.column() == 0 => {
            AppError::MissingPayload("요청 본문이 비어 있습니다".to_string())
        }
        _ => AppError::MalformedPayload(err.to_string()),
    };
    app_error.into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("쿼리 문자열 추출 실패: {}", err);
    AppError::MalformedPayload(err.to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_resource_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "storage": "In-Memory",
///     "pagination": "X-Pagination header"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "storage": "In-Memory",
            "pagination": "X-Pagination header"
        }
    }))
}
