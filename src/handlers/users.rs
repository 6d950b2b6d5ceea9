//! # User Resource HTTP Handlers
//!
//! 사용자 리소스의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 추출기로 입력을 받아 [`UserService`]에 넘기고,
//! 타입이 있는 결과를 상태 코드와 헤더로 바꾸는 일만 합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 / 404 |
//! | `HEAD` | `/users/{id}` | 사용자 존재 확인 | 200 / 404 |
//! | `GET` | `/users?pageNumber=&pageSize=` | 목록 조회 + `X-Pagination` | 200 |
//! | `POST` | `/users` | 사용자 생성 + `Location` | 201 / 400 / 422 |
//! | `PUT` | `/users/{id}` | 전체 교체 또는 생성 | 201 / 204 / 400 / 422 |
//! | `PATCH` | `/users/{id}` | 부분 수정 (JSON Patch) | 204 / 400 / 404 / 422 |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 / 404 |
//! | `OPTIONS` | `/users` | 지원 메서드 안내 (`Allow`) | 200 |
//!
//! ## 요청 본문
//!
//! 본문 추출기는 `web::Json<Option<T>>`입니다. 본문이 JSON `null`이면
//! 서비스가 `MissingPayload`(400)로 응답합니다.
//!
//! ```bash
//! curl -i -X PATCH http://localhost:8080/api/v1/users/6f1c1b7e-8a0d-4d4b-9c53-0b8f8f3f1c2a \
//!   -H "Content-Type: application/json-patch+json" \
//!   -d '[{"op":"replace","path":"/login","value":"neo2"}]'
//! ```

use actix_web::http::header;
use actix_web::{delete, get, head, options, patch, post, put, web, HttpRequest, HttpResponse};
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::dto::common::pagination::PageQuery;
use crate::domain::dto::users::request::{CreateUserRequest, PatchOperation, UpdateUserRequest};
use crate::services::users::user_service::{UpsertOutcome, UserService};

/// 페이지네이션 메타데이터 응답 헤더
pub const PAGINATION_HEADER: &str = "X-Pagination";

/// 컬렉션 엔드포인트가 지원하는 메서드
pub const COLLECTION_ALLOW: &str = "GET, POST, OPTIONS";

#[get("/{user_id}", name = "get_user")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// GET과 같은 조회를 수행하고 본문 없이 응답합니다.
#[head("/{user_id}")]
pub async fn head_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().finish())
}

/// 사용자 목록 조회
///
/// 메타데이터는 본문이 아니라 `X-Pagination` 헤더(camelCase JSON)로 전달됩니다.
#[get("", name = "get_users")]
pub async fn get_users(
    req: HttpRequest,
    service: web::Data<UserService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service.list_users(query.into_inner(), &req).await?;
    let pagination = serde_json::to_string(&page.pagination)
        .context("페이지네이션 헤더 직렬화 실패")?;

    Ok(HttpResponse::Ok()
        .insert_header((PAGINATION_HEADER, pagination))
        .json(page.users))
}

#[post("")]
pub async fn create_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    payload: web::Json<Option<CreateUserRequest>>,
) -> Result<HttpResponse, AppError> {
    let created = service.create_user(payload.into_inner(), &req).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, created.location))
        .json(created.id))
}

/// 전체 교체 (upsert)
///
/// 없던 ID면 201 + `Location`, 기존 사용자를 교체했으면 204.
#[put("/{user_id}")]
pub async fn upsert_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<Option<UpdateUserRequest>>,
) -> Result<HttpResponse, AppError> {
    match service.upsert_user(&user_id, payload.into_inner(), &req).await? {
        UpsertOutcome::Created(created) => Ok(HttpResponse::Created()
            .insert_header((header::LOCATION, created.location))
            .json(created.id)),
        UpsertOutcome::Replaced => Ok(HttpResponse::NoContent().finish()),
    }
}

#[patch("/{user_id}")]
pub async fn patch_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<Option<Vec<PatchOperation>>>,
) -> Result<HttpResponse, AppError> {
    service.patch_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[options("")]
pub async fn users_options() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ALLOW, COLLECTION_ALLOW))
        .finish()
}
