//! 사용자 리소스 서비스
//!
//! 단일 사용자 리소스에 대한 CRUD, 전체 교체(upsert), JSON Patch 부분 수정,
//! 그리고 `X-Pagination` 헤더 기반 페이지 목록을 제공하는 REST 서비스입니다.
//!
//! # Features
//!
//! - **조회**: GET / HEAD, 잘못된 ID와 없는 ID를 모두 404로 처리
//! - **목록**: `pageNumber`/`pageSize` 보정, 이전/다음 페이지 링크
//! - **생성/교체**: 201 + `Location`, 같은 PUT 반복 시 204
//! - **부분 수정**: 타입이 있는 패치 연산, 전부 적용되거나 전혀 적용되지 않음
//! - **검증**: `validator` derive + 요청 단위 에러 누적, 422 응답
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 추출기 설정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 상태 코드, Location, X-Pagination, Allow
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, ID 해석, 패치 적용, 링크 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore trait, InMemoryUserStore
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use user_resource_service::repositories::users::InMemoryUserStore;
//! use user_resource_service::routes::configure_all_routes;
//! use user_resource_service::services::users::UserService;
//!
//! let service = web::Data::new(UserService::new(Arc::new(InMemoryUserStore::new())));
//! let app = App::new().app_data(service).configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
