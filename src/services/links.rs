//! # 링크 빌더
//!
//! 라우트 이름과 파라미터로 완전한(절대) URI를 만드는 협력 객체입니다.
//! 서비스는 [`LinkBuilder`] trait에만 의존하고, 실제 구현은 actix-web의
//! `HttpRequest::url_for`가 담당합니다.

use actix_web::HttpRequest;
use crate::core::errors::{AppResult, ErrorContext};

/// 단일 사용자 조회 라우트 이름 (`Location` 헤더 대상)
pub const USER_ROUTE: &str = "get_user";

/// 사용자 목록 라우트 이름 (페이지 링크 대상)
pub const USERS_ROUTE: &str = "get_users";

/// 라우트 이름 → 절대 URI
pub trait LinkBuilder {
    /// # Arguments
    ///
    /// * `route_name` - 라우트 매크로의 `name`
    /// * `path_params` - 경로 파라미터 (순서대로)
    /// * `query` - 쿼리 파라미터 (비어 있으면 `?`를 붙이지 않음)
    fn link(&self, route_name: &str, path_params: &[&str], query: &[(&str, String)]) -> AppResult<String>;
}

impl LinkBuilder for HttpRequest {
    fn link(&self, route_name: &str, path_params: &[&str], query: &[(&str, String)]) -> AppResult<String> {
        let mut url = self
            .url_for(route_name, path_params)
            .with_context(|| format!("'{}' 라우트 URL 생성 실패", route_name))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url.to_string())
    }
}
