//! # 페이지네이션 DTO
//!
//! 목록 조회 쿼리 파라미터와 `X-Pagination` 응답 헤더의 본문을 정의합니다.

use serde::{Deserialize, Deserializer, Serialize};

/// 목록 조회 쿼리 (`?pageNumber=&pageSize=`)
///
/// 범위를 벗어난 값도 그대로 받고, 보정은
/// [`PageWindow::normalize`](crate::domain::models::page::PageWindow::normalize)가 합니다.
/// 숫자로 읽을 수 없는 값은 지정하지 않은 것으로 취급합니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default, deserialize_with = "lenient_number")]
    pub page_number: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub page_size: Option<i64>,
}

/// 쿼리 문자열 값을 `i64`로 읽습니다.
///
/// `i64` 범위를 넘는 정수는 부호에 따라 최솟값/최댓값으로 포화시킵니다.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| parse_saturating(value.trim())))
}

fn parse_saturating(value: &str) -> Option<i64> {
    if let Ok(number) = value.parse::<i64>() {
        return Some(number);
    }

    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(if negative { i64::MIN } else { i64::MAX })
    } else {
        None
    }
}

/// `X-Pagination` 헤더 본문
///
/// 링크가 없으면 `null`로 직렬화됩니다.
///
/// ```json
/// {
///   "previousPageLink": null,
///   "nextPageLink": "http://localhost:8080/api/v1/users?pageNumber=2&pageSize=10",
///   "totalCount": 25,
///   "pageSize": 10,
///   "currentPage": 1,
///   "totalPages": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub previous_page_link: Option<String>,
    pub next_page_link: Option<String>,
    pub total_count: u64,
    pub page_size: u32,
    pub current_page: u32,
    pub total_pages: u32,
}
