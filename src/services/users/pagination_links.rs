//! # 페이지네이션 링크
//!
//! 목록 조회 결과로 `X-Pagination` 헤더 본문을 만듭니다.
//! 이전/다음 링크는 목록 라우트를 같은 `pageSize`와 조정된 `pageNumber`로 다시 가리킵니다.

use crate::core::errors::AppResult;
use crate::domain::dto::common::pagination::PaginationMetadata;
use crate::domain::models::page::Page;
use crate::services::links::{LinkBuilder, USERS_ROUTE};

/// 목록 라우트의 특정 페이지 링크
pub fn page_link(links: &dyn LinkBuilder, page_number: u32, page_size: u32) -> AppResult<String> {
    links.link(
        USERS_ROUTE,
        &[],
        &[("pageNumber", page_number.to_string()), ("pageSize", page_size.to_string())],
    )
}

/// 페이지 정보와 이전/다음 링크로 메타데이터를 구성합니다.
///
/// 링크는 `has_previous` / `has_next`일 때만 채워집니다.
pub fn pagination_metadata<T>(page: &Page<T>, links: &dyn LinkBuilder) -> AppResult<PaginationMetadata> {
    let previous_page_link = if page.has_previous() {
        Some(page_link(links, page.current_page - 1, page.page_size)?)
    } else {
        None
    };

    let next_page_link = if page.has_next() {
        Some(page_link(links, page.current_page + 1, page.page_size)?)
    } else {
        None
    };

    Ok(PaginationMetadata {
        previous_page_link,
        next_page_link,
        total_count: page.total_count,
        page_size: page.page_size,
        current_page: page.current_page,
        total_pages: page.total_pages,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::models::page::PageWindow;

    /// 고정 호스트로 링크를 만드는 테스트용 빌더
    pub(crate) struct StaticLinks;

    impl LinkBuilder for StaticLinks {
        fn link(&self, route_name: &str, path_params: &[&str], query: &[(&str, String)]) -> AppResult<String> {
            let mut link = format!("http://test/{}", route_name);
            for param in path_params {
                link.push('/');
                link.push_str(param);
            }
            if !query.is_empty() {
                let rendered: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                link.push('?');
                link.push_str(&rendered.join("&"));
            }
            Ok(link)
        }
    }

    fn page(number: i64, total: u64) -> Page<()> {
        Page::new(vec![], total, PageWindow::normalize(Some(number), Some(10)))
    }

    #[test]
    fn test_first_page_has_only_next_link() {
        let metadata = pagination_metadata(&page(1, 25), &StaticLinks).unwrap();

        assert!(metadata.previous_page_link.is_none());
        assert_eq!(
            metadata.next_page_link.as_deref(),
            Some("http://test/get_users?pageNumber=2&pageSize=10")
        );
        assert_eq!(metadata.total_pages, 3);
    }

    #[test]
    fn test_last_page_has_only_previous_link() {
        let metadata = pagination_metadata(&page(3, 25), &StaticLinks).unwrap();

        assert_eq!(
            metadata.previous_page_link.as_deref(),
            Some("http://test/get_users?pageNumber=2&pageSize=10")
        );
        assert!(metadata.next_page_link.is_none());
    }

    #[test]
    fn test_single_page_has_no_links() {
        let metadata = pagination_metadata(&page(1, 5), &StaticLinks).unwrap();

        assert!(metadata.previous_page_link.is_none());
        assert!(metadata.next_page_link.is_none());
        assert_eq!(metadata.current_page, 1);
        assert_eq!(metadata.total_count, 5);
    }
}
