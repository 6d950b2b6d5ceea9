//! # 페이지 모델
//!
//! 페이지 윈도우 계산과 한 페이지 분량의 결과를 표현합니다.

use crate::config::PaginationConfig;

/// 정규화된 `(pageNumber, pageSize)` 쌍
///
/// 항상 `page_number >= 1`, `1 <= page_size <= MAX_SIZE`를 만족합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_number: u32,
    pub page_size: u32,
}

impl PageWindow {
    /// 클라이언트 값을 거부하지 않고 허용 범위로 보정합니다.
    ///
    /// * `page_number' = max(page_number ?? DEFAULT_PAGE, MIN_PAGE)`
    /// * `page_size' = clamp(page_size ?? DEFAULT_SIZE, 1, MAX_SIZE)`
    ///
    /// # 예제
    /// ```rust,ignore
    /// let window = PageWindow::normalize(Some(0), Some(100));
    /// assert_eq!((window.page_number, window.page_size), (1, 20));
    /// ```
    pub fn normalize(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        let number = page_number
            .unwrap_or(i64::from(PaginationConfig::DEFAULT_PAGE))
            .max(i64::from(PaginationConfig::MIN_PAGE));
        let size = page_size
            .unwrap_or(i64::from(PaginationConfig::DEFAULT_SIZE))
            .clamp(1, i64::from(PaginationConfig::MAX_SIZE));

        Self {
            page_number: u32::try_from(number).unwrap_or(u32::MAX),
            page_size: u32::try_from(size).unwrap_or(PaginationConfig::MAX_SIZE),
        }
    }

    /// 건너뛸 항목 수
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// 가져올 최대 항목 수
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::normalize(None, None)
    }
}

/// 한 페이지 분량의 결과
///
/// `total_pages = ceil(total_count / page_size)`
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_size: u32,
    pub current_page: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64, window: PageWindow) -> Self {
        let total_pages = total_count.div_ceil(u64::from(window.page_size));

        Self {
            items,
            total_count,
            page_size: window.page_size,
            current_page: window.page_number,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 페이지 정보는 유지하고 항목만 변환합니다.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }
}
