//! Resolves a caller-supplied page request into a LIMIT/OFFSET window.

use crate::model::PaginationRequest;

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    /// - page below 1 is clamped to 1
    /// - page_size of 0 or less uses [`DEFAULT_PAGE_SIZE`], above [`MAX_PAGE_SIZE`] is capped
    pub fn new(page: i64, page_size: i64) -> Self {
        let limit = if page_size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size.min(MAX_PAGE_SIZE)
        };
        let page = page.max(1);
        PageWindow {
            limit,
            offset: (page - 1).saturating_mul(limit),
        }
    }

    pub fn from_request(req: &PaginationRequest) -> Self {
        Self::new(req.page, req.page_size)
    }

    /// Apply the window to an already ordered sequence.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let start = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let len = usize::try_from(self.limit).unwrap_or(0);
        items.iter().skip(start).take(len).cloned().collect()
    }
}
