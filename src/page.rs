use serde::Serialize;

/// Page size used when the caller asks for an invalid one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page size the registry will serve.
pub const MAX_PAGE_SIZE: usize = 100;

/// One page of an ordered result set, with the metadata a caller needs to
/// render pagination controls.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_pages: usize,
    pub total_elements: usize,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
    pub has_previous: bool,
    pub sorted_by: Option<String>,
    pub sort_direction: Option<String>,
}

impl<T> Page<T> {
    /// Slice one page out of a full, already sorted result list.
    pub fn from_sorted(
        items: Vec<T>,
        page: usize,
        size: usize,
        sorted_by: Option<String>,
        sort_direction: Option<String>,
    ) -> Page<T> {
        let total_elements = items.len();
        let total_pages = if size == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };

        let start = page.saturating_mul(size);
        let content: Vec<T> = items.into_iter().skip(start).take(size).collect();

        let has_next = total_pages > 0 && page + 1 < total_pages;
        let last = total_pages == 0 || page + 1 >= total_pages;

        Page {
            content,
            page,
            size,
            total_pages,
            total_elements,
            first: page == 0,
            last,
            has_next,
            has_previous: page > 0,
            sorted_by,
            sort_direction,
        }
    }
}

/// Negative page numbers are clamped to the first page.
pub fn clamp_page(page: i64) -> usize {
    if page < 0 {
        0
    } else {
        page as usize
    }
}

/// Sizes outside (0, 100] fall back to the default of 20.
pub fn clamp_size(size: i64) -> usize {
    if size < 1 || size > MAX_PAGE_SIZE as i64 {
        DEFAULT_PAGE_SIZE
    } else {
        size as usize
    }
}
