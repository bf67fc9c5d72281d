//! Fixed-size paging over a filtered list.

/// Rows per page on every list page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of results; `number` is 1-based
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    pub number: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// `max(1, ceil(len / page_size))`; a zero page size is treated as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slice `items` to `page`. A page outside `1..=total_pages` yields an empty
/// slice rather than an error.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let visible = match page.checked_sub(1).and_then(|p| p.checked_mul(page_size)) {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        }
        _ => &items[..0],
    };
    Page {
        visible,
        number: page,
        total_pages,
    }
}

/// Current-page cursor for a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            current: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move forward; a no-op on the last page.
    pub fn next(&mut self, item_count: usize) -> bool {
        if self.current < total_pages(item_count, self.page_size) {
            self.current += 1;
            return true;
        }
        false
    }

    /// Move back; a no-op on the first page.
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            return true;
        }
        false
    }

    pub fn go_to(&mut self, page: usize, item_count: usize) {
        self.current = page.clamp(1, total_pages(item_count, self.page_size));
    }

    /// Pull the cursor back inside `[1, total_pages]` after the list shrank.
    pub fn clamp(&mut self, item_count: usize) {
        let last = total_pages(item_count, self.page_size);
        if self.current > last {
            tracing::debug!(from = self.current, to = last, "page clamped");
            self.current = last;
        }
    }

    pub fn page<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        paginate(items, self.current, self.page_size)
    }
}
