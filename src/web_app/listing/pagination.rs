// web_app/listing/pagination.rs - Page cursor and pagination view-model
//
// The cursor is the single source of truth for "which page". Moving it
// never fetches; the listing page reacts to the changed search key.

use crate::web_app::model::UnitPagination;

/// 1-based page index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageCursor(u32);

impl Default for PageCursor {
    fn default() -> Self {
        PageCursor(1)
    }
}

impl PageCursor {
    pub fn new(page: u32) -> Self {
        PageCursor(page.max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns whether the cursor moved.
    pub fn reset(&mut self) -> bool {
        let moved = self.0 != 1;
        self.0 = 1;
        moved
    }

    /// Offset of the first unit on this page
    pub fn skip(self, page_size: u32) -> u32 {
        (self.0 - 1).saturating_mul(page_size)
    }
}

/// What the pagination control renders
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaginationView {
    pub current_page: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub total_pages: u32,
    pub total_count: u64,
}

impl PaginationView {
    /// `has_previous` comes from the cursor; totals from the last applied
    /// response, if any. `has_next` also needs `current`: the response must
    /// answer the cursor's page with no newer request outstanding.
    pub fn derive(cursor: PageCursor, last: Option<&UnitPagination>, current: bool) -> Self {
        PaginationView {
            current_page: cursor.get(),
            has_next: current && last.is_some_and(|p| p.has_next),
            has_previous: cursor.get() > 1,
            total_pages: last.map_or(0, |p| p.total_pages),
            total_count: last.map_or(0, |p| p.total_count),
        }
    }

    /// "Page 2 of 7", or just "Page 2" when the backend sent no total
    pub fn label(&self) -> String {
        if self.total_pages > 0 {
            format!("Page {} of {}", self.current_page, self.total_pages)
        } else {
            format!("Page {}", self.current_page)
        }
    }
}

/// Advances the cursor only when another page exists.
pub fn next(cursor: &mut PageCursor, has_next: bool) -> bool {
    if !has_next {
        return false;
    }
    cursor.0 = cursor.0.saturating_add(1);
    true
}

/// Steps back one page, never below 1.
pub fn previous(cursor: &mut PageCursor) -> bool {
    if cursor.0 <= 1 {
        return false;
    }
    cursor.0 -= 1;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_floors_at_one() {
        assert_eq!(PageCursor::new(0).get(), 1);
        assert_eq!(PageCursor::default().get(), 1);
    }

    #[test]
    fn test_skip_is_zero_based_offset() {
        assert_eq!(PageCursor::new(1).skip(6), 0);
        assert_eq!(PageCursor::new(3).skip(6), 12);
    }

    #[test]
    fn test_previous_at_first_page_is_noop() {
        let mut cursor = PageCursor::default();
        assert!(!previous(&mut cursor));
        assert_eq!(cursor.get(), 1);
    }

    #[test]
    fn test_next_requires_has_next() {
        let mut cursor = PageCursor::new(2);
        assert!(!next(&mut cursor, false));
        assert_eq!(cursor.get(), 2);

        assert!(next(&mut cursor, true));
        assert_eq!(cursor.get(), 3);
    }

    #[test]
    fn test_view_without_response() {
        let view = PaginationView::derive(PageCursor::new(2), None, true);
        assert!(view.has_previous);
        assert!(!view.has_next);
        assert_eq!(view.label(), "Page 2");
    }

    #[test]
    fn test_view_ignores_server_has_previous() {
        let last = UnitPagination {
            current_page: 1,
            has_next: true,
            has_previous: true,
            total_pages: 4,
            ..Default::default()
        };

        let view = PaginationView::derive(PageCursor::new(1), Some(&last), true);
        assert!(!view.has_previous);
        assert!(view.has_next);
        assert_eq!(view.label(), "Page 1 of 4");
    }

    #[test]
    fn test_view_from_other_page_has_no_next() {
        let last = UnitPagination {
            current_page: 1,
            has_next: true,
            total_pages: 2,
            ..Default::default()
        };

        let view = PaginationView::derive(PageCursor::new(2), Some(&last), false);
        assert!(!view.has_next);
        assert!(view.has_previous);
        assert_eq!(view.label(), "Page 2 of 2");
    }
}
