//! Numbered page navigation on top of cursor paging.
//!
//! Each page is addressed by the cursor of the last item of the page before
//! it, so passing a page cursor as `after` lands on that page's first item.

use crate::{
    cursor::{self, Cursor},
    PagingState, PAGE_CURSOR_WINDOW,
};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCursor {
    pub cursor: Cursor,
    pub page: u64,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCursors {
    pub first: Option<PageCursor>,
    pub around: Vec<PageCursor>,
    pub last: Option<PageCursor>,
    pub previous: Option<PageCursor>,
}

impl PageCursors {
    /// Every page number referenced by this navigation, in no particular order.
    pub fn pages(&self) -> impl Iterator<Item = u64> + '_ {
        self.first
            .iter()
            .chain(self.around.iter())
            .chain(self.last.iter())
            .chain(self.previous.iter())
            .map(|c| c.page)
    }
}

/// Number of pages needed to show `total_count` items, never less than one.
pub fn total_pages(total_count: u64, size: u64) -> u64 {
    if size == 0 {
        return 1;
    }
    total_count.div_ceil(size).max(1)
}

#[derive(Debug, Clone, Copy)]
pub struct PageCursorNavigator {
    window: u64,
}

impl Default for PageCursorNavigator {
    fn default() -> Self {
        Self::new(PAGE_CURSOR_WINDOW)
    }
}

impl PageCursorNavigator {
    /// A window narrower than one page is raised to one.
    pub fn new(window: u64) -> Self {
        if window == 0 {
            warn!("Page cursor window of 0 requested, using 1");
        }
        Self {
            window: window.max(1),
        }
    }

    pub fn window(&self) -> u64 {
        self.window
    }

    pub fn build(&self, state: &PagingState, total_count: u64) -> PageCursors {
        let size = state.size;
        let total = total_pages(total_count, size);
        let current = state.page.clamp(1, total);
        let page_cursor = |page: u64| PageCursor {
            cursor: cursor::page_cursor(page, size),
            page,
            is_current: page == current,
        };

        // Up to `window` pages around `current`, shifted to stay in bounds.
        let highest_start = total.saturating_sub(self.window - 1).max(1);
        let lo = current.saturating_sub(self.window / 2).clamp(1, highest_start);
        let hi = lo.saturating_add(self.window - 1).min(total);

        PageCursors {
            first: (lo > 1).then(|| page_cursor(1)),
            around: (lo..=hi).map(&page_cursor).collect(),
            last: (hi < total).then(|| page_cursor(total)),
            previous: (current > 1).then(|| page_cursor(current - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cursor::decode, ArgumentNormalizer, ConnectionArgs};
    use pretty_assertions::assert_eq;

    fn state(page: i64, size: i64) -> PagingState {
        ArgumentNormalizer::default()
            .normalize(&ConnectionArgs::paged(page, size))
            .unwrap()
            .0
    }

    fn around(cursors: &PageCursors) -> Vec<u64> {
        cursors.around.iter().map(|c| c.page).collect()
    }

    #[test]
    fn test_few_pages_fit_in_window() {
        let cursors = PageCursorNavigator::default().build(&state(1, 10), 35);
        assert_eq!(around(&cursors), vec![1, 2, 3, 4]);
        assert_eq!(cursors.first, None);
        assert_eq!(cursors.last, None);
        assert_eq!(cursors.previous, None);
        assert!(cursors.around[0].is_current);
        assert!(!cursors.around[1].is_current);
    }

    #[test]
    fn test_window_near_start() {
        let cursors = PageCursorNavigator::default().build(&state(2, 10), 200);
        assert_eq!(around(&cursors), vec![1, 2, 3, 4, 5]);
        assert_eq!(cursors.first, None);
        assert_eq!(cursors.last.as_ref().map(|c| c.page), Some(20));
        assert_eq!(cursors.previous.as_ref().map(|c| c.page), Some(1));
    }

    #[test]
    fn test_window_in_the_middle() {
        let cursors = PageCursorNavigator::default().build(&state(8, 10), 200);
        assert_eq!(around(&cursors), vec![6, 7, 8, 9, 10]);
        assert_eq!(cursors.first.as_ref().map(|c| c.page), Some(1));
        assert_eq!(cursors.last.as_ref().map(|c| c.page), Some(20));
        assert_eq!(cursors.previous.as_ref().map(|c| c.page), Some(7));
        assert_eq!(decode(&cursors.around[0].cursor).unwrap(), 49);
        assert!(cursors.around[2].is_current);
    }

    #[test]
    fn test_window_near_end() {
        let cursors = PageCursorNavigator::default().build(&state(19, 10), 200);
        assert_eq!(around(&cursors), vec![16, 17, 18, 19, 20]);
        assert_eq!(cursors.first.as_ref().map(|c| c.page), Some(1));
        assert_eq!(cursors.last, None);
    }

    #[test]
    fn test_current_page_is_clamped_to_total_pages() {
        let cursors = PageCursorNavigator::default().build(&state(50, 10), 35);
        assert_eq!(around(&cursors), vec![1, 2, 3, 4]);
        assert!(cursors.around[3].is_current);
        assert_eq!(cursors.previous.as_ref().map(|c| c.page), Some(3));
    }

    #[test]
    fn test_zero_size_collapses_to_one_page() {
        let cursors = PageCursorNavigator::default().build(&state(1, 0), 500);
        assert_eq!(around(&cursors), vec![1]);
        assert_eq!(cursors.previous, None);

        let cursors = PageCursorNavigator::default().build(&state(1, 10), 0);
        assert_eq!(around(&cursors), vec![1]);
    }

    #[test]
    fn test_pages_stay_in_bounds() {
        for window in [1, 2, 3, 4, 5, 7, 9] {
            let navigator = PageCursorNavigator::new(window);
            for total_count in [0, 1, 9, 10, 11, 55, 99, 100, 250] {
                let total = total_pages(total_count, 10);
                for page in 1..=total + 2 {
                    let cursors = navigator.build(&state(page as i64, 10), total_count);
                    assert_eq!(cursors.around.len() as u64, window.min(total));
                    assert!(cursors.pages().all(|p| (1..=total).contains(&p)));
                    let current = page.min(total);
                    assert!(cursors.around.iter().any(|c| c.page == current));
                    assert_eq!(cursors.first.is_none(), cursors.around[0].page == 1);
                    assert_eq!(
                        cursors.last.is_none(),
                        cursors.around[cursors.around.len() - 1].page == total
                    );
                }
            }
        }
    }

    #[test]
    fn test_even_window_leans_forward() {
        let navigator = PageCursorNavigator::new(4);
        assert_eq!(navigator.window(), 4);
        assert_eq!(around(&navigator.build(&state(8, 10), 200)), vec![6, 7, 8, 9]);
        assert_eq!(PageCursorNavigator::new(0).window(), 1);
    }
}
