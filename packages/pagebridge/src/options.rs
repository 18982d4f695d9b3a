/// Page size used when a request carries neither `first`/`last` nor `size`.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Number of leading results a backend reliably orders and returns.
pub const MAX_WINDOW: u64 = 100;

/// Width of the `around` list of page cursors.
pub const PAGE_CURSOR_WINDOW: u64 = 5;

/// Tunables shared by the normalizer, the navigator and the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingOptions {
    pub default_page_size: u64,
    pub max_window: u64,
    pub page_cursor_window: u64,
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_window: MAX_WINDOW,
            page_cursor_window: PAGE_CURSOR_WINDOW,
        }
    }
}
