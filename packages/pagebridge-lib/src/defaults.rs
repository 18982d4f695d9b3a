pub const LOG_LEVEL: &str = "info";
pub const VERBOSE_LOGGING: bool = false;

pub const DEFAULT_PAGE_SIZE: u64 = pagebridge::DEFAULT_PAGE_SIZE;
pub const MAX_WINDOW: u64 = pagebridge::MAX_WINDOW;
pub const PAGE_CURSOR_WINDOW: u64 = pagebridge::PAGE_CURSOR_WINDOW;
