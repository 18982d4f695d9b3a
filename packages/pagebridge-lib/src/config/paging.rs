use crate::{
    config::{GatewayConfigError, GatewayConfigResult},
    defaults,
};
use pagebridge::PagingOptions;
use serde::Deserialize;

/// Paging behaviour shared by every connection field.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size used when a request names neither `first`/`last` nor `size`.
    pub default_page_size: u64,

    /// Number of leading results the backends reliably return.
    pub max_window: u64,

    /// Width of the `around` page cursor list.
    pub page_cursor_window: u64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: defaults::DEFAULT_PAGE_SIZE,
            max_window: defaults::MAX_WINDOW,
            page_cursor_window: defaults::PAGE_CURSOR_WINDOW,
        }
    }
}

impl PagingConfig {
    pub fn validate(&self) -> GatewayConfigResult<()> {
        if self.max_window == 0 {
            return Err(GatewayConfigError::InvalidPagingConfig(
                "max_window must be greater than zero".to_string(),
            ));
        }
        if self.page_cursor_window == 0 {
            return Err(GatewayConfigError::InvalidPagingConfig(
                "page_cursor_window must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<PagingConfig> for PagingOptions {
    fn from(c: PagingConfig) -> Self {
        PagingOptions {
            default_page_size: c.default_page_size,
            max_window: c.max_window,
            page_cursor_window: c.page_cursor_window,
        }
    }
}
