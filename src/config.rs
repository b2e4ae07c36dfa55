//! Paginator configuration.
//!
//! All setters clamp instead of failing, so any `Config` is usable.
//!
//! ```rust
//! use list_pager::Config;
//!
//! let config = Config::new()
//!     .with_page_size(25)
//!     .with_max_buttons(0)
//!     .with_param("p");
//!
//! assert_eq!(config.page_size, 25);
//! assert_eq!(config.max_buttons, 1);
//! assert_eq!(config.list_id, "all-posts");
//! ```

use crate::pager::{DEFAULT_MAX_BUTTONS, DEFAULT_PAGE_SIZE};
use crate::persist::DEFAULT_PARAM;

/// Id of the list container unless configured otherwise.
pub const DEFAULT_LIST_ID: &str = "all-posts";

/// Id of the control host unless configured otherwise.
pub const DEFAULT_PAGER_ID: &str = "pager";

/// Settings shared by the paginator and its document host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Id of the element whose direct children are paginated.
    pub list_id: String,
    /// Id of the element receiving the control strip.
    pub pager_id: String,
    /// Items per page, at least 1.
    pub page_size: usize,
    /// Numbered controls per strip, at least 1.
    pub max_buttons: usize,
    /// Query parameter carrying the page number.
    pub param: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_id: DEFAULT_LIST_ID.to_string(),
            pager_id: DEFAULT_PAGER_ID.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_buttons: DEFAULT_MAX_BUTTONS,
            param: DEFAULT_PARAM.to_string(),
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the list container id.
    pub fn with_list_id(mut self, id: impl Into<String>) -> Self {
        self.list_id = id.into();
        self
    }

    /// Sets the control host id.
    pub fn with_pager_id(mut self, id: impl Into<String>) -> Self {
        self.pager_id = id.into();
        self
    }

    /// Sets the page size; zero becomes 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the numbered window size; zero becomes 1.
    pub fn with_max_buttons(mut self, max_buttons: usize) -> Self {
        self.max_buttons = max_buttons.max(1);
        self
    }

    /// Sets the query parameter name.
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }
}
