//! Application Constants
//!
//! Everything the page needs is fixed at compile time.

/// Relative path of the category dataset
pub const DATA_URL: &str = "data.json";

/// Cards per page
pub const ITEMS_PER_PAGE: usize = 56;

/// Image proxy endpoint; the original URL (without protocol) is appended
pub const IMAGE_PROXY_BASE: &str = "https://images.weserv.nl/?url=";

/// localStorage key holding "dark" or "light"
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query used to read the system colour scheme
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Delay before a freshly inserted toast starts its enter transition
pub const TOAST_ENTER_DELAY_MS: u32 = 10;

/// How long a toast stays fully visible
pub const TOAST_VISIBLE_MS: u32 = 3000;

/// Removal fallback in case `transitionend` never fires
pub const TOAST_EXIT_FALLBACK_MS: u32 = 600;

/// Select value representing "no category restriction"
pub const ALL_CATEGORIES_VALUE: &str = "all";
