//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod card_grid;
mod category_card;
mod pagination_bar;
mod toast_host;
mod theme_toggle;

pub use filter_bar::FilterBar;
pub use card_grid::CardGrid;
pub use category_card::CategoryCard;
pub use pagination_bar::PaginationBar;
pub use toast_host::ToastHost;
pub use theme_toggle::ThemeToggle;
