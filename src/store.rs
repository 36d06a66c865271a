//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The state
//! transitions themselves live on `AppState` so they run without a browser.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::{apply_filters, CategoryFilter};
use crate::loader::{category_options, flatten, LoadError};
use crate::models::{Category, FlatItem};
use crate::pagination::{PageError, Paginator};

/// Where the initial fetch stands
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Categories as loaded, immutable afterwards
    pub categories: Vec<Category>,
    /// Selector options derived from the categories ("all" first)
    pub options: Vec<(String, String)>,
    /// Every sub-category tagged with its parent name
    pub items: Vec<FlatItem>,
    /// Current filter result, replaced wholesale on each change
    pub filtered: Vec<FlatItem>,
    pub category_filter: CategoryFilter,
    pub search: String,
    pub pagination: Paginator,
    pub load_state: LoadState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the dataset and show everything
    pub fn load(&mut self, categories: Vec<Category>) {
        self.items = flatten(&categories);
        self.options = category_options(&categories);
        self.categories = categories;
        self.category_filter = CategoryFilter::All;
        self.search.clear();
        self.load_state = LoadState::Ready;
        self.refilter();
    }

    pub fn fail(&mut self, error: &LoadError) {
        self.load_state = LoadState::Failed(error.user_message());
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
        self.refilter();
    }

    pub fn set_search(&mut self, text: String) {
        self.search = text;
        self.refilter();
    }

    /// Recompute the filtered list and go back to page 1
    fn refilter(&mut self) {
        self.filtered = apply_filters(&self.items, &self.category_filter, &self.search);
        self.pagination.reset(self.filtered.len());
    }

    #[cfg(test)]
    pub fn go_to_page(&mut self, page: usize) -> Result<(), PageError> {
        self.pagination.go_to(page)
    }

    pub fn next_page(&mut self) -> Result<(), PageError> {
        self.pagination.next()
    }

    pub fn prev_page(&mut self) -> Result<(), PageError> {
        self.pagination.prev()
    }

    /// Items on the current page
    pub fn page_items(&self) -> &[FlatItem] {
        self.filtered
            .get(self.pagination.page_range())
            .unwrap_or_default()
    }

    /// Current page as (index in the filtered list, item), for keyed rendering
    pub fn page_entries(&self) -> Vec<(usize, FlatItem)> {
        let start = self.pagination.page_range().start;
        self.page_items()
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, item)| (start + i, item))
            .collect()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_category(store: &AppStore, filter: CategoryFilter) {
    store.update(|state| state.set_category(filter));
}

pub fn store_set_search(store: &AppStore, text: String) {
    store.update(|state| state.set_search(text));
}

/// Step one page forward or back; returns the page now shown if it moved
pub fn store_step_page(store: &AppStore, forward: bool) -> Option<usize> {
    let mut moved = None;
    store.update(|state| {
        let result = if forward { state.next_page() } else { state.prev_page() };
        match result {
            Ok(()) => moved = Some(state.pagination.current_page()),
            Err(e) => web_sys::console::log_1(&format!("[APP] Ignored navigation: {}", e).into()),
        }
    });
    moved
}
