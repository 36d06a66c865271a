//! Filter Bar Component
//!
//! Category selector and search box. Every change refilters and returns to
//! page 1.

use leptos::prelude::*;

use crate::filter::CategoryFilter;
use crate::store::{store_set_category, store_set_search, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="controls">
            <select
                id="category-filter"
                prop:value=move || store.category_filter().get().as_select_value().to_string()
                on:change=move |ev| {
                    let filter = CategoryFilter::from_select_value(&event_target_value(&ev));
                    store_set_category(&store, filter);
                }
            >
                // Keyed by position: category names are not guaranteed unique
                <For
                    each=move || store.options().get().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, (value, label))| {
                        view! { <option value=value>{label}</option> }
                    }
                />
            </select>
            <input
                id="search-input"
                type="search"
                placeholder="输入分区名称或ID搜索..."
                prop:value=move || store.search().get()
                on:input=move |ev| store_set_search(&store, event_target_value(&ev))
            />
        </div>
    }
}
