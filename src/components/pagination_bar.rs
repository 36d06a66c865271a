//! Pagination Bar Component
//!
//! Previous/next buttons and a "第 X / Y 页" label; hidden when there is
//! at most one page.

use leptos::prelude::*;

use crate::store::{store_step_page, use_app_store, AppStateStoreFields};

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_app_store();
    let pager = move || store.pagination().get();

    // Only pages after the first scroll back up
    let navigate = move |forward: bool| {
        if let Some(page) = store_step_page(&store, forward) {
            if page > 1 {
                scroll_to_top();
            }
        }
    };

    view! {
        <Show when=move || pager().controls_visible()>
            <div id="pagination-container" class="pagination">
                <button
                    class="pagination-btn"
                    disabled=move || !pager().has_prev()
                    on:click=move |_| navigate(false)
                >
                    "上一页"
                </button>
                <span class="pagination-info">{move || pager().label()}</span>
                <button
                    class="pagination-btn"
                    disabled=move || !pager().has_next()
                    on:click=move |_| navigate(true)
                >
                    "下一页"
                </button>
            </div>
        </Show>
    }
}
