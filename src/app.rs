//! Category Browser App
//!
//! Root component: loads the dataset once, then filter bar, card grid and
//! pagination read everything from the store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{CardGrid, FilterBar, PaginationBar, ThemeToggle, ToastHost};
use crate::config::DATA_URL;
use crate::context::AppContext;
use crate::loader;
use crate::store::{AppState, AppStateStoreFields, LoadState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.start_theme();

    // Initial load; a failure replaces the cards with the error line
    Effect::new(move |_| {
        spawn_local(async move {
            match loader::fetch_catalog(DATA_URL).await {
                Ok(categories) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} categories", categories.len()).into());
                    store.update(|state| state.load(categories));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Error fetching or processing data: {}", e).into());
                    store.update(|state| state.fail(&e));
                }
            }
        });
    });

    let result_count = move || {
        let count = store.filtered().with(|items| items.len());
        format!("共 {} 个分区", count)
    };

    view! {
        <div class="container">
            <header class="page-header">
                <h1>"分区ID查询"</h1>
                <ThemeToggle />
            </header>

            <FilterBar />

            <Show when=move || store.load_state().get() == LoadState::Ready>
                <p class="result-count">{result_count}</p>
            </Show>

            <CardGrid />
            <PaginationBar />
        </div>
        <ToastHost />
    }
}
