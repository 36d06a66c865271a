//! Card Grid Component
//!
//! Shows the current page of the filtered list, or a status line while
//! loading, after a failed load, or when nothing matches.

use leptos::prelude::*;

use crate::components::CategoryCard;
use crate::store::{use_app_store, AppStateStoreFields, LoadState};

#[component]
pub fn CardGrid() -> impl IntoView {
    let store = use_app_store();

    let page_items = Memo::new(move |_| store.with(|state| state.page_entries()));

    view! {
        <div id="cards-container" class="cards-container">
            {move || match store.load_state().get() {
                LoadState::Loading => view! {
                    <p class="status-line">"正在加载…"</p>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <p class="status-line error">{message}</p>
                }.into_any(),
                LoadState::Ready => view! {
                    <Show
                        when=move || !page_items.get().is_empty()
                        fallback=|| view! { <p class="status-line">"没有找到匹配的分区。"</p> }
                    >
                        <For
                            each=move || page_items.get()
                            key=|(idx, item)| (*idx, item.id.clone())
                            children=move |(_, item)| view! { <CategoryCard item=item /> }
                        />
                    </Show>
                }.into_any(),
            }}
        </div>
    }
}
