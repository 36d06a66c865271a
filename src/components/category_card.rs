//! Category Card Component
//!
//! One sub-category. Clicking copies its id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clipboard::{copy_item_id, BrowserClipboard};
use crate::context::AppContext;
use crate::image_proxy::{ImageUrlResolver, WeservProxy};
use crate::models::FlatItem;

#[component]
pub fn CategoryCard(item: FlatItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id.clone();
    let on_click = move |_| {
        let id = id.clone();
        spawn_local(async move {
            copy_item_id(&BrowserClipboard, &ctx, &id).await;
        });
    };

    let image = item.pic.as_deref().map(|pic| {
        view! {
            <img src=WeservProxy.resolve(pic) alt=item.name.clone() loading="lazy" />
        }
    });

    view! {
        <div class="card" title=item.card_title() on:click=on_click>
            {image}
            <p>{item.name.clone()}</p>
            <p class="card-id">{format!("ID: {}", item.id)}</p>
        </div>
    }
}
