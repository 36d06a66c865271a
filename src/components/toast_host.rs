//! Toast Host Component
//!
//! Renders the single toast slot. The element is keyed on the toast id so
//! phase changes only swap its class and CSS transitions can run.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toast = ctx.toast;

    let current_id = Memo::new(move |_| toast.with(|slot| slot.current().map(|t| t.id)));

    view! {
        {move || current_id.get().map(|id| {
            let class = move || toast.with(|slot| slot.current().map(|t| t.class()).unwrap_or("toast"));
            let message = toast.with_untracked(|slot| {
                slot.current().map(|t| t.message.clone()).unwrap_or_default()
            });
            view! {
                <div class=class on:transitionend=move |_| ctx.finish_toast(id)>
                    {message}
                </div>
            }
        })}
    }
}
