//! Theme Toggle Button

use leptos::prelude::*;

use crate::context::AppContext;
use crate::theme::Theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let is_dark = move || ctx.theme.get() == Theme::Dark;

    view! {
        <button
            class="theme-toggle"
            title=move || if is_dark() { "切换到浅色模式" } else { "切换到深色模式" }
            on:click=move |_| ctx.toggle_theme()
        >
            {move || if is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}
