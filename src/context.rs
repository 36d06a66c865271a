//! Application Context
//!
//! Toast and theme state shared via Leptos Context API. Dataset, filter
//! and pagination state live in the store (`crate::store`).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::{TOAST_ENTER_DELAY_MS, TOAST_EXIT_FALLBACK_MS, TOAST_VISIBLE_MS};
use crate::theme::{self, LocalStoragePreference, Theme, ThemeController};
use crate::toast::{Notifier, ToastKind, ToastSlot};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The single toast slot
    pub toast: RwSignal<ToastSlot>,
    /// Currently applied theme - read by the toggle button
    pub theme: RwSignal<Theme>,
    theme_controller: StoredValue<ThemeController<LocalStoragePreference>>,
}

impl AppContext {
    pub fn new() -> Self {
        let controller = ThemeController::init(LocalStoragePreference, theme::system_prefers_dark());
        Self {
            toast: RwSignal::new(ToastSlot::default()),
            theme: RwSignal::new(controller.applied()),
            theme_controller: StoredValue::new(controller),
        }
    }

    /// Apply the initial theme and follow the system scheme from now on
    pub fn start_theme(&self) {
        let applied = self.theme.get_untracked();
        web_sys::console::log_1(&format!("[Theme] Initial theme: {}", applied.as_str()).into());
        theme::apply_to_document(applied);

        let ctx = *self;
        theme::watch_system_scheme(move |dark| ctx.system_scheme_changed(dark));
    }

    pub fn toggle_theme(&self) {
        let mut next = Theme::default();
        self.theme_controller.update_value(|c| next = c.toggle());
        self.set_applied(next);
    }

    fn system_scheme_changed(&self, dark: bool) {
        let mut changed = None;
        self.theme_controller.update_value(|c| changed = c.system_changed(dark));
        if let Some(next) = changed {
            self.set_applied(next);
        }
    }

    fn set_applied(&self, theme: Theme) {
        self.theme.set(theme);
        theme::apply_to_document(theme);
    }

    /// Exit transition finished (or fallback timer fired)
    pub fn finish_toast(&self, id: u64) {
        self.toast.update(|slot| {
            slot.remove(id);
        });
    }
}

impl Notifier for AppContext {
    fn notify(&self, message: String, kind: ToastKind) {
        let toast = self.toast;
        let ctx = *self;
        let mut id = 0;
        toast.update(|slot| id = slot.show(message, kind));

        spawn_local(async move {
            TimeoutFuture::new(TOAST_ENTER_DELAY_MS).await;
            let mut revealed = false;
            toast.update(|slot| revealed = slot.reveal(id));
            if !revealed {
                return;
            }

            TimeoutFuture::new(TOAST_VISIBLE_MS).await;
            let mut leaving = false;
            toast.update(|slot| leaving = slot.dismiss(id));
            if !leaving {
                return;
            }

            TimeoutFuture::new(TOAST_EXIT_FALLBACK_MS).await;
            ctx.finish_toast(id);
        });
    }
}
