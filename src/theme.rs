//! Theme Controller
//!
//! Light/dark mode. An explicit choice stored in localStorage wins over the
//! system colour scheme; without one the page follows the system live.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{DARK_SCHEME_QUERY, THEME_STORAGE_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    fn from_system(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Where the explicit preference lives
pub trait PreferenceStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

/// `window.localStorage`, looked up on every access
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePreference;

impl PreferenceStore for LocalStoragePreference {
    fn load(&self) -> Option<Theme> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(THEME_STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|v| Theme::parse(&v))
    }

    fn save(&self, theme: Theme) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
                web_sys::console::error_1(&"[Theme] Failed to persist preference".into());
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeController<S> {
    store: S,
    applied: Theme,
    explicit: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Persisted choice, else system scheme (None = unknown), else light
    pub fn init(store: S, system_dark: Option<bool>) -> Self {
        match store.load() {
            Some(theme) => Self { store, applied: theme, explicit: true },
            None => Self {
                store,
                applied: system_dark.map(Theme::from_system).unwrap_or_default(),
                explicit: false,
            },
        }
    }

    pub fn applied(&self) -> Theme {
        self.applied
    }

    #[cfg(test)]
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Flip and persist; from now on system changes are ignored
    pub fn toggle(&mut self) -> Theme {
        self.applied = self.applied.flipped();
        self.explicit = true;
        self.store.save(self.applied);
        self.applied
    }

    /// Returns the new theme if the system change was applied
    pub fn system_changed(&mut self, dark: bool) -> Option<Theme> {
        if self.explicit {
            return None;
        }
        let theme = Theme::from_system(dark);
        if theme == self.applied {
            return None;
        }
        self.applied = theme;
        Some(theme)
    }
}

fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

/// Current system preference, `None` when matchMedia is unavailable
pub fn system_prefers_dark() -> Option<bool> {
    dark_scheme_query().map(|mql| mql.matches())
}

/// Write `data-theme` on the root element
pub fn apply_to_document(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            web_sys::console::error_1(&format!("[Theme] Failed to apply theme: {:?}", e).into());
        }
    }
}

/// Call `on_change(dark)` whenever the system colour scheme flips
pub fn watch_system_scheme(on_change: impl Fn(bool) + 'static) {
    let Some(mql) = dark_scheme_query() else {
        return;
    };
    let cb = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
        on_change(ev.matches());
    });
    if mql
        .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::error_1(&"[Theme] Could not watch system colour scheme".into());
    }
    // Lives as long as the page
    cb.forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryPreference(Rc<Cell<Option<Theme>>>);

    impl PreferenceStore for MemoryPreference {
        fn load(&self) -> Option<Theme> {
            self.0.get()
        }
        fn save(&self, theme: Theme) {
            self.0.set(Some(theme));
        }
    }

    #[test]
    fn test_init_order() {
        let saved = MemoryPreference::default();
        saved.save(Theme::Light);
        assert_eq!(ThemeController::init(saved, Some(true)).applied(), Theme::Light);

        assert_eq!(ThemeController::init(MemoryPreference::default(), Some(true)).applied(), Theme::Dark);
        assert_eq!(ThemeController::init(MemoryPreference::default(), Some(false)).applied(), Theme::Light);
        assert_eq!(ThemeController::init(MemoryPreference::default(), None).applied(), Theme::Light);
    }

    #[test]
    fn test_toggle_under_system_dark_persists() {
        let pref = MemoryPreference::default();
        let mut controller = ThemeController::init(pref.clone(), Some(true));
        assert_eq!(controller.applied(), Theme::Dark);
        assert_eq!(pref.load(), None);

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(pref.load(), Some(Theme::Light));

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(pref.load(), Some(Theme::Dark));
        assert_eq!(pref.load().map(Theme::as_str), Some("dark"));
    }

    #[test]
    fn test_system_changes_follow_until_explicit() {
        let mut controller = ThemeController::init(MemoryPreference::default(), Some(false));
        assert_eq!(controller.system_changed(true), Some(Theme::Dark));
        assert_eq!(controller.system_changed(true), None);

        controller.toggle();
        assert!(controller.is_explicit());
        assert_eq!(controller.system_changed(true), None);
        assert_eq!(controller.system_changed(false), None);
        assert_eq!(controller.applied(), Theme::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }
}
