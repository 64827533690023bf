use dioxus::prelude::*;
use folio_core::Theme;
use folio_core::theme::STORAGE_KEY;

use crate::utils::{local_storage_get, local_storage_set};

/// Active theme, shared through context
#[derive(Clone, Copy)]
pub struct ThemeState {
    current: Signal<Theme>,
}

impl ThemeState {
    pub fn get(&self) -> Theme {
        *self.current.read()
    }

    /// Switch theme and persist the choice
    pub fn set(&mut self, theme: Theme) {
        local_storage_set(STORAGE_KEY, theme.name());
        self.current.set(theme);
    }
}

/// Install the theme at the app root: restore the stored choice and keep the
/// `<html>` class in sync with it.
pub fn use_theme_provider() -> ThemeState {
    let state = use_context_provider(|| ThemeState {
        current: Signal::new(Theme::from_stored(local_storage_get(STORAGE_KEY).as_deref())),
    });

    use_effect(move || apply_root_class(*state.current.read()));

    state
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

fn apply_root_class(theme: Theme) {
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(root) = document.document_element()
    {
        let classes = root.class_list();
        for other in Theme::ALL {
            let _ = classes.remove_1(&other.root_class());
        }
        let _ = classes.add_1(&theme.root_class());
    }
}
