use dioxus::prelude::*;
use tracing::{debug, warn};

use api::theme::{ThemePersistence, ThemeState, ThemeStore};

use crate::common::{
    SITE,
    storage::{get_local_storage, set_local_storage},
};

// theme flag kept in local storage under {storage_prefix}_{theme_key}
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStorage;

impl ThemePersistence for LocalThemeStorage {
    fn load(&self) -> Option<ThemeState> {
        get_local_storage(&SITE.theme_key)
    }

    fn save(&self, state: &ThemeState) {
        set_local_storage(&SITE.theme_key, state);
    }
}

pub type Theme = Signal<ThemeStore<LocalThemeStorage>>;

// swap the scope marker on <html>; every stylesheet rule for dark mode hangs off it
fn apply_scope_class(state: &ThemeState) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    let Some(root) = root else {
        warn!("no document element to apply theme to");
        return;
    };

    let classes = root.class_list();
    let _ = classes.remove_2("dark", "light");
    let _ = classes.add_1(state.scope_class());

    debug!(dark = state.is_dark_mode, "applied theme");
}

// called once from App; pages reach the store through use_theme()
pub fn use_theme_provider() -> Theme {
    use_context_provider(|| {
        let mut store = ThemeStore::new(LocalThemeStorage);
        store.subscribe(apply_scope_class);

        Signal::new(store)
    })
}

pub fn use_theme() -> Theme {
    use_context::<Theme>()
}
