use leptos::prelude::*;

use crate::theme::{Theme, ThemeError, ThemeOption, ThemeStore};
#[cfg(not(feature = "hydrate"))]
use crate::theme::{ClassSet, MemoryStorage};

/// Handle to the page's theme. Copy it into any component that needs it.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    store: StoredValue<ThemeStore>,
}

impl ThemeContext {
    pub fn new(store: ThemeStore) -> Self {
        Self {
            theme: RwSignal::new(store.theme()),
            store: StoredValue::new(store),
        }
    }

    /// Loads the persisted choice and applies it to the document.
    pub fn activate(&self) {
        match self.store.try_update_value(|s| s.activate()) {
            Some(theme) => self.theme.set(theme),
            None => log::warn!("theme store activated after disposal"),
        }
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn get_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    pub fn signal(&self) -> Signal<Theme> {
        self.theme.read_only().into()
    }

    pub fn set(&self, theme: Theme) {
        // storage and marker first, so readers woken by the signal see them
        if self.store.try_update_value(|s| s.set_theme(theme)).is_none() {
            log::warn!("theme store used after disposal");
            return;
        }
        self.theme.set(theme);
    }

    pub fn options(&self) -> &'static [ThemeOption] {
        Theme::options()
    }
}

pub fn try_use_theme() -> Result<ThemeContext, ThemeError> {
    use_context::<ThemeContext>().ok_or(ThemeError::MissingProvider)
}

/// Panics outside of a [`ThemeProvider`]; that is a wiring bug, not a
/// runtime condition.
pub fn use_theme() -> ThemeContext {
    try_use_theme().unwrap_or_else(|e| panic!("{e}"))
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let ctx = ThemeContext::new(root_store());
    provide_context(ctx);

    // Effects only run in the browser, after hydration
    Effect::watch(
        || (),
        move |_, _, _| {
            ctx.activate();
        },
        true,
    );

    children()
}

#[cfg(feature = "hydrate")]
fn root_store() -> ThemeStore {
    use crate::theme::MemoryStorage;
    use browser::{RootClassList, WebStorage};

    match WebStorage::open() {
        Ok(storage) => ThemeStore::new(storage, RootClassList),
        Err(e) => {
            log::warn!("{e}, theme choice will not persist");
            ThemeStore::new(MemoryStorage::default(), RootClassList)
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn root_store() -> ThemeStore {
    ThemeStore::new(MemoryStorage::default(), ClassSet::default())
}

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::{document, window};
    use wasm_bindgen::JsValue;

    use crate::theme::{MarkerTarget, ThemeError, ThemeStorage};

    /// `window.localStorage`, resolved on each access.
    pub struct WebStorage;

    impl WebStorage {
        pub fn open() -> Result<Self, ThemeError> {
            local_storage().map(|_| Self)
        }
    }

    fn local_storage() -> Result<web_sys::Storage, ThemeError> {
        window()
            .local_storage()
            .ok()
            .flatten()
            .ok_or(ThemeError::StorageUnavailable)
    }

    fn storage_err(e: JsValue) -> ThemeError {
        ThemeError::Storage(format!("{e:?}"))
    }

    impl ThemeStorage for WebStorage {
        fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
            local_storage()?.get_item(key).map_err(storage_err)
        }

        fn store(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
            local_storage()?.set_item(key, value).map_err(storage_err)
        }
    }

    /// `classList` of the `<html>` element.
    pub struct RootClassList;

    impl MarkerTarget for RootClassList {
        fn add_class(&mut self, class: &str) {
            if let Some(root) = document().document_element() {
                if let Err(e) = root.class_list().add_1(class) {
                    log::warn!("could not add {class}: {e:?}");
                }
            }
        }

        fn remove_class(&mut self, class: &str) {
            if let Some(root) = document().document_element() {
                if let Err(e) = root.class_list().remove_1(class) {
                    log::warn!("could not remove {class}: {e:?}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ClassSet, MemoryStorage, STORAGE_KEY};

    #[test]
    fn test_missing_provider() {
        let owner = Owner::new();
        owner.with(|| {
            assert!(matches!(try_use_theme(), Err(ThemeError::MissingProvider)));
        });
    }

    #[test]
    #[should_panic(expected = "use_theme must be used within a ThemeProvider")]
    fn test_use_theme_panics_without_provider() {
        let owner = Owner::new();
        owner.with(|| {
            use_theme();
        });
    }

    #[test]
    fn test_context_set_persists_and_marks() {
        let storage = MemoryStorage::default();
        let marker = ClassSet::default();
        let owner = Owner::new();
        owner.with(|| {
            provide_context(ThemeContext::new(ThemeStore::new(
                storage.clone(),
                marker.clone(),
            )));

            let ctx = use_theme();
            assert_eq!(ctx.get_untracked(), Theme::Cyberpunk);
            ctx.activate();
            assert_eq!(marker.classes(), vec!["theme-cyberpunk"]);

            ctx.set(Theme::Ocean);
            assert_eq!(ctx.get_untracked(), Theme::Ocean);
            assert_eq!(ctx.signal().get_untracked(), Theme::Ocean);
            assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("ocean"));
            assert_eq!(marker.classes(), vec!["theme-ocean"]);
            assert_eq!(ctx.options().len(), 4);
        });
    }

    #[test]
    fn test_context_activate_adopts_persisted() {
        let storage = MemoryStorage::default();
        storage.insert(STORAGE_KEY, "light");
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ThemeContext::new(ThemeStore::new(storage.clone(), ClassSet::default()));
            // nothing is read until activation
            assert_eq!(ctx.get_untracked(), Theme::Cyberpunk);
            ctx.activate();
            assert_eq!(ctx.get_untracked(), Theme::Light);
        });
    }
}
