use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    str::FromStr,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use thiserror::Error;

/// Key the selected theme is persisted under.
pub const STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME: Theme = Theme::Cyberpunk;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Dark,
    Light,
    #[default]
    Cyberpunk,
    Ocean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    pub name: Theme,
    pub label: &'static str,
    /// Gradient classes for the selector swatch.
    pub colors: &'static str,
}

static THEME_OPTIONS: [ThemeOption; 4] = [
    ThemeOption {
        name: Theme::Dark,
        label: "Dark",
        colors: "from-gray-900 to-gray-800",
    },
    ThemeOption {
        name: Theme::Light,
        label: "Light",
        colors: "from-gray-100 to-white",
    },
    ThemeOption {
        name: Theme::Cyberpunk,
        label: "Cyberpunk",
        colors: "from-purple-900 to-pink-900",
    },
    ThemeOption {
        name: Theme::Ocean,
        label: "Ocean",
        colors: "from-blue-900 to-teal-900",
    },
];

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Dark, Theme::Light, Theme::Cyberpunk, Theme::Ocean];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Cyberpunk => "cyberpunk",
            Theme::Ocean => "ocean",
        }
    }

    pub fn options() -> &'static [ThemeOption] {
        &THEME_OPTIONS
    }

    pub fn option(&self) -> &'static ThemeOption {
        match self {
            Theme::Dark => &THEME_OPTIONS[0],
            Theme::Light => &THEME_OPTIONS[1],
            Theme::Cyberpunk => &THEME_OPTIONS[2],
            Theme::Ocean => &THEME_OPTIONS[3],
        }
    }

    pub fn label(&self) -> &'static str {
        self.option().label
    }

    /// Class put on the document root while this theme is active.
    pub fn marker_class(&self) -> String {
        format!("theme-{}", self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ThemeError::Unknown(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("use_theme must be used within a ThemeProvider")]
    MissingProvider,
    #[error("unknown theme: {0}")]
    Unknown(String),
    #[error("theme storage is not available")]
    StorageUnavailable,
    #[error("theme storage failed: {0}")]
    Storage(String),
}

/// String key-value persistence, `localStorage` in the browser.
pub trait ThemeStorage: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn store(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Class list of the root presentation element.
pub trait MarkerTarget: Send + Sync {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
}

/// In-memory storage. Clones share the same map, so a new store built from a
/// clone sees what an earlier store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn get(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        lock(&self.entries).insert(key.to_string(), value.to_string());
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.get(key))
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.insert(key, value);
        Ok(())
    }
}

/// In-memory class list with shared clones, like [`MemoryStorage`].
#[derive(Debug, Clone, Default)]
pub struct ClassSet {
    classes: Arc<Mutex<BTreeSet<String>>>,
}

impl ClassSet {
    pub fn classes(&self) -> Vec<String> {
        lock(&self.classes).iter().cloned().collect()
    }

    pub fn contains(&self, class: &str) -> bool {
        lock(&self.classes).contains(class)
    }
}

impl MarkerTarget for ClassSet {
    fn add_class(&mut self, class: &str) {
        lock(&self.classes).insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        lock(&self.classes).remove(class);
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the active theme and keeps storage and the root marker in step.
pub struct ThemeStore {
    theme: Theme,
    storage: Box<dyn ThemeStorage>,
    marker: Box<dyn MarkerTarget>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Starts at [`DEFAULT_THEME`] without touching storage or the marker.
    pub fn new(storage: impl ThemeStorage + 'static, marker: impl MarkerTarget + 'static) -> Self {
        Self {
            theme: DEFAULT_THEME,
            storage: Box::new(storage),
            marker: Box::new(marker),
        }
    }

    /// Adopts the persisted theme when it names a known theme, then commits
    /// whichever theme is active.
    pub fn activate(&mut self) -> Theme {
        match self.storage.load(STORAGE_KEY) {
            Ok(Some(saved)) => match saved.parse::<Theme>() {
                Ok(theme) => self.theme = theme,
                Err(e) => log::debug!("ignoring persisted theme: {e}"),
            },
            Ok(None) => {}
            Err(e) => log::warn!("could not read persisted theme: {e}"),
        }
        let theme = self.theme;
        self.set_theme(theme);
        theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches to `theme`. Storage is written before this returns; a failed
    /// write is logged and the switch still happens.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.storage.store(STORAGE_KEY, theme.as_str()) {
            log::warn!("could not persist theme {theme}: {e}");
        }
        for other in Theme::ALL {
            self.marker.remove_class(&other.marker_class());
        }
        self.marker.add_class(&theme.marker_class());
    }
}
