//! Light/dark theme preference and the storage it is persisted in.
//!
//! The store is a capability handed to the UI: it reads and writes a single
//! string. Browsers get [`LocalStorageThemeStore`]; anything else (tests,
//! non-browser hosts) can supply its own [`ThemeStore`].

use log::{info, warn};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal persisted in the store and used as the root CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Failure writing the preference.
#[derive(Debug)]
pub enum StoreError {
    /// No storage backend in this environment.
    Unavailable,
    /// The backend refused the write (quota, privacy mode, ...).
    WriteFailed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "Theme storage is not available"),
            StoreError::WriteFailed(reason) => write!(f, "Failed to save theme: {}", reason),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read/write access to the one persisted preference string.
pub trait ThemeStore {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str) -> Result<(), StoreError>;
}

/// Resolve the starting theme: the stored one if recognizable, else `default`.
pub fn initial_theme(store: &dyn ThemeStore, default: Theme) -> Theme {
    match store.read() {
        Some(stored) => stored.parse().unwrap_or_else(|e| {
            warn!("{}, falling back to {}", e, default);
            default
        }),
        None => default,
    }
}

/// Write `theme` to the store.
pub fn persist_theme(store: &dyn ThemeStore, theme: Theme) -> Result<(), StoreError> {
    store.write(theme.as_str())?;
    info!("Theme set to {}", theme);
    Ok(())
}

/// [`ThemeStore`] backed by `window.localStorage` under a fixed key.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStorageThemeStore {
    key: String,
}

impl LocalStorageThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(&self.key, value)
            .map_err(|e| StoreError::WriteFailed(format!("{:?}", e)))
    }
}
