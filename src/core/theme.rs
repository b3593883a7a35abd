//! Light/dark display preference
//!
//! The preference is persisted under the theme key and reflected as
//! `data-theme` on the document root. Without a stored value the system
//! color scheme decides.

use std::fmt;
use std::str::FromStr;

use crate::core::storage::{KeyValueStore, StorageError};

pub const DATA_THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// Label for a toggle control: the action that switches away from `self`
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Where a theme becomes visible
pub trait ThemeSurface {
    /// System dark-mode preference
    fn prefers_dark(&self) -> bool;
    /// Reflect the theme on the document root
    fn apply(&self, theme: Theme);
    /// Relabel the toggle control, if the page has one
    fn set_toggle_label(&self, label: &str);
}

/// Surface whose toggle control renders its own label (a reactive view):
/// applies the theme, leaves the control's text alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternallyLabelled<D>(pub D);

impl<D: ThemeSurface> ThemeSurface for ExternallyLabelled<D> {
    fn prefers_dark(&self) -> bool {
        self.0.prefers_dark()
    }

    fn apply(&self, theme: Theme) {
        self.0.apply(theme);
    }

    fn set_toggle_label(&self, _label: &str) {}
}

pub struct ThemeService<S, D> {
    storage: S,
    surface: D,
    key: String,
}

impl<S: KeyValueStore, D: ThemeSurface> ThemeService<S, D> {
    pub fn new(storage: S, surface: D, key: impl Into<String>) -> Self {
        Self {
            storage,
            surface,
            key: key.into(),
        }
    }

    /// Persisted preference. Unknown values are ignored.
    pub fn stored(&self) -> Option<Theme> {
        let value = self.storage.get(&self.key)?;
        match value.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring stored theme");
                None
            }
        }
    }

    /// Stored preference, else the system one
    pub fn current(&self) -> Theme {
        self.stored()
            .unwrap_or_else(|| Theme::from_system(self.surface.prefers_dark()))
    }

    /// Apply the effective theme on page load without persisting it
    pub fn init_theme(&self) -> Theme {
        let theme = self.current();
        self.show(theme);
        theme
    }

    /// Persist and apply
    pub fn apply_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.show(theme);
        self.storage.set(&self.key, theme.as_str())
    }

    /// Flip the effective theme. Returns the new one.
    pub fn toggle(&self) -> Result<Theme, StorageError> {
        let next = self.current().toggled();
        tracing::debug!(theme = %next, "toggling theme");
        self.apply_theme(next)?;
        Ok(next)
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    fn show(&self, theme: Theme) {
        self.surface.apply(theme);
        self.surface.set_toggle_label(theme.toggle_label());
    }
}

/// `data-theme` on `<html>`, the `#theme-toggle` text, `prefers-color-scheme`
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentThemeSurface;

#[cfg(feature = "hydrate")]
impl ThemeSurface for DocumentThemeSurface {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|query| query.matches())
    }

    fn apply(&self, theme: Theme) {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            && root
                .set_attribute(DATA_THEME_ATTRIBUTE, theme.as_str())
                .is_err()
        {
            tracing::warn!(theme = %theme, "failed to apply theme");
        }
    }

    fn set_toggle_label(&self, label: &str) {
        if let Some(toggle) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(THEME_TOGGLE_ID))
        {
            toggle.set_text_content(Some(label));
        }
    }
}

/// Theme service over `localStorage` and the current document
#[cfg(feature = "hydrate")]
pub fn browser_theme_service(
    config: &crate::core::config::ClientConfig,
) -> ThemeService<crate::core::storage::LocalStorage, DocumentThemeSurface> {
    ThemeService::new(
        crate::core::storage::LocalStorage,
        DocumentThemeSurface,
        config.theme_key.clone(),
    )
}
