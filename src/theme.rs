//! Light/dark theme switching with a persisted preference.
//!
//! The resolved theme comes from the stored preference when one exists, and
//! from the system color-scheme signal otherwise. That signal is read once
//! at startup; later system changes are not tracked. After every toggle the
//! applied marker and the stored value agree.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::preference::PreferenceStore;

/// The two page themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Interpret a stored value.
    ///
    /// `"dark"` selects dark and any other non-empty value selects light.
    /// Absent or empty means no preference was recorded.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") => None,
            Some("dark") => Some(Self::Dark),
            Some(_) => Some(Self::Light),
        }
    }

    /// Stored preference first, then the system signal, then light.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        Self::from_stored(stored).unwrap_or(if prefers_dark { Self::Dark } else { Self::Light })
    }
}

/// Surface that displays the theme: the document marker class and the
/// toggle icon.
pub trait ThemeView {
    fn apply(&mut self, theme: Theme);
}

/// Owns the current theme and keeps view and store in step.
pub struct ThemeController<S: PreferenceStore, V: ThemeView> {
    store: S,
    view: V,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore, V: ThemeView> ThemeController<S, V> {
    /// Resolve the starting theme and apply it. Reads the store, never writes.
    #[must_use]
    pub fn initialize(store: S, mut view: V, key: impl Into<String>, prefers_dark: bool) -> Self {
        let key = key.into();
        let current = Theme::resolve(store.get(&key).as_deref(), prefers_dark);
        view.apply(current);
        log::info!("theme: initialized to {}", current.as_str());
        Self { store, view, key, current }
    }

    /// Flip the theme, persist it, and update the view. One store write per call.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(&self.key, self.current.as_str());
        self.view.apply(self.current);
        log::debug!("theme: toggled to {}", self.current.as_str());
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }
}
