//! Page configuration.
//!
//! Every field has a default matching the stock page markup, so a page with
//! no embedded configuration behaves exactly like one that spells out the
//! defaults. A page may override any subset of fields by embedding JSON in
//! an element with id `showcase-config`:
//!
//! ```html
//! <script id="showcase-config" type="application/json">
//!   { "autoPlayIntervalMs": 7000, "classes": { "darkMode": "theme-dark" } }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::Error;

/// Top-level page configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Key under which the theme preference is persisted.
    pub theme_storage_key: String,
    /// Delay between automatic carousel advances.
    pub auto_play_interval_ms: u32,
    /// Reveal trigger sits at `height - height / reveal_divisor`.
    pub reveal_divisor: f64,
    pub selectors: Selectors,
    pub classes: Classes,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            auto_play_interval_ms: consts::AUTO_PLAY_INTERVAL_MS,
            reveal_divisor: consts::REVEAL_DIVISOR,
            selectors: Selectors::default(),
            classes: Classes::default(),
        }
    }
}

impl Config {
    /// Configuration for a page, given the text of its config element if any.
    ///
    /// No element yields the defaults. An override that fails to parse or
    /// validate is logged and also yields the defaults.
    #[must_use]
    pub fn from_page(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("using default config: {err}");
                Self::default()
            }
        }
    }

    /// Parse and validate a JSON override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed JSON or unknown fields, and
    /// [`Error::InvalidConfig`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the components cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), Error> {
        if self.auto_play_interval_ms == 0 {
            return Err(Error::InvalidConfig("autoPlayIntervalMs must be positive".to_owned()));
        }
        if !(self.reveal_divisor.is_finite() && self.reveal_divisor > 0.0) {
            return Err(Error::InvalidConfig("revealDivisor must be a positive number".to_owned()));
        }
        if self.theme_storage_key.is_empty() {
            return Err(Error::InvalidConfig("themeStorageKey must not be empty".to_owned()));
        }
        Ok(())
    }
}

/// CSS selectors locating each component's elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Selectors {
    pub theme_toggle: String,
    pub nav_menu: String,
    pub hamburger: String,
    /// Matched inside the nav menu.
    pub nav_link: String,
    pub reveal: String,
    pub carousel_container: String,
    /// Matched inside each carousel container.
    pub carousel_track: String,
    pub carousel_prev: String,
    pub carousel_next: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: consts::THEME_TOGGLE_SELECTOR.to_owned(),
            nav_menu: consts::NAV_MENU_SELECTOR.to_owned(),
            hamburger: consts::HAMBURGER_SELECTOR.to_owned(),
            nav_link: consts::NAV_LINK_SELECTOR.to_owned(),
            reveal: consts::REVEAL_SELECTOR.to_owned(),
            carousel_container: consts::CAROUSEL_CONTAINER_SELECTOR.to_owned(),
            carousel_track: consts::CAROUSEL_TRACK_SELECTOR.to_owned(),
            carousel_prev: consts::CAROUSEL_PREV_SELECTOR.to_owned(),
            carousel_next: consts::CAROUSEL_NEXT_SELECTOR.to_owned(),
        }
    }
}

/// Marker classes toggled by the components.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Classes {
    /// Applied to the body while the dark theme is active.
    pub dark_mode: String,
    /// Applied to the open menu, the pressed hamburger, and revealed elements.
    pub active: String,
    /// Applied to the body while the menu is open.
    pub scroll_lock: String,
    pub icon_dark: String,
    pub icon_light: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            dark_mode: consts::DARK_MODE_CLASS.to_owned(),
            active: consts::ACTIVE_CLASS.to_owned(),
            scroll_lock: consts::SCROLL_LOCK_CLASS.to_owned(),
            icon_dark: consts::ICON_DARK.to_owned(),
            icon_light: consts::ICON_LIGHT.to_owned(),
        }
    }
}
