//! Shared constants for the showcase crate.
//!
//! These are the defaults baked into [`crate::config::Config`]; a page can
//! override any of them through its embedded JSON configuration.

// ── Carousel ────────────────────────────────────────────────────

/// Delay between automatic slide advances, in milliseconds.
pub const AUTO_PLAY_INTERVAL_MS: u32 = 5000;

/// Horizontal distance one slide occupies, as a percentage of the track width.
pub const SLIDE_WIDTH_PERCENT: f64 = 100.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Elements reveal once their top edge rises above `height - height / divisor`.
pub const REVEAL_DIVISOR: f64 = 8.0;

// ── Theme ───────────────────────────────────────────────────────

/// Persistent storage key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query reporting the system dark-mode preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Icon classes shown inside the theme toggle.
pub const ICON_DARK: &str = "fa-moon";
pub const ICON_LIGHT: &str = "fa-sun";

// ── DOM contract ────────────────────────────────────────────────

pub const THEME_TOGGLE_SELECTOR: &str = "#theme-toggle";
pub const NAV_MENU_SELECTOR: &str = "#navMenu";
pub const HAMBURGER_SELECTOR: &str = "#hamburger";
pub const NAV_LINK_SELECTOR: &str = "a";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const CAROUSEL_CONTAINER_SELECTOR: &str = ".project-carousel-container";
pub const CAROUSEL_TRACK_SELECTOR: &str = ".carousel";
pub const CAROUSEL_PREV_SELECTOR: &str = ".carousel-prev";
pub const CAROUSEL_NEXT_SELECTOR: &str = ".carousel-next";

/// Element whose text holds the optional JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "showcase-config";

// ── Marker classes ──────────────────────────────────────────────

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLL_LOCK_CLASS: &str = "no-scroll";
