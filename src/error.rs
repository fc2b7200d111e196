//! Error type shared by configuration loading and DOM wiring.
//!
//! None of these reach the visitor. The adapter logs them and degrades:
//! a carousel that fails to wire is skipped, a bad config falls back to
//! defaults, and a missing control simply stays inert.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while configuring or wiring a page component.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required element matched nothing on the page.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// A carousel track has no slides, so there is nothing to cycle.
    #[error("carousel track has no slides")]
    NoSlides,
    /// The embedded configuration is not valid JSON for [`crate::config::Config`].
    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),
    /// The configuration parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
