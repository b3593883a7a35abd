//! Kitchensink Web - client utilities for the member-management app
//!
//! Session handling, authenticated REST calls, form validation, dialogs and
//! the theme toggle, usable from the browser (WebAssembly) and natively.

pub mod core;
pub mod ui;

/// Page entry point: panic hook and the saved theme
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = crate::core::ClientConfig::default();
    let theme = crate::core::theme::browser_theme_service(&config).init_theme();
    tracing::debug!(theme = %theme, "theme initialized");
}

/// Flip the theme from page scripts. Returns the new theme name; throws
/// when the preference cannot be saved.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn toggle_theme() -> Result<String, String> {
    let config = crate::core::ClientConfig::default();
    crate::core::theme::browser_theme_service(&config)
        .toggle()
        .map(|theme| theme.as_str().to_string())
        .map_err(|e| {
            tracing::warn!(error = %e, "failed to persist theme");
            e.to_string()
        })
}
