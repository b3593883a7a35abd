//! Theme context for the light/dark toggle
//!
//! Provides:
//! - ThemeContext holding the effective theme in a signal
//! - ThemeToggle button (`#theme-toggle`)
//! - In the browser, persistence and `data-theme` through the theme service

use leptos::prelude::*;

use crate::core::theme::{THEME_TOGGLE_ID, Theme};

/// Theme service whose toggle label is left to [`ThemeToggle`]'s signal
#[cfg(feature = "hydrate")]
fn document_service() -> crate::core::theme::ThemeService<
    crate::core::storage::LocalStorage,
    crate::core::theme::ExternallyLabelled<crate::core::theme::DocumentThemeSurface>,
> {
    crate::core::theme::ThemeService::new(
        crate::core::storage::LocalStorage,
        crate::core::theme::ExternallyLabelled(crate::core::theme::DocumentThemeSurface),
        crate::core::ClientConfig::default().theme_key,
    )
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Effective theme
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Switch to `theme` and persist it
    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);

        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = document_service().apply_theme(theme) {
                tracing::warn!(error = %e, "failed to persist theme");
            }
        }
    }

    pub fn toggle(&self) {
        self.set(self.theme.get_untracked().toggled());
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }
}

/// Stored or system theme, applied to the document on the way
fn initial_theme() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        document_service().init_theme()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext {
        theme: RwSignal::new(initial_theme()),
    };
    provide_context(ctx);
    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Button flipping the theme, labelled with the action it performs
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme_context();

    view! {
        <button
            id=THEME_TOGGLE_ID
            type="button"
            class="theme-toggle"
            aria-pressed=move || ctx.is_dark().to_string()
            on:click=move |_| ctx.toggle()
        >
            {move || ctx.theme.get().toggle_label()}
        </button>
    }
}
