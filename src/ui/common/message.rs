//! Inline status line for form results

use leptos::prelude::*;

use crate::core::error::{ApiError, ClientError};

/// CSS class for a status line
pub fn status_class(ok: bool) -> &'static str {
    if ok { "ok" } else { "error" }
}

/// Text to show for a failed call. Redirects show nothing: the page is leaving.
pub fn failure_text(err: &ClientError) -> String {
    match err {
        ClientError::Redirect(_) => String::new(),
        ClientError::Failed(ApiError { message, .. }) => message.clone(),
    }
}

/// Status line, empty when there is no message
#[component]
pub fn StatusMessage(
    #[prop(into)] message: Signal<String>,
    /// Success styling instead of error styling
    #[prop(into, default = Signal::stored(false))]
    ok: Signal<bool>,
) -> impl IntoView {
    move || {
        let text = message.get();
        (!text.is_empty()).then(|| {
            view! { <span class=status_class(ok.get())>{text}</span> }
        })
    }
}
