//! Page navigation seam
//!
//! Two outcomes of an API call move the user to another page: having no
//! session and having it rejected by the server. The client reports both as a
//! typed [`Redirect`] and also hands the location to a [`Navigator`], which in
//! the browser assigns `window.location` and elsewhere just records it.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Why the client is sending the user elsewhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectReason {
    /// No token is stored; the request was never sent
    NoSession,
    /// The server answered 401 or 403; the token was cleared
    SessionExpired { status: u16 },
    /// The session lacks a role the page requires
    MissingRole { role: String },
    /// The user logged out
    LoggedOut,
}

impl fmt::Display for RedirectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedirectReason::NoSession => write!(f, "No token"),
            RedirectReason::SessionExpired { .. } => write!(f, "Unauthorized"),
            RedirectReason::MissingRole { role } => write!(f, "Missing role {}", role),
            RedirectReason::LoggedOut => write!(f, "Logged out"),
        }
    }
}

/// A navigation the client decided on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub reason: RedirectReason,
    pub location: String,
}

impl Redirect {
    pub fn new(reason: RedirectReason, location: impl Into<String>) -> Self {
        Self {
            reason,
            location: location.into(),
        }
    }
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (redirecting to {})", self.reason, self.location)
    }
}

/// Moves the user to another location
pub trait Navigator {
    fn redirect(&self, location: &str);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn redirect(&self, location: &str) {
        (**self).redirect(location)
    }
}

/// Navigator for environments without a page: logs and records locations.
#[derive(Debug, Clone, Default)]
pub struct HeadlessNavigator {
    history: Arc<Mutex<Vec<String>>>,
}

impl HeadlessNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every location redirected to, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|h| h.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.history.lock().ok().and_then(|h| h.last().cloned())
    }
}

impl Navigator for HeadlessNavigator {
    fn redirect(&self, location: &str) {
        tracing::info!(location, "redirect requested");
        if let Ok(mut history) = self.history.lock() {
            history.push(location.to_string());
        }
    }
}

/// Assigns `window.location.href`
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowNavigator;

#[cfg(feature = "hydrate")]
impl Navigator for WindowNavigator {
    fn redirect(&self, location: &str) {
        if let Some(window) = web_sys::window()
            && window.location().set_href(location).is_err()
        {
            tracing::warn!(location, "failed to navigate");
        }
    }
}
