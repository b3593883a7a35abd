//! Error values surfaced to callers of the client
//!
//! Every call ends in one of three ways: the data, a [`Redirect`] (no session,
//! expired session, missing role), or a normalized [`ApiError`] for the UI to
//! render.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::http::HttpResponse;
use crate::core::navigation::Redirect;

/// Normalized failure of an API call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    /// HTTP status, absent for transport failures
    pub status: Option<u16>,
    /// Server-supplied structured details (per-field errors for validation failures)
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            details: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Build an error from a failed response.
    ///
    /// The message comes from the body's `error`, then `message`, then falls
    /// back to `HTTP <status>`.
    pub fn from_response(response: &HttpResponse) -> Self {
        let body = response.json_lenient();
        let message = body
            .as_ref()
            .and_then(|b| non_empty_str(b, "error").or_else(|| non_empty_str(b, "message")))
            .map(String::from)
            .unwrap_or_else(|| format!("HTTP {}", response.status));
        let details = body
            .and_then(|mut b| b.get_mut("details").map(Value::take))
            .filter(|d| !d.is_null());

        Self {
            message,
            status: Some(response.status),
            details,
        }
    }

    /// Transport failure (the request never got a response)
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::new(format!("Network error: {}", err))
    }

    /// Per-field messages when `details` is an object
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        match &self.details {
            Some(Value::Object(map)) => map
                .iter()
                .map(|(field, message)| {
                    let text = match message {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (field.clone(), text)
                })
                .collect(),
            _ => BTreeMap::new(),
        }
    }

    /// `details` when the server sent a plain string
    pub fn detail_message(&self) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

pub(crate) fn non_empty_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Outcome of a failed client call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The user was sent to another page
    #[error("{0}")]
    Redirect(Redirect),
    /// The request failed and the caller should show the error
    #[error(transparent)]
    Failed(#[from] ApiError),
}

impl ClientError {
    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            ClientError::Redirect(redirect) => Some(redirect),
            ClientError::Failed(_) => None,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Failed(err) => Some(err),
            ClientError::Redirect(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.api_error().and_then(|e| e.status)
    }
}

impl From<Redirect> for ClientError {
    fn from(redirect: Redirect) -> Self {
        ClientError::Redirect(redirect)
    }
}
