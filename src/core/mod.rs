//! Client-side logic for the member-management app, independent of the UI

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod modal;
pub mod navigation;
pub mod storage;
pub mod theme;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use api::{AuthApi, UserApi};
pub use auth::{Claims, SessionStore, decode_claims};
pub use client::AuthClient;
pub use config::ClientConfig;
pub use error::{ApiError, ClientError};
pub use navigation::{Navigator, Redirect, RedirectReason};
pub use storage::{KeyValueStore, MemoryStorage, StorageError};
pub use theme::{Theme, ThemeService, ThemeSurface};
