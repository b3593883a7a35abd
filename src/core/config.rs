//! Client configuration.
//!
//! Defaults match the browser deployment (same-origin API, `/login` and
//! `/dashboard` pages). Native callers load overrides with
//! `ClientConfig::from_env()` after calling `dotenvy::dotenv()`.

/// Default location for unauthenticated users
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Default location for authenticated users
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

/// Storage key holding the bearer token
pub const DEFAULT_TOKEN_KEY: &str = "jwt";

/// Storage key holding the theme preference
pub const DEFAULT_THEME_KEY: &str = "theme";

pub const ENV_BASE_URL: &str = "KITCHENSINK_BASE_URL";
pub const ENV_LOGIN_PATH: &str = "KITCHENSINK_LOGIN_PATH";
pub const ENV_LANDING_PATH: &str = "KITCHENSINK_LANDING_PATH";
pub const ENV_TOKEN_KEY: &str = "KITCHENSINK_TOKEN_KEY";
pub const ENV_THEME_KEY: &str = "KITCHENSINK_THEME_KEY";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("base url must use http:// or https:// and include a host")]
    InvalidBaseUrl,
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin prepended to API paths. Empty means same-origin (relative URLs).
    pub base_url: String,
    /// Redirect target when there is no usable session
    pub login_path: String,
    /// Redirect target for authenticated users lacking a role
    pub landing_path: String,
    /// Storage key of the session token
    pub token_key: String,
    /// Storage key of the theme preference
    pub theme_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            landing_path: DEFAULT_LANDING_PATH.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// Same-origin configuration with a custom API origin
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let base_url = match env_non_empty(ENV_BASE_URL) {
            Some(raw) => normalize_base_url(&raw)?,
            None => defaults.base_url,
        };

        Ok(Self {
            base_url,
            login_path: env_non_empty(ENV_LOGIN_PATH).unwrap_or(defaults.login_path),
            landing_path: env_non_empty(ENV_LANDING_PATH).unwrap_or(defaults.landing_path),
            token_key: env_non_empty(ENV_TOKEN_KEY).unwrap_or(defaults.token_key),
            theme_key: env_non_empty(ENV_THEME_KEY).unwrap_or(defaults.theme_key),
        })
    }

    /// Resolve an API path against the base URL
    pub fn url(&self, path: &str) -> String {
        if self.base_url.is_empty() || path.starts_with("http://") || path.starts_with("https://")
        {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Trim a base URL and drop its trailing slash.
///
/// Empty input is accepted and means same-origin.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let Some((scheme, remainder)) = trimmed.split_once("://") else {
        return Err(ConfigError::InvalidBaseUrl);
    };
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidBaseUrl);
    }
    if remainder.trim().is_empty() || remainder.starts_with('/') {
        return Err(ConfigError::InvalidBaseUrl);
    }
    Ok(trimmed.to_string())
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
