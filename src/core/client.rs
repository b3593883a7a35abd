//! Authenticated request wrapper
//!
//! Every call to a protected endpoint goes through [`AuthClient::send`]:
//! - no stored token: redirect to the login page, nothing is sent
//! - the bearer token and a JSON content type are added when missing
//! - a 401 or 403 answer clears the token and redirects to the login page,
//!   whatever the reason the server had
//! - every other response is handed back untouched

use crate::core::auth::SessionStore;
use crate::core::config::ClientConfig;
use crate::core::error::{ApiError, ClientError};
use crate::core::http::{AUTHORIZATION, HttpRequest, HttpResponse, HttpTransport};
use crate::core::navigation::{Navigator, Redirect, RedirectReason};
use crate::core::storage::KeyValueStore;

/// Session-aware HTTP client
pub struct AuthClient<S, T, N> {
    config: ClientConfig,
    session: SessionStore<S>,
    transport: T,
    navigator: N,
}

impl<S, T, N> AuthClient<S, T, N>
where
    S: KeyValueStore,
    T: HttpTransport,
    N: Navigator,
{
    pub fn new(config: ClientConfig, storage: S, transport: T, navigator: N) -> Self {
        let session = SessionStore::new(storage, config.token_key.clone());
        Self {
            config,
            session,
            transport,
            navigator,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Send a request to a protected endpoint.
    pub async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let Some(token) = self.session.token() else {
            tracing::warn!(url = %request.url, "no session token, redirecting to login");
            return Err(self.navigate(RedirectReason::NoSession, &self.config.login_path));
        };

        request.set_default_header(AUTHORIZATION, format!("Bearer {}", token));
        request.infer_content_type();

        let response = self.dispatch(request).await?;

        if response.is_auth_failure() {
            tracing::warn!(status = response.status, "session rejected by server");
            if let Err(e) = self.session.clear() {
                tracing::warn!(error = %e, "failed to clear session token");
            }
            return Err(self.navigate(
                RedirectReason::SessionExpired {
                    status: response.status,
                },
                &self.config.login_path,
            ));
        }

        Ok(response)
    }

    /// Send a request that needs no session (login, self-registration).
    pub async fn send_public(&self, mut request: HttpRequest) -> Result<HttpResponse, ClientError> {
        request.infer_content_type();
        self.dispatch(request).await
    }

    /// Forget the session and go to the login page
    pub fn logout(&self) -> Redirect {
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "failed to clear session token");
        }
        tracing::info!("logged out");
        self.navigator.redirect(&self.config.login_path);
        Redirect::new(RedirectReason::LoggedOut, self.config.login_path.clone())
    }

    pub(crate) fn navigate(&self, reason: RedirectReason, location: &str) -> ClientError {
        self.navigator.redirect(location);
        ClientError::Redirect(Redirect::new(reason, location))
    }

    async fn dispatch(&self, mut request: HttpRequest) -> Result<HttpResponse, ClientError> {
        request.url = self.config.url(&request.url);
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!(error = %e, "request failed");
            ApiError::network(e)
        })?;

        tracing::debug!(status = response.status, "response received");
        Ok(response)
    }
}

/// Client wired to `localStorage`, `fetch` and `window.location`
#[cfg(feature = "hydrate")]
pub type BrowserClient = AuthClient<
    crate::core::storage::LocalStorage,
    crate::core::http::FetchTransport,
    crate::core::navigation::WindowNavigator,
>;

/// Same-origin browser client with default configuration
#[cfg(feature = "hydrate")]
pub fn browser_client() -> BrowserClient {
    AuthClient::new(
        ClientConfig::default(),
        crate::core::storage::LocalStorage,
        crate::core::http::FetchTransport,
        crate::core::navigation::WindowNavigator,
    )
}
