//! Page guards based on the session's roles

use crate::core::auth::claims::{Claims, decode_claims};
use crate::core::client::AuthClient;
use crate::core::error::ClientError;
use crate::core::http::HttpTransport;
use crate::core::navigation::{Navigator, RedirectReason};
use crate::core::storage::KeyValueStore;

pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const USER_DASHBOARD_PATH: &str = "/user/dashboard";

/// Dashboard matching the session's highest role
pub fn dashboard_for(claims: &Claims) -> &'static str {
    if claims.is_admin() {
        ADMIN_DASHBOARD_PATH
    } else {
        USER_DASHBOARD_PATH
    }
}

impl<S, T, N> AuthClient<S, T, N>
where
    S: KeyValueStore,
    T: HttpTransport,
    N: Navigator,
{
    /// Claims of the current token, empty when logged out or malformed
    pub fn claims(&self) -> Claims {
        self.session()
            .token()
            .map(|token| decode_claims(&token))
            .unwrap_or_default()
    }

    /// Guard a page.
    ///
    /// Without a token the user goes to the login page. With a token that lacks
    /// `required`, the user goes to the default landing page. A blank
    /// `required` is no requirement.
    pub fn require_role(&self, required: Option<&str>) -> Result<Claims, ClientError> {
        let Some(token) = self.session().token() else {
            return Err(self.navigate(RedirectReason::NoSession, &self.config().login_path));
        };

        let claims = decode_claims(&token);
        if let Some(role) = required.filter(|r| !r.trim().is_empty())
            && !claims.has_role(role)
        {
            tracing::warn!(role, "session lacks required role");
            return Err(self.navigate(
                RedirectReason::MissingRole {
                    role: role.to_string(),
                },
                &self.config().landing_path,
            ));
        }

        Ok(claims)
    }
}
