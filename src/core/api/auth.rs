//! Login and self-registration

use serde_json::Value;

use crate::core::api::models::{LoginRequest, LoginResponse, MessageResponse, UserRequest};
use crate::core::api::{decode_success, with_json};
use crate::core::client::AuthClient;
use crate::core::error::{ApiError, ClientError, non_empty_str};
use crate::core::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::core::navigation::{Navigator, Redirect};
use crate::core::storage::KeyValueStore;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const REGISTRATION_DISABLED: &str = "Registration is currently disabled by the administrator";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const NO_TOKEN_RETURNED: &str = "Login failed: no token returned";

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register-user";

pub struct AuthApi<'a, S, T, N> {
    client: &'a AuthClient<S, T, N>,
}

impl<'a, S, T, N> AuthApi<'a, S, T, N>
where
    S: KeyValueStore,
    T: HttpTransport,
    N: Navigator,
{
    pub fn new(client: &'a AuthClient<S, T, N>) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token and store it as the session
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = with_json(HttpRequest::post(LOGIN_PATH), &credentials)?;
        let response = self.client.send_public(request).await?;

        if matches!(response.status, 400 | 401) {
            tracing::warn!(status = response.status, "login rejected");
            return Err(ApiError::new(INVALID_CREDENTIALS)
                .with_status(response.status)
                .into());
        }
        if !response.ok() {
            return Err(ApiError::from_response(&response).into());
        }

        let login: Option<LoginResponse> = decode_success(&response)?;
        let Some(login) = login.filter(|l| !l.token.trim().is_empty()) else {
            return Err(ApiError::new(NO_TOKEN_RETURNED)
                .with_status(response.status)
                .into());
        };

        self.client.session().set_token(&login.token).map_err(|e| {
            tracing::error!(error = %e, "failed to store session token");
            ApiError::new(e.to_string())
        })?;
        tracing::info!("logged in");
        Ok(login)
    }

    /// Self-registration
    pub async fn register(&self, request: &UserRequest) -> Result<MessageResponse, ClientError> {
        let request = with_json(HttpRequest::post(REGISTER_PATH), request)?;
        let response = self.client.send_public(request).await?;

        if !response.ok() {
            let err = registration_error(&response);
            tracing::warn!(status = response.status, error = %err, "registration failed");
            return Err(err.into());
        }

        let message: Option<MessageResponse> = decode_success(&response)?;
        Ok(message.unwrap_or_default())
    }

    pub fn logout(&self) -> Redirect {
        self.client.logout()
    }
}

fn registration_error(response: &HttpResponse) -> ApiError {
    if response.status == 403 {
        return ApiError::new(REGISTRATION_DISABLED).with_status(response.status);
    }

    let body = response.json_lenient().unwrap_or(Value::Null);
    let message = non_empty_str(&body, "details")
        .or_else(|| non_empty_str(&body, "message"))
        .or_else(|| non_empty_str(&body, "error"))
        .unwrap_or(REGISTRATION_FAILED);

    let err = ApiError::new(message).with_status(response.status);
    match body.get("details") {
        Some(details @ Value::Object(_)) => err.with_details(details.clone()),
        _ => err,
    }
}
