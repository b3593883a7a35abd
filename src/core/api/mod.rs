//! REST facade over [`AuthClient`]
//!
//! Two namespaces: [`UserApi`] for the protected member endpoints and
//! [`AuthApi`] for login and registration. Both turn HTTP failures into
//! [`ApiError`] values.

pub mod auth;
pub mod models;
pub mod users;

pub use auth::{
    AuthApi, INVALID_CREDENTIALS, NO_TOKEN_RETURNED, REGISTRATION_DISABLED, REGISTRATION_FAILED,
};
pub use models::{
    LoginRequest, LoginResponse, MessageResponse, Page, SearchField, UserRequest, UserResponse,
    UserUpdateRequest,
};
pub use users::UserApi;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::client::AuthClient;
use crate::core::error::{ApiError, ClientError};
use crate::core::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::core::navigation::Navigator;
use crate::core::storage::KeyValueStore;

/// Decode a 2xx body.
///
/// 204 and blank bodies decode from JSON `null`, so `()` and `Option<T>`
/// targets receive the absent result.
pub fn decode_success<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    let parsed = if response.status == 204 || response.body.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(&response.body)
    };
    parsed.map_err(|e| {
        ApiError::new(format!("Invalid response body: {}", e)).with_status(response.status)
    })
}

/// 2xx decodes the body, anything else becomes an [`ApiError`]
pub fn decode_response<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    if response.ok() {
        decode_success(response)
    } else {
        Err(ApiError::from_response(response))
    }
}

pub(crate) fn with_json<B: Serialize + ?Sized>(
    request: HttpRequest,
    body: &B,
) -> Result<HttpRequest, ApiError> {
    request
        .json(body)
        .map_err(|e| ApiError::new(format!("Invalid request body: {}", e)))
}

impl<S, T, N> AuthClient<S, T, N>
where
    S: KeyValueStore,
    T: HttpTransport,
    N: Navigator,
{
    /// Authenticated JSON call
    pub async fn call<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ClientError> {
        let url = request.url.clone();
        let response = self.send(request).await?;
        decode_response(&response).map_err(|e| {
            tracing::error!(url = %url, status = ?e.status, error = %e, "API call failed");
            ClientError::Failed(e)
        })
    }

    pub fn users(&self) -> UserApi<'_, S, T, N> {
        UserApi::new(self)
    }

    pub fn auth(&self) -> AuthApi<'_, S, T, N> {
        AuthApi::new(self)
    }
}
