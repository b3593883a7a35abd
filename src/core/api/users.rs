//! Member endpoints, all behind the session

use crate::core::api::models::{
    MessageResponse, Page, SearchField, UserRequest, UserResponse, UserUpdateRequest,
};
use crate::core::api::with_json;
use crate::core::client::AuthClient;
use crate::core::error::ClientError;
use crate::core::http::{HttpRequest, HttpTransport};
use crate::core::navigation::Navigator;
use crate::core::storage::KeyValueStore;

const MEMBERS_PATH: &str = "/rest/members";
const REGISTER_PATH: &str = "/auth/register-user";

pub struct UserApi<'a, S, T, N> {
    client: &'a AuthClient<S, T, N>,
}

impl<'a, S, T, N> UserApi<'a, S, T, N>
where
    S: KeyValueStore,
    T: HttpTransport,
    N: Navigator,
{
    pub fn new(client: &'a AuthClient<S, T, N>) -> Self {
        Self { client }
    }

    /// The logged-in member
    pub async fn me(&self) -> Result<UserResponse, ClientError> {
        self.client
            .call(HttpRequest::get(format!("{}/me", MEMBERS_PATH)))
            .await
    }

    pub async fn all(&self, page: u32, size: u32) -> Result<Page<UserResponse>, ClientError> {
        let url = format!("{}/all?page={}&size={}", MEMBERS_PATH, page, size);
        self.client.call(HttpRequest::get(url)).await
    }

    /// Search members by email or name
    pub async fn search(
        &self,
        query: &str,
        field: SearchField,
        page: u32,
        size: u32,
    ) -> Result<Page<UserResponse>, ClientError> {
        self.client
            .call(HttpRequest::get(search_url(query, field, page, size)))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<UserResponse, ClientError> {
        self.client.call(HttpRequest::get(member_url(id))).await
    }

    pub async fn update(
        &self,
        id: &str,
        request: &UserUpdateRequest,
    ) -> Result<UserResponse, ClientError> {
        let request = with_json(HttpRequest::put(member_url(id)), request)?;
        self.client.call(request).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.client.call(HttpRequest::delete(member_url(id))).await
    }

    /// Create a member on behalf of an administrator
    pub async fn create(&self, request: &UserRequest) -> Result<MessageResponse, ClientError> {
        let request = with_json(HttpRequest::post(REGISTER_PATH), request)?;
        let message: Option<MessageResponse> = self.client.call(request).await?;
        Ok(message.unwrap_or_default())
    }
}

fn member_url(id: &str) -> String {
    format!("{}/{}", MEMBERS_PATH, urlencoding::encode(id))
}

fn search_url(query: &str, field: SearchField, page: u32, size: u32) -> String {
    format!(
        "{}/search?field={}&page={}&size={}&{}={}",
        MEMBERS_PATH,
        field.as_str(),
        page,
        size,
        field.as_str(),
        urlencoding::encode(query)
    )
}
