//! Shared fixtures for client tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

use crate::core::client::AuthClient;
use crate::core::config::ClientConfig;
use crate::core::http::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::core::navigation::HeadlessNavigator;
use crate::core::storage::{KeyValueStore, MemoryStorage};

pub type TestClient = AuthClient<MemoryStorage, ScriptedTransport, HeadlessNavigator>;

/// Transport answering from a queue and recording every request
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response. Returns a handle on the same queue for chaining.
    pub fn respond(&self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
        self.clone()
    }

    pub fn fail(&self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_string())));
        self.clone()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_string())))
    }
}

/// Everything a test needs to observe a client
pub struct Harness {
    pub client: TestClient,
    pub storage: MemoryStorage,
    pub transport: ScriptedTransport,
    pub navigator: HeadlessNavigator,
}

impl Harness {
    pub fn new(token: Option<&str>, transport: ScriptedTransport) -> Self {
        let config = ClientConfig::default();
        let storage = MemoryStorage::new();
        if let Some(token) = token {
            storage.set(&config.token_key, token).unwrap();
        }
        let navigator = HeadlessNavigator::new();
        let client = AuthClient::new(
            config,
            storage.clone(),
            transport.clone(),
            navigator.clone(),
        );
        Self {
            client,
            storage,
            transport,
            navigator,
        }
    }

    pub fn stored_token(&self) -> Option<String> {
        self.storage.get("jwt")
    }
}

/// Unsigned compact token carrying `payload`
pub fn token_with(payload: &Value) -> String {
    format!(
        "eyJhbGciOiJIUzI1NiJ9.{}.sig",
        URL_SAFE_NO_PAD.encode(payload.to_string())
    )
}
