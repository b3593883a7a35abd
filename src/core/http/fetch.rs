//! Browser `fetch` transport built on `gloo-net`

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use super::{
    CONTENT_TYPE, FORM_URLENCODED, HttpRequest, HttpResponse, HttpTransport, Method,
    TransportError,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match &request.body {
            Some(body) => {
                if body.is_form() && !request.has_header(CONTENT_TYPE) {
                    builder = builder.header(CONTENT_TYPE, FORM_URLENCODED);
                }
                builder.body(body.encode())
            }
            None => builder.build(),
        }
        .map_err(|e| TransportError(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
