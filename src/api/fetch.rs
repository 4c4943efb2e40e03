//! Browser Fetch Transport
//!
//! `HttpTransport` over `gloo_net::http`.

use async_trait::async_trait;
use gloo_net::http::RequestBuilder;

use super::{HttpRequest, HttpResponse, HttpTransport, Method};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl From<Method> for gloo_net::http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => gloo_net::http::Method::GET,
            Method::Post => gloo_net::http::Method::POST,
            Method::Put => gloo_net::http::Method::PUT,
            Method::Delete => gloo_net::http::Method::DELETE,
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let builder = RequestBuilder::new(&request.url).method(request.method.into());
        let prepared = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body),
            None => builder.build(),
        }
        .map_err(|e| format!("Invalid request: {}", e))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        Ok(HttpResponse { status, body })
    }
}
