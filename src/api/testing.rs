//! Scripted transport for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse, HttpTransport, Method};

type Scripted = (Option<Method>, Result<HttpResponse, String>);

/// Replays queued responses and records every request.
///
/// Each `send` yields once before answering, so joined futures interleave
/// the way overlapping browser actions do.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: Option<Method>, response: Result<HttpResponse, String>) -> &Self {
        self.responses.borrow_mut().push_back((method, response));
        self
    }

    /// Answer the next request, whatever its method
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.push(None, Ok(HttpResponse { status, body: body.to_string() }))
    }

    /// Answer the next request made with `method`
    pub fn respond_to(&self, method: Method, status: u16, body: &str) -> &Self {
        self.push(Some(method), Ok(HttpResponse { status, body: body.to_string() }))
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.push(None, Err(message.to_string()))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_body_json(&self) -> serde_json::Value {
        let requests = self.requests.borrow();
        let body = requests
            .last()
            .and_then(|r| r.body.as_deref())
            .expect("last request has a body");
        serde_json::from_str(body).expect("body is JSON")
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let method = request.method;
        self.requests.borrow_mut().push(request);
        tokio::task::yield_now().await;

        let mut responses = self.responses.borrow_mut();
        let pos = responses
            .iter()
            .position(|(m, _)| m.map_or(true, |m| m == method));
        pos.and_then(|i| responses.remove(i))
            .map(|(_, response)| response)
            .unwrap_or_else(|| Err("no scripted response".to_string()))
    }
}
