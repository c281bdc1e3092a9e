//! Fake transport serving queued responses.

use async_trait::async_trait;
use simple_openai_client::{HttpRequest, HttpResponse, HttpTransport};
use simple_openai_error::{HttpError, OpenAIResult};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Records every request and answers with the next queued response.
#[derive(Debug, Default)]
pub struct FixtureTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FixtureTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a response.
    pub fn respond_with(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(HttpResponse::new(status, body));
    }

    /// Queues a 200 response whose body is the named fixture.
    pub fn respond_with_fixture(&self, name: &str) {
        self.respond_with(200, super::fixture(name));
    }

    /// Requests seen so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> HttpRequest {
        self.requests()
            .pop()
            .expect("at least one request was sent")
    }
}

#[async_trait]
impl HttpTransport for FixtureTransport {
    async fn send(&self, request: HttpRequest) -> OpenAIResult<HttpResponse> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request);
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .ok_or_else(|| HttpError::new("No response queued").into())
    }
}
