//! Mock HTTP client for testing.
//!
//! Responses are keyed by method and URL and consumed in order, so a test
//! can script "404 first, 200 afterwards" for the same document URL.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST or DELETE)
    pub method: String,
    pub url: String,
    pub headers: Headers,
    /// Request body (POST only)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

impl MockResponse {
    /// A response with the given status and an empty body.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::empty(status))
    }

    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(value.to_string())))
    }
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use tracker_shell::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.push_response("GET", "http://erp.test/doc", MockResponse::status(404));
/// client.push_response("GET", "http://erp.test/doc", MockResponse::status(200));
///
/// // first GET sees 404, every later GET sees 200
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Scripted responses per (method, url). The last one is sticky.
    scripted: Arc<Mutex<HashMap<(String, String), VecDeque<MockResponse>>>>,
    /// Responses for a URL regardless of method
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method` + `url`.
    pub fn push_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut scripted = self.scripted.lock().unwrap();
        scripted
            .entry((method.to_string(), url.to_string()))
            .or_default()
            .push_back(response);
    }

    /// Set a response for a URL, any method.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.get_requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn next_response(&self, method: &str, url: &str) -> Option<MockResponse> {
        {
            let mut scripted = self.scripted.lock().unwrap();
            if let Some(queue) = scripted.get_mut(&(method.to_string(), url.to_string())) {
                if queue.len() > 1 {
                    return queue.pop_front();
                }
                if let Some(last) = queue.front() {
                    return Some(last.clone());
                }
            }
        }

        if let Some(response) = self.responses.lock().unwrap().get(url) {
            return Some(response.clone());
        }

        self.default_response.lock().unwrap().clone()
    }

    fn respond(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        match self.next_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond("GET", url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond("POST", url)
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("DELETE", url, headers, None);
        self.respond("DELETE", url)
    }
}
