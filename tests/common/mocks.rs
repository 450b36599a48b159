//! Mock configurations for test fixtures.
//!
//! Re-exports the mock HTTP client from `bugboard::adapters::mock` and adds
//! a builder for wiring up canned responses.

pub use bugboard::adapters::mock::{MockHttpClient, MockResponse};
pub use bugboard::traits::{HttpError, Response};

use serde_json::Value;

/// Builder for a [`MockHttpClient`] with canned responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Answer `method url` with `status` and a JSON body.
    pub fn with_json_response(self, method: &str, url: &str, status: u16, json: &Value) -> Self {
        self.client
            .set_response(method, url, MockResponse::json(status, json));
        self
    }

    /// Answer `method url` with `status` and no body.
    pub fn with_status(self, method: &str, url: &str, status: u16) -> Self {
        self.client
            .set_response(method, url, MockResponse::status(status));
        self
    }

    /// Fail `method url` before any response arrives.
    pub fn with_error(self, method: &str, url: &str, error: HttpError) -> Self {
        self.client
            .set_response(method, url, MockResponse::Error(error));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
