//! In-memory connector used by the service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::api::{ApiError, Connector, Request, ResponseScheme};

enum Outcome {
    Respond(StatusCode, Vec<u8>),
    FailCall(fn() -> ApiError),
    FailRequest(fn() -> ApiError),
}

/// Records every request and answers with a canned outcome.
pub struct MockConnector {
    requests: Mutex<Vec<Request>>,
    calls: Mutex<usize>,
    outcome: Outcome,
}

impl MockConnector {
    fn with(outcome: Outcome) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            calls: Mutex::new(0),
            outcome,
        }
    }

    /// Answer every call with `200 OK` and `body`.
    pub fn json(body: Value) -> Arc<Self> {
        let bytes = serde_json::to_vec(&body).unwrap();
        Arc::new(Self::with(Outcome::Respond(StatusCode::OK, bytes)))
    }

    /// Answer every call with an empty body and `status`.
    pub fn empty(status: u16) -> Arc<Self> {
        let status = StatusCode::from_u16(status).unwrap();
        Arc::new(Self::with(Outcome::Respond(status, Vec::new())))
    }

    /// Fail every call with the error built by `make`.
    pub fn failing(make: fn() -> ApiError) -> Arc<Self> {
        Arc::new(Self::with(Outcome::FailCall(make)))
    }

    /// Fail while building the request.
    pub fn failing_request(make: fn() -> ApiError) -> Arc<Self> {
        Arc::new(Self::with(Outcome::FailRequest(make)))
    }

    /// Every request built so far.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last(&self) -> Request {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was built")
    }

    /// The endpoint of the most recent request.
    pub fn endpoint(&self) -> String {
        self.last().url
    }

    /// Number of executed calls.
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// Whether the connector was never touched.
    pub fn untouched(&self) -> bool {
        self.requests.lock().unwrap().is_empty() && self.calls() == 0
    }
}

#[async_trait]
impl Connector for MockConnector {
    fn new_request(
        &self,
        method: Method,
        endpoint: &str,
        content_type: Option<&str>,
        body: Option<Value>,
    ) -> Result<Request, ApiError> {
        if let Outcome::FailRequest(make) = &self.outcome {
            return Err(make());
        }

        let request = Request {
            method,
            url: endpoint.to_string(),
            content_type: content_type.map(str::to_string),
            body,
        };
        self.requests.lock().unwrap().push(request.clone());
        Ok(request)
    }

    async fn call(&self, request: Request) -> Result<ResponseScheme, ApiError> {
        *self.calls.lock().unwrap() += 1;
        match &self.outcome {
            Outcome::Respond(status, bytes) => Ok(ResponseScheme {
                status: *status,
                method: request.method,
                endpoint: request.url,
                bytes: bytes.clone(),
            }),
            Outcome::FailCall(make) | Outcome::FailRequest(make) => Err(make()),
        }
    }
}
