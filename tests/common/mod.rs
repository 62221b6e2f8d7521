#![allow(dead_code)]

use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;
use serde_json::Value;
use sporlapi::{
    error::{Error, Result},
    spotify::SpotifyClient,
    transport::{Method, Transport},
};

pub const TOKEN: &str = "BQC4YgNXaZg-test-token";
pub const BASE_URL: &str = "https://api.spotify.com/v1";

/// One request as seen by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub token: String,
}

/// Transport double that records every call and answers from a queue.
/// When the queue is empty it answers `null`, like a 204.
#[derive(Default)]
pub struct MockTransport {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<VecDeque<Result<Value>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, value: Value) -> Self {
        self.push(Ok(value))
    }

    pub fn fail(self, err: Error) -> Self {
        self.push(Err(err))
    }

    fn push(self, response: Result<Value>) -> Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    pub fn last_path(&self) -> String {
        self.calls()
            .last()
            .map(|c| c.path.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: &str,
    ) -> Result<Value> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            body: body.cloned(),
            token: token.to_string(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

pub fn client(transport: MockTransport) -> SpotifyClient<MockTransport> {
    SpotifyClient::new(transport).with_base_url(BASE_URL)
}
