//! HTTP transport used by [`SpotifyClient`](crate::spotify::SpotifyClient).
//!
//! The client only depends on the [`Transport`] trait: given a method, a
//! path relative to the API base (query string already encoded), an optional
//! JSON body and a bearer token, a transport returns the decoded JSON body of
//! a successful response or an [`Error`] describing the failure. HTTP status
//! codes are mapped with [`Error::from_http_status`].

use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::RETRY_AFTER};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::{
    config,
    error::{Error, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one request. Successful responses without a body yield
    /// [`Value::Null`].
    async fn fetch(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: &str,
    ) -> Result<Value>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport from the configured API URL and timeout.
    pub fn from_config() -> Result<Self> {
        Self::new(
            &config::spotify_apiurl(),
            Duration::from_secs(config::http_timeout_secs()),
        )
    }

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::network)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: &str,
    ) -> Result<Value> {
        let url = self.url(path);
        debug!(%method, %url, "sending request");

        let mut request = self
            .client
            .request(method.into(), &url)
            .bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        } else if matches!(method, Method::Post | Method::Put) {
            // the Web API answers 411 on bodiless PUT/POST without a length
            request = request.header(reqwest::header::CONTENT_LENGTH, 0);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let text = response.text().await.map_err(map_reqwest_error)?;

        if status.is_success() {
            return decode_success(status, &text);
        }

        let mut body = decode_error_body(&text);
        if status == StatusCode::TOO_MANY_REQUESTS {
            inject_retry_after(&mut body, retry_after);
        }

        let err = Error::from_http_status(status.as_u16(), &body);
        warn!(%method, %url, status = status.as_u16(), kind = %err.kind, "request failed");
        Err(err)
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::timeout(err)
    } else if err.is_decode() {
        Error::json_decode(err)
    } else {
        Error::network(err)
    }
}

fn decode_success(status: StatusCode, text: &str) -> Result<Value> {
    if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(text).map_err(Error::json_decode)
}

pub(crate) fn decode_error_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return json!({});
    }

    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}

// Prefer the header when the body does not carry its own retry delay.
fn inject_retry_after(body: &mut Value, header: Option<String>) {
    let Some(header) = header else {
        return;
    };
    let Some(obj) = body.as_object_mut() else {
        return;
    };
    if obj.contains_key("retry_after") || obj.contains_key("Retry-After") {
        return;
    }

    let value = header
        .trim()
        .parse::<u64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(header));
    obj.insert("Retry-After".to_string(), value);
}
