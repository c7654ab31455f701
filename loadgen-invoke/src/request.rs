//! Invocation request shaping
//!
//! Requests are built but never sent here; the load driver owns the transport.

use crate::errors::{InvokeError, InvokeResult};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Request};
use std::time::Duration;
use url::Url;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A fully shaped POST to an invocation endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub url: String,
    pub content_type: &'static str,
    pub body: String,
    pub timeout: Duration,
}

impl InvocationRequest {
    pub fn new(url: impl Into<String>, body: String, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            content_type: JSON_CONTENT_TYPE,
            body,
            timeout,
        }
    }

    pub fn method(&self) -> Method {
        Method::POST
    }

    /// Parse and check the target URL
    pub fn parsed_url(&self) -> InvokeResult<Url> {
        let url = Url::parse(&self.url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(InvokeError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Build an unsent `reqwest::Request`
    pub fn to_reqwest(&self) -> InvokeResult<Request> {
        let mut request = Request::new(self.method(), self.parsed_url()?);
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        *request.body_mut() = Some(self.body.clone().into());
        *request.timeout_mut() = Some(self.timeout);
        Ok(request)
    }
}

impl TryFrom<InvocationRequest> for Request {
    type Error = InvokeError;

    fn try_from(value: InvocationRequest) -> Result<Self, Self::Error> {
        value.to_reqwest()
    }
}
