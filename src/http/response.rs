//! Immutable response descriptions.
//!
//! # Responsibilities
//! - Hold status, status text, headers, and the optional body together
//! - Hand the body out exactly once (the value is consumed to get at it)
//!
//! # Design Decisions
//! - Builder-style constructors; the value is immutable once handed to the
//!   relay
//! - Status is not range-checked; whatever the upstream computed passes
//!   through

use crate::http::body::ResponseBody;
use crate::http::headers::Headers;

/// Fully-computed response, ready to be projected onto a sink.
#[derive(Debug)]
pub struct ResponseValue {
    status: u16,
    status_text: String,
    headers: Headers,
    body: Option<ResponseBody>,
}

impl ResponseValue {
    /// Start a response with the given status line, no headers, no body.
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Append one header pair. Repeated names accumulate in order.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Replace the header collection wholesale.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Attach the body stream.
    pub fn with_body(mut self, body: ResponseBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Whether a body is attached (it may still be empty when drained).
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Break the response apart. Consumes the value, so the body can only
    /// ever be obtained once.
    pub fn into_parts(self) -> (u16, String, Headers, Option<ResponseBody>) {
        (self.status, self.status_text, self.headers, self.body)
    }
}
