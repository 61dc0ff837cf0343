//! In-memory sink that records every call, for tests and failure injection.
//!
//! # Responsibilities
//! - Capture the exact call sequence the relay issues
//! - Mirror the header semantics of the wire sinks (set replaces, append
//!   accumulates)
//! - Optionally reject a chosen body write to exercise failure paths

use bytes::Bytes;
use thiserror::Error;

use crate::sink::ResponseSink;

/// One observed sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Status(u16),
    StatusText(String),
    SetHeader(String, String),
    AppendHeader(String, String),
    Write(Bytes),
    End,
}

/// Failure injected by an armed [`RecordingSink`].
#[derive(Debug, Error)]
#[error("injected sink failure on write {write_index}")]
pub struct InjectedFailure {
    /// Zero-based index of the rejected write.
    pub write_index: usize,
}

/// Sink that stores everything it is told.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Full call sequence, in order.
    pub events: Vec<SinkEvent>,
    status: u16,
    status_text: String,
    headers: Vec<(String, String)>,
    fail_on_write: Option<usize>,
    writes: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the sink to reject the nth (zero-based) body write.
    pub fn fail_on_write(mut self, n: usize) -> Self {
        self.fail_on_write = Some(n);
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Final header state after all set/append calls.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Chunks accepted so far, in write order.
    pub fn written(&self) -> Vec<Bytes> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Write(chunk) => Some(chunk.clone()),
                _ => None,
            })
            .collect()
    }

    /// How many times `end` resolved. Tests assert this is exactly one.
    pub fn end_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SinkEvent::End))
            .count()
    }
}

impl ResponseSink for RecordingSink {
    type Error = InjectedFailure;

    fn set_status(&mut self, code: u16) {
        self.status = code;
        self.events.push(SinkEvent::Status(code));
    }

    fn set_status_text(&mut self, text: &str) {
        self.status_text = text.to_string();
        self.events.push(SinkEvent::StatusText(text.to_string()));
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
        self.events
            .push(SinkEvent::SetHeader(name.to_string(), value.to_string()));
    }

    fn append_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
        self.events
            .push(SinkEvent::AppendHeader(name.to_string(), value.to_string()));
    }

    async fn write_chunk(&mut self, chunk: Bytes) -> Result<(), InjectedFailure> {
        if self.fail_on_write == Some(self.writes) {
            return Err(InjectedFailure {
                write_index: self.writes,
            });
        }
        self.writes += 1;
        self.events.push(SinkEvent::Write(chunk));
        Ok(())
    }

    async fn end(&mut self) -> Result<(), InjectedFailure> {
        self.events.push(SinkEvent::End);
        Ok(())
    }
}
