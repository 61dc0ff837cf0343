//! Streaming response destinations.
//!
//! # Data Flow
//! ```text
//! relay::send_response
//!     → set_status / set_status_text (once each)
//!     → set_header / append_header (per pair, in response order)
//!     → write_chunk (zero or more, strictly ordered, one at a time)
//!     → end (exactly once, terminal)
//! ```
//!
//! # Design Decisions
//! - `set_header` replaces every value under the name, `append_header`
//!   accumulates; both sinks here share those semantics
//! - `write_chunk` and `end` are async so the transport can apply
//!   backpressure by simply not resolving yet
//! - Head mutations are synchronous and buffered; nothing touches the wire
//!   before the first write

use std::future::Future;

use bytes::Bytes;

pub mod http1;
pub mod recording;

pub use http1::Http1Sink;
pub use recording::{RecordingSink, SinkEvent};

/// Write-once streaming destination for one response.
///
/// Callers must not invoke any method after `end` has resolved.
pub trait ResponseSink {
    /// Transport-specific failure for writes and finalization.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Set the status code. No range validation.
    fn set_status(&mut self, code: u16);

    /// Set the status text (reason phrase).
    fn set_status_text(&mut self, text: &str);

    /// Store `value` under `name`, replacing any existing values.
    fn set_header(&mut self, name: &str, value: &str);

    /// Add `value` under `name` without disturbing existing values.
    fn append_header(&mut self, name: &str, value: &str);

    /// Write one body chunk. May suspend while the transport catches up.
    fn write_chunk(&mut self, chunk: Bytes)
        -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Finalize the response. Safe to call with zero prior writes; terminal
    /// once it resolves.
    fn end(&mut self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
