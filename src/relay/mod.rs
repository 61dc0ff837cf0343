//! The adaptation core.
//!
//! # Data Flow
//! ```text
//! RequestDescriptor + ResponseValue + RelayMode
//!     → send.rs (gate on mode)
//!     → [status + status text copied verbatim]
//!     → [headers projected: set for set-cookie, append otherwise]
//!     → [body elided for HEAD]
//!     → [body pumped chunk-by-chunk, one write in flight]
//!     → sink.end() exactly once, on every exit path
//! ```
//!
//! # Design Decisions
//! - The execution-environment choice is an explicit `RelayMode` passed in
//!   at the boundary, not an ambient flag read inside the procedure
//! - Nothing is retried: once a chunk failed, part of the response may
//!   already be on the wire

pub mod error;
pub mod send;

pub use error::RelayError;
pub use send::{send_response, RelayMode, RelayOutcome};
