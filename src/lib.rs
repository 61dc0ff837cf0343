//! Response adaptation layer.
//!
//! Takes an immutable, already-computed HTTP response description
//! ([`ResponseValue`]) and projects it onto a mutable, write-once, streaming
//! destination ([`ResponseSink`]) without ever buffering the whole body.

pub mod config;
pub mod http;
pub mod interop;
pub mod relay;
pub mod sink;

pub use config::RelayConfig;
pub use http::request::RequestDescriptor;
pub use http::response::ResponseValue;
pub use relay::{send_response, RelayError, RelayMode, RelayOutcome};
pub use sink::ResponseSink;
