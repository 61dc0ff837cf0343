//! HTTP data model for the relay.
//!
//! # Data Flow
//! ```text
//! Upstream collaborator (router / renderer / middleware)
//!     → response.rs (ResponseValue: status, text, headers, optional body)
//!     → headers.rs (ordered multimap + set/append disposition)
//!     → body.rs (lazy, single-consumption chunk stream)
//!     → [relay layer drives the sink]
//! ```
//!
//! # Design Decisions
//! - Status is a plain `u16`; nonstandard codes pass through unvalidated
//! - Header order and name case are preserved exactly as given
//! - The body is a move-only handle, so a second consumption pass cannot
//!   compile

pub mod body;
pub mod headers;
pub mod request;
pub mod response;

pub use body::{BodyError, ResponseBody};
pub use headers::{disposition, HeaderDisposition, Headers};
pub use request::RequestDescriptor;
pub use response::ResponseValue;
