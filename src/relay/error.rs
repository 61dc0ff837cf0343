//! Relay error taxonomy.

use thiserror::Error;

use crate::http::body::BodyError;

/// Errors surfaced by a relay attempt.
///
/// Neither variant is retried: by the time one occurs, part of the response
/// may already be committed to the wire, so the caller's only safe options
/// are logging and aborting the connection. In both cases the sink has
/// already been finalized on a best-effort basis.
#[derive(Debug, Error)]
pub enum RelayError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// The response body failed while producing a chunk.
    #[error("response body failed mid-stream: {0}")]
    Body(#[source] BodyError),

    /// The sink rejected a write.
    #[error("sink write failed: {0}")]
    Sink(#[source] E),
}
