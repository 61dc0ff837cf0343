//! Lazy, single-consumption response bodies.
//!
//! # Responsibilities
//! - Wrap an arbitrary chunk stream behind one owned handle
//! - Enforce single consumption at the type level (the handle is move-only)
//! - Carry upstream stream failures to the relay without translation
//!
//! # Design Decisions
//! - Chunks are `bytes::Bytes` so forwarding them is a refcount bump
//! - The stream is boxed; this layer is I/O-bound and one allocation per
//!   response is not worth a generic parameter on every downstream type

use std::fmt;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use thiserror::Error;

/// The body stream failed while producing its next chunk.
#[derive(Debug, Error)]
#[error("body stream failed: {source}")]
pub struct BodyError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl BodyError {
    /// Wrap any upstream error.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

type ChunkStream = Pin<Box<dyn Stream<Item = Result<Bytes, BodyError>> + Send>>;

/// Owned handle over a response body's chunk sequence.
///
/// The handle can be pumped at most once: draining it requires ownership,
/// and there is no way to clone or rewind it.
pub struct ResponseBody {
    stream: ChunkStream,
}

impl ResponseBody {
    /// Wrap a fallible chunk stream.
    pub fn from_stream<S, E>(stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes, E>> + Send + 'static,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            stream: Box::pin(stream.map(|result| result.map_err(BodyError::new))),
        }
    }

    /// Body made of pre-computed chunks. Intended for tests and demos.
    pub fn from_chunks<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = Bytes>,
    {
        let chunks: Vec<Bytes> = chunks.into_iter().collect();
        Self {
            stream: Box::pin(futures_util::stream::iter(chunks.into_iter().map(Ok))),
        }
    }

    /// Body made of a single chunk.
    pub fn once(chunk: impl Into<Bytes>) -> Self {
        Self::from_chunks([chunk.into()])
    }

    /// Pull the next chunk, suspending until the producer yields one.
    pub(crate) async fn next_chunk(&mut self) -> Option<Result<Bytes, BodyError>> {
        self.stream.next().await
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResponseBody")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_chunks_yields_in_order() {
        let mut body = ResponseBody::from_chunks([
            Bytes::from_static(b"one"),
            Bytes::from_static(b"two"),
        ]);

        assert_eq!(body.next_chunk().await.unwrap().unwrap(), "one");
        assert_eq!(body.next_chunk().await.unwrap().unwrap(), "two");
        assert!(body.next_chunk().await.is_none());
    }

    #[tokio::test]
    async fn test_from_stream_carries_failure() {
        let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
            Ok(Bytes::from_static(b"ok")),
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
        ];
        let mut body = ResponseBody::from_stream(futures_util::stream::iter(chunks));

        assert_eq!(body.next_chunk().await.unwrap().unwrap(), "ok");
        let err = body.next_chunk().await.unwrap().unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
