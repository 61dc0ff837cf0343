//! HTTP/1.1 sink over any tokio writer.
//!
//! # Responsibilities
//! - Serialize status line and header block
//! - Frame the body (chunked transfer-encoding, or raw when the caller
//!   supplied `Content-Length`)
//! - Apply transport backpressure through `AsyncWrite`
//!
//! # Design Decisions
//! - The head is staged in memory and flushed lazily: on the first body
//!   write, or on `end` when no chunk was ever written
//! - A response finalized with zero writes and no `Content-Length` gets
//!   `content-length: 0` instead of an empty chunked stream, which keeps
//!   HEAD responses clean on the wire
//! - `end` is idempotent; repeated calls after the first are no-ops

use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::sink::ResponseSink;

/// Streaming HTTP/1.1 response writer.
pub struct Http1Sink<W> {
    writer: W,
    status: u16,
    status_text: String,
    headers: Vec<(String, String)>,
    head_sent: bool,
    chunked: bool,
    ended: bool,
}

impl<W: AsyncWrite + Unpin + Send> Http1Sink<W> {
    /// Wrap a writer. The status line defaults to `200 OK` until set.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            status: 200,
            status_text: "OK".to_string(),
            headers: Vec::new(),
            head_sent: false,
            chunked: false,
            ended: false,
        }
    }

    /// Consume the sink and hand back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn has_content_length(&self) -> bool {
        self.headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-length"))
    }

    /// Serialize and write the head once. `streaming` tells us whether body
    /// chunks will follow, which decides the framing when the caller gave no
    /// `Content-Length`.
    async fn flush_head(&mut self, streaming: bool) -> std::io::Result<()> {
        if self.head_sent {
            return Ok(());
        }

        let mut head = format!("HTTP/1.1 {} {}\r\n", self.status, self.status_text);
        for (name, value) in &self.headers {
            head.push_str(name);
            head.push_str(": ");
            head.push_str(value);
            head.push_str("\r\n");
        }
        if !self.has_content_length() {
            if streaming {
                self.chunked = true;
                head.push_str("transfer-encoding: chunked\r\n");
            } else {
                head.push_str("content-length: 0\r\n");
            }
        }
        head.push_str("\r\n");

        self.writer.write_all(head.as_bytes()).await?;
        self.head_sent = true;
        Ok(())
    }
}

impl<W: AsyncWrite + Unpin + Send> ResponseSink for Http1Sink<W> {
    type Error = std::io::Error;

    fn set_status(&mut self, code: u16) {
        self.status = code;
    }

    fn set_status_text(&mut self, text: &str) {
        self.status_text = text.to_string();
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }

    fn append_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    async fn write_chunk(&mut self, chunk: Bytes) -> std::io::Result<()> {
        self.flush_head(true).await?;
        if self.chunked {
            // A zero-length data frame would read as the terminal chunk.
            if chunk.is_empty() {
                return Ok(());
            }
            self.writer
                .write_all(format!("{:x}\r\n", chunk.len()).as_bytes())
                .await?;
            self.writer.write_all(&chunk).await?;
            self.writer.write_all(b"\r\n").await?;
        } else {
            self.writer.write_all(&chunk).await?;
        }
        Ok(())
    }

    async fn end(&mut self) -> std::io::Result<()> {
        if self.ended {
            return Ok(());
        }
        self.flush_head(false).await?;
        if self.chunked {
            self.writer.write_all(b"0\r\n\r\n").await?;
        }
        self.writer.flush().await?;
        self.ended = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(sink: Http1Sink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[tokio::test]
    async fn test_empty_response_gets_content_length_zero() {
        let mut sink = Http1Sink::new(Vec::new());
        sink.set_status(204);
        sink.set_status_text("No Content");
        sink.end().await.unwrap();

        assert_eq!(
            wire(sink),
            "HTTP/1.1 204 No Content\r\ncontent-length: 0\r\n\r\n"
        );
    }

    #[tokio::test]
    async fn test_chunked_framing_without_content_length() {
        let mut sink = Http1Sink::new(Vec::new());
        sink.append_header("x-test", "1");
        sink.write_chunk(Bytes::from_static(b"hello")).await.unwrap();
        sink.end().await.unwrap();

        assert_eq!(
            wire(sink),
            "HTTP/1.1 200 OK\r\nx-test: 1\r\ntransfer-encoding: chunked\r\n\r\n\
             5\r\nhello\r\n0\r\n\r\n"
        );
    }

    #[tokio::test]
    async fn test_raw_body_with_content_length() {
        let mut sink = Http1Sink::new(Vec::new());
        sink.append_header("content-length", "5");
        sink.write_chunk(Bytes::from_static(b"hello")).await.unwrap();
        sink.end().await.unwrap();

        assert_eq!(
            wire(sink),
            "HTTP/1.1 200 OK\r\ncontent-length: 5\r\n\r\nhello"
        );
    }

    #[tokio::test]
    async fn test_set_header_replaces_case_insensitively() {
        let mut sink = Http1Sink::new(Vec::new());
        sink.append_header("Set-Cookie", "a=1");
        sink.set_header("set-cookie", "b=2");
        sink.end().await.unwrap();

        let out = wire(sink);
        assert!(!out.contains("a=1"));
        assert!(out.contains("set-cookie: b=2"));
    }

    #[tokio::test]
    async fn test_end_is_idempotent() {
        let mut sink = Http1Sink::new(Vec::<u8>::new());
        sink.end().await.unwrap();
        let after_first = sink.writer.len();
        sink.end().await.unwrap();
        assert_eq!(sink.writer.len(), after_first);
    }
}
