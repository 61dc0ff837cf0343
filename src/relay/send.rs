//! The linear adaptation procedure: gate, project, elide, pump.

use serde::{Deserialize, Serialize};

use crate::http::body::ResponseBody;
use crate::http::headers::{disposition, HeaderDisposition};
use crate::http::request::RequestDescriptor;
use crate::http::response::ResponseValue;
use crate::relay::error::RelayError;
use crate::sink::ResponseSink;

/// Which execution environment owns response transmission.
///
/// Selected once at the boundary (usually from configuration) and passed in,
/// so the procedure itself never reads ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayMode {
    /// This layer drives the sink.
    #[default]
    Streaming,
    /// Another environment performs its own adaptation; this layer is a
    /// silent no-op.
    Delegated,
}

/// Whether the relay actually ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The response was projected onto the sink and finalized.
    Sent,
    /// Not applicable in this mode; the sink was never touched.
    Skipped,
}

/// Project a computed response onto a streaming sink.
///
/// Copies status and status text verbatim, projects headers in order
/// (`set` for `set-cookie`, `append` for everything else), elides the body
/// for `HEAD` requests, then pumps the body one chunk at a time. The sink is
/// finalized exactly once on every exit path, including failures.
///
/// Multi-`Set-Cookie` note: each `set-cookie` pair is written through
/// `set_header`, so on sinks where `set` replaces, a later cookie replaces an
/// earlier one. See [`disposition`] for the rationale.
pub async fn send_response<S: ResponseSink>(
    mode: RelayMode,
    request: &RequestDescriptor,
    response: ResponseValue,
    sink: &mut S,
) -> Result<RelayOutcome, RelayError<S::Error>> {
    if mode == RelayMode::Delegated {
        tracing::debug!(
            method = %request.method(),
            path = %request.path(),
            "relay not applicable, environment adapts elsewhere"
        );
        return Ok(RelayOutcome::Skipped);
    }

    let (status, status_text, headers, body) = response.into_parts();

    tracing::debug!(
        method = %request.method(),
        path = %request.path(),
        status = status,
        header_count = headers.len(),
        has_body = body.is_some(),
        "relaying response"
    );

    sink.set_status(status);
    sink.set_status_text(&status_text);

    for (name, value) in headers.iter() {
        match disposition(name) {
            HeaderDisposition::Set => sink.set_header(name, value),
            HeaderDisposition::Append => sink.append_header(name, value),
        }
    }

    // A body must never be sent for HEAD requests, see RFC 9110 §9.3.2.
    let body = if request.is_head() { None } else { body };

    pump(body, sink).await?;
    Ok(RelayOutcome::Sent)
}

/// Drain the body into the sink, one write in flight at a time, finalizing
/// on every path. With no body, finalize immediately.
async fn pump<S: ResponseSink>(
    body: Option<ResponseBody>,
    sink: &mut S,
) -> Result<(), RelayError<S::Error>> {
    let Some(mut body) = body else {
        return sink.end().await.map_err(RelayError::Sink);
    };

    let mut written = 0usize;
    loop {
        match body.next_chunk().await {
            Some(Ok(chunk)) => {
                if let Err(error) = sink.write_chunk(chunk).await {
                    tracing::warn!(
                        chunks_written = written,
                        error = %error,
                        "sink rejected write, finalizing"
                    );
                    // Best effort; the write error is the one that matters.
                    let _ = sink.end().await;
                    return Err(RelayError::Sink(error));
                }
                written += 1;
            }
            Some(Err(error)) => {
                tracing::warn!(
                    chunks_written = written,
                    error = %error,
                    "body failed mid-stream, finalizing"
                );
                let _ = sink.end().await;
                return Err(RelayError::Body(error));
            }
            None => break,
        }
    }

    tracing::debug!(chunks_written = written, "response body drained");
    sink.end().await.map_err(RelayError::Sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::recording::{RecordingSink, SinkEvent};
    use bytes::Bytes;

    fn get() -> RequestDescriptor {
        RequestDescriptor::new("GET", "/")
    }

    #[tokio::test]
    async fn test_delegated_mode_touches_nothing() {
        let response = ResponseValue::new(200, "OK")
            .header("content-type", "text/plain")
            .with_body(ResponseBody::once("hello"));
        let mut sink = RecordingSink::new();

        let outcome = send_response(RelayMode::Delegated, &get(), response, &mut sink)
            .await
            .unwrap();

        assert_eq!(outcome, RelayOutcome::Skipped);
        assert!(sink.events.is_empty());
    }

    #[tokio::test]
    async fn test_no_body_finalizes_with_zero_writes() {
        let response = ResponseValue::new(204, "No Content");
        let mut sink = RecordingSink::new();

        let outcome = send_response(RelayMode::Streaming, &get(), response, &mut sink)
            .await
            .unwrap();

        assert_eq!(outcome, RelayOutcome::Sent);
        assert!(sink.written().is_empty());
        assert_eq!(sink.end_count(), 1);
    }

    #[tokio::test]
    async fn test_head_elides_body_but_keeps_head() {
        let request = RequestDescriptor::new("HEAD", "/");
        let response = ResponseValue::new(200, "OK")
            .header("content-length", "5")
            .with_body(ResponseBody::once("hello"));
        let mut sink = RecordingSink::new();

        send_response(RelayMode::Streaming, &request, response, &mut sink)
            .await
            .unwrap();

        assert_eq!(sink.status(), 200);
        assert_eq!(
            sink.headers(),
            &[("content-length".to_string(), "5".to_string())]
        );
        assert!(sink.written().is_empty());
        assert_eq!(sink.end_count(), 1);
    }

    #[tokio::test]
    async fn test_lowercase_head_is_not_elided() {
        let request = RequestDescriptor::new("head", "/");
        let response = ResponseValue::new(200, "OK").with_body(ResponseBody::once("hello"));
        let mut sink = RecordingSink::new();

        send_response(RelayMode::Streaming, &request, response, &mut sink)
            .await
            .unwrap();

        assert_eq!(sink.written(), vec![Bytes::from_static(b"hello")]);
    }

    #[tokio::test]
    async fn test_set_cookie_goes_through_set() {
        let response = ResponseValue::new(200, "OK")
            .header("content-type", "text/html")
            .header("Set-Cookie", "session=abc");
        let mut sink = RecordingSink::new();

        send_response(RelayMode::Streaming, &get(), response, &mut sink)
            .await
            .unwrap();

        assert!(sink.events.contains(&SinkEvent::AppendHeader(
            "content-type".to_string(),
            "text/html".to_string()
        )));
        assert!(sink.events.contains(&SinkEvent::SetHeader(
            "Set-Cookie".to_string(),
            "session=abc".to_string()
        )));
    }
}
