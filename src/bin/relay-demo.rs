//! Demo server for the relay.
//!
//! Serves one canned JSON response per connection, driven through the full
//! relay path: request-line parse → ResponseValue → send_response →
//! Http1Sink over the raw TCP write half.
//!
//! Reads `relay.toml` when present, falls back to defaults otherwise.
//! Useful for poking at the layer with curl:
//!
//! ```text
//! curl -v http://127.0.0.1:8080/
//! curl -v -I http://127.0.0.1:8080/    # HEAD: headers only, no body
//! ```

use std::path::Path;

use bytes::Bytes;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use response_relay::config::{load_config, RelayConfig};
use response_relay::http::body::ResponseBody;
use response_relay::http::request::RequestDescriptor;
use response_relay::http::response::ResponseValue;
use response_relay::relay::send_response;
use response_relay::sink::Http1Sink;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "response_relay=debug,relay_demo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config(Path::new("relay.toml")).unwrap_or_else(|_| RelayConfig::default());

    tracing::info!(
        bind_address = %config.listener.bind_address,
        mode = ?config.mode,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    loop {
        let (stream, peer) = listener.accept().await?;
        let mode = config.mode;

        tokio::spawn(async move {
            let (read_half, write_half) = stream.into_split();

            // Minimal request-line parse; the relay only needs the method.
            let mut request_line = String::new();
            let mut reader = BufReader::new(read_half);
            if reader.read_line(&mut request_line).await.is_err() {
                return;
            }
            let mut parts = request_line.split_whitespace();
            let method = parts.next().unwrap_or("GET").to_string();
            let path = parts.next().unwrap_or("/").to_string();
            let request = RequestDescriptor::new(method, path);

            let response = ResponseValue::new(200, "OK")
                .header("content-type", "application/json")
                .header("set-cookie", "demo=1")
                .with_body(ResponseBody::from_chunks([
                    Bytes::from_static(b"{\"hello\":"),
                    Bytes::from_static(b"\"world\"}"),
                ]));

            let mut sink = Http1Sink::new(write_half);
            match send_response(mode, &request, response, &mut sink).await {
                Ok(outcome) => {
                    tracing::debug!(peer = %peer, outcome = ?outcome, "response relayed")
                }
                Err(error) => {
                    tracing::error!(peer = %peer, error = %error, "relay failed")
                }
            }
        });
    }
}
