use std::net::SocketAddr;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

use crate::error::BridgeError;

/// Transport carrying commands to the engine gateway
///
/// Object-safe so tests can substitute recording or failing fakes.
#[async_trait]
pub trait EngineTransport: Send {
    /// Invoke a gateway method and wait for its acknowledgement
    async fn invoke(&mut self, method: &str, params: &[serde_json::Value]) -> Result<(), BridgeError>;
}

/// Newline-delimited JSON over one TCP connection
///
/// Commands go out as `{"method": ..., "params": [...]}` lines; the gateway
/// answers each with `{"ok": true}` or `{"ok": false, "error": ...}`. The
/// connection is held for the transport's lifetime and closed when it is
/// dropped.
pub struct TcpTransport {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl TcpTransport {
    /// Connect to the gateway
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP connection cannot be established
    pub async fn connect(addr: SocketAddr) -> Result<Self, BridgeError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|e| BridgeError::Connection(format!("failed to connect to {addr}: {e}")))?;

        let (read_half, write_half) = stream.into_split();

        Ok(Self {
            reader: BufReader::new(read_half),
            writer: write_half,
        })
    }
}

#[derive(Deserialize)]
struct Ack {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl EngineTransport for TcpTransport {
    async fn invoke(&mut self, method: &str, params: &[serde_json::Value]) -> Result<(), BridgeError> {
        let mut line = serde_json::json!({ "method": method, "params": params }).to_string();
        line.push('\n');

        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(|e| BridgeError::Connection(format!("failed to send {method}: {e}")))?;

        let mut response = String::new();
        let read = self
            .reader
            .read_line(&mut response)
            .await
            .map_err(|e| BridgeError::Connection(format!("failed to read response to {method}: {e}")))?;

        if read == 0 {
            return Err(BridgeError::Connection("gateway closed the connection".to_owned()));
        }

        let ack: Ack = serde_json::from_str(response.trim())
            .map_err(|e| BridgeError::Protocol(format!("unparseable response to {method}: {e}")))?;

        if ack.ok {
            Ok(())
        } else {
            Err(BridgeError::Engine {
                method: method.to_owned(),
                message: ack.error.unwrap_or_else(|| "unspecified engine error".to_owned()),
            })
        }
    }
}
