//! Line-delimited JSON transport over stdin/stdout.
//!
//! Each JSON-RPC message is a single line terminated by `\n`.
//! This follows the MCP stdio transport specification.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::trace;

use crate::error::TransportError;

/// Reads JSON-RPC messages from stdin, writes responses to stdout.
///
/// Uses line-delimited JSON: one complete JSON object per line.
/// This struct is generic over reader/writer for testability.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl<R, W> StdioTransport<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new transport with the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Reads the next non-empty line from the input stream, skipping
    /// blank lines. Returns `None` on EOF (connection closed).
    pub async fn read_message(&mut self) -> Result<Option<String>, TransportError> {
        loop {
            let mut line = String::new();
            let bytes_read = self
                .reader
                .read_line(&mut line)
                .await
                .map_err(|e| TransportError::Read(e.to_string()))?;

            if bytes_read == 0 {
                return Ok(None);
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            trace!(len = trimmed.len(), "read message");
            return Ok(Some(trimmed.to_string()));
        }
    }

    /// Writes a JSON-RPC response line to the output stream.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");

        self.writer
            .write_all(message.as_bytes())
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        self.writer
            .write_all(b"\n")
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        self.writer
            .flush()
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        Ok(())
    }
}
