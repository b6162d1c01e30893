use chrono::Utc;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

/// Product name sent in the mandatory Server header.
pub const SERVER_NAME: &str = "outpost/0.1.0";

const HTTP_VERSION: &str = "HTTP/1.0";

/// Wire format of the Date header value.
const DATE_FORMAT: &str = "%a, %d %Y %b %X %Z";

/// Serializes a response to its exact wire bytes.
///
/// Layout: status line, mandatory `Server` and `Date` headers, caller
/// headers in the order supplied, a blank line, then the body. Lines end
/// in `\n`. A response without a body gets the reason phrase as body, so
/// the peer always receives something after the blank line.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let reason = resp.reason();
    let status_line = format!("{} {} {}\n", HTTP_VERSION, resp.status, reason);
    let date = Utc::now().format(DATE_FORMAT).to_string();
    let body: &[u8] = resp.body.as_deref().unwrap_or(reason.as_bytes());

    // Total length is known up front; allocate once.
    let mut total = status_line.len();
    total += "Server: ".len() + SERVER_NAME.len() + 1;
    total += "Date: ".len() + date.len() + 1;
    for h in &resp.headers {
        total += h.name.len() + 2 + h.value.len() + 1;
    }
    total += 1 + body.len();

    let mut buf = Vec::with_capacity(total);

    buf.extend_from_slice(status_line.as_bytes());

    buf.extend_from_slice(b"Server: ");
    buf.extend_from_slice(SERVER_NAME.as_bytes());
    buf.push(b'\n');

    buf.extend_from_slice(b"Date: ");
    buf.extend_from_slice(date.as_bytes());
    buf.push(b'\n');

    for h in &resp.headers {
        buf.extend_from_slice(h.name.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(h.value.as_bytes());
        buf.push(b'\n');
    }

    buf.push(b'\n');
    buf.extend_from_slice(body);

    debug_assert_eq!(buf.len(), total);
    buf
}

/// Writes a serialized response to a stream, handling partial writes.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;

        Ok(())
    }
}
