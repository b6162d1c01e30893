use bytes::BytesMut;
use std::fmt;
use std::io::ErrorKind;
use tokio::io::{AsyncRead, AsyncReadExt};

const READ_CHUNK: usize = 1024;

/// Why accumulation stopped before a complete request was collected.
#[derive(Debug)]
pub enum AccumulateError {
    /// The request grew past the configured byte cap.
    TooLarge,
    /// Hard read failure on the channel.
    Io(std::io::Error),
}

impl fmt::Display for AccumulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccumulateError::TooLarge => write!(f, "request exceeds configured size limit"),
            AccumulateError::Io(e) => write!(f, "read error: {}", e),
        }
    }
}

impl std::error::Error for AccumulateError {}

/// Reads from the channel until the peer closes its write side.
///
/// Interrupted reads are retried; any other read error aborts with no
/// partial-request handling. The buffer grows geometrically as chunks
/// arrive and is bounded by `max_bytes`.
pub async fn read_all<R>(channel: &mut R, max_bytes: usize) -> Result<BytesMut, AccumulateError>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = BytesMut::with_capacity(READ_CHUNK);
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let n = match channel.read(&mut chunk).await {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(AccumulateError::Io(e)),
        };

        // Zero-length read: peer finished sending.
        if n == 0 {
            return Ok(buffer);
        }

        if buffer.len() + n > max_bytes {
            return Err(AccumulateError::TooLarge);
        }

        buffer.extend_from_slice(&chunk[..n]);
    }
}
