use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{info, warn};

use crate::http::accumulator::{AccumulateError, read_all};
use crate::http::parser::parse_request;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::server::static_files::StaticFiles;

/// Handles a single accepted connection: accumulate the request bytes,
/// parse, route, serialize, send, close.
///
/// One request per connection; HTTP/1.0 without keep-alive. The stream is
/// generic so tests can drive the handler over an in-memory duplex pipe.
pub struct Connection<S> {
    stream: S,
    responder: StaticFiles,
    max_request_bytes: usize,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, responder: StaticFiles, max_request_bytes: usize) -> Self {
        Self {
            stream,
            responder,
            max_request_bytes,
        }
    }

    /// Runs the connection to completion.
    ///
    /// Every request that could be read gets a syntactically valid
    /// response, including rejections; only transport failures end the
    /// connection without an answer.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let raw = match read_all(&mut self.stream, self.max_request_bytes).await {
            Ok(buf) => buf,
            Err(AccumulateError::TooLarge) => {
                warn!("request exceeded size limit, rejecting");
                return self.send(Response::from_status(400)).await;
            }
            Err(AccumulateError::Io(e)) => {
                return Err(anyhow::anyhow!("read failed: {}", e));
            }
        };

        // Peer connected and closed without sending anything.
        if raw.is_empty() {
            return Ok(());
        }

        let response = match parse_request(&raw) {
            Ok(request) => {
                info!(
                    method = request.method.as_str(),
                    path = %request.path,
                    "handling request"
                );
                self.handle(&request).await
            }
            Err(rejection) => {
                warn!(status = rejection.status(), "rejected request");
                Response::from_status(rejection.status())
            }
        };

        self.send(response).await
    }

    async fn handle(&self, request: &Request) -> Response {
        match request.method {
            Method::GET => self.responder.respond(request).await,
            // POST/PUT/DELETE parsed fine (body included); acknowledge.
            _ => Response::from_status(200),
        }
    }

    async fn send(&mut self, response: Response) -> anyhow::Result<()> {
        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await
    }
}
