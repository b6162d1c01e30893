//! Static file responder
//!
//! Resolves GET request paths against a configured document root and
//! builds the file-serving responses.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tokio::fs;
use tracing::{debug, error};

use crate::config::StaticFilesConfig;
use crate::http::mime::mime_for;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder};

/// Serves files from a document root.
///
/// Request paths are taken raw from the parser; everything that would
/// resolve outside the root (parent components, absolute paths) is
/// refused here with a 404 rather than touched on disk.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(config: StaticFilesConfig) -> Self {
        Self { root: config.root }
    }

    /// Builds the response for a validated GET request.
    ///
    /// 200 with `Content-Type` and `Content-Length` on success, 404 when
    /// the file does not exist or the path is refused, 500 on any other
    /// read failure. Error responses carry no body override; the reason
    /// phrase serves as the body on the wire.
    pub async fn respond(&self, request: &Request) -> Response {
        let Some(relative) = resolve(&request.path) else {
            debug!(path = %request.path, "refusing path outside document root");
            return Response::not_found();
        };

        let full = self.root.join(&relative);

        match fs::read(&full).await {
            Ok(contents) => {
                let mime = mime_for(&relative.to_string_lossy());
                ResponseBuilder::new(200)
                    .header("Content-Type", mime)
                    .header("Content-Length", contents.len().to_string())
                    .body(contents)
                    .build()
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %full.display(), "file not found");
                Response::not_found()
            }
            Err(e) => {
                error!(path = %full.display(), error = %e, "failed to read file");
                Response::internal_error()
            }
        }
    }
}

/// Turns a raw request path into a relative path under the root.
///
/// `/` maps to `index.html`. Returns None for any path carrying parent
/// or root components.
fn resolve(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = if trimmed.is_empty() { "index.html" } else { trimmed };

    let mut clean = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            // ParentDir, RootDir, Prefix would escape the root
            _ => return None,
        }
    }
    Some(clean)
}
