use crate::http::request::Header;
use crate::http::status::reason_for;

/// Represents a complete HTTP response ready for serialization.
///
/// The reason phrase is never stored here: it is derived from `status`
/// through the status registry at serialization time, so the pair cannot
/// drift apart. The mandatory `Server` and `Date` headers are likewise
/// added during serialization, not by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code (100-599)
    pub status: u16,
    /// Caller-supplied headers in the order they were added
    pub headers: Vec<Header>,
    /// Response body; when absent the serializer substitutes the reason
    /// phrase so the peer never receives an empty body
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use outpost::http::response::ResponseBuilder;
/// let response = ResponseBuilder::new(200)
///     .header("Content-Type", "application/json")
///     .body(b"{}".to_vec())
///     .build();
/// assert_eq!(response.status, 200);
/// ```
pub struct ResponseBuilder {
    status: u16,
    headers: Vec<Header>,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header. Headers are serialized in the order they were
    /// added; duplicate names are kept.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the final Response.
    ///
    /// Adds a Content-Length header for the body when the caller did not
    /// supply one. Responses without a body get no Content-Length; the
    /// serializer's fallback body covers them.
    pub fn build(mut self) -> Response {
        if let Some(body) = &self.body {
            let has_length = self
                .headers
                .iter()
                .any(|h| h.name.eq_ignore_ascii_case("Content-Length"));
            if !has_length {
                self.headers
                    .push(Header::new("Content-Length", body.len().to_string()));
            }
        }

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Reason phrase for this response's status, from the registry.
    pub fn reason(&self) -> &'static str {
        reason_for(self.status)
    }

    /// Creates a bare response for a status code. No body: the serializer
    /// falls back to the reason phrase on the wire.
    pub fn from_status(status: u16) -> Self {
        ResponseBuilder::new(status).build()
    }

    /// Creates a 200 OK response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(200).body(body.into()).build()
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::from_status(404)
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self::from_status(500)
    }
}
