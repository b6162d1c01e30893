/// HTTP/1.0 request methods.
///
/// Closed set: the four methods the server understands. Any other token on
/// the request line is rejected during parsing rather than represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
}

/// A single HTTP header as it appeared on the wire.
///
/// Duplicate names are permitted; a message carries its headers as an
/// ordered sequence and serialization reproduces that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Represents a parsed HTTP request from a client.
///
/// Immutable once produced by the parser. The path is stored raw: no
/// percent-decoding and no normalization happen here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, POST, PUT, DELETE)
    pub method: Method,
    /// The request path as sent by the client (e.g., "/index.html")
    pub path: String,
    /// HTTP version (always "HTTP/1.0" for a parsed request)
    pub version: String,
    /// Request headers in appearance order
    pub headers: Vec<Header>,
    /// Request body; present only for non-GET requests with a Content-Length
    pub body: Option<Vec<u8>>,
}

impl Method {
    /// Parses an HTTP method from a request-line token.
    ///
    /// The match is exact on both length and content: `"GE"` is not GET,
    /// and lowercase forms are not accepted.
    pub fn from_token(token: &[u8]) -> Option<Self> {
        match token {
            b"GET" => Some(Method::GET),
            b"POST" => Some(Method::POST),
            b"PUT" => Some(Method::PUT),
            b"DELETE" => Some(Method::DELETE),
            _ => None,
        }
    }

    /// String-based variant of [`Method::from_token`].
    pub fn from_str(s: &str) -> Option<Self> {
        Self::from_token(s.as_bytes())
    }

    /// Returns the wire form of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Builder for constructing Request values outside the parser (handler
/// fixtures, tests).
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: Option<String>,
    headers: Vec<Header>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: None,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.0".to_string()),
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Retrieves the first header value matching `name`.
    ///
    /// Name comparison is ASCII case-insensitive; later duplicates stay in
    /// `headers` but are not returned here.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Retrieves the Content-Length header parsed as a usize, if present
    /// and numeric.
    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length").and_then(|v| v.parse().ok())
    }
}
