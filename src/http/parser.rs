use crate::http::request::{Header, Method, Request};

/// The only protocol version the server speaks.
pub const SUPPORTED_VERSION: &str = "HTTP/1.0";

/// Why a request buffer failed validation.
///
/// Each variant maps to the status code of the error response sent back to
/// the peer; the reason phrase comes from the status registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// 400 - malformed request line, malformed header, or truncated body
    BadRequest,
    /// 411 - non-GET request without a usable positive Content-Length
    LengthRequired,
    /// 501 - method token outside the supported set
    NotImplemented,
    /// 505 - version token other than "HTTP/1.0"
    VersionNotSupported,
}

impl Rejection {
    /// Status code of the error response for this rejection.
    pub fn status(&self) -> u16 {
        match self {
            Rejection::BadRequest => 400,
            Rejection::LengthRequired => 411,
            Rejection::NotImplemented => 501,
            Rejection::VersionNotSupported => 505,
        }
    }
}

/// Parses a complete accumulated request buffer into a [`Request`].
///
/// Single left-to-right scan, no backtracking. Lines may end in `\r\n` or
/// bare `\n`; both parse identically. Headers are kept in appearance order
/// and duplicates are retained. A body is taken only for non-GET methods
/// and only for exactly `Content-Length` bytes; trailing bytes on a GET
/// are ignored.
pub fn parse_request(buf: &[u8]) -> Result<Request, Rejection> {
    let mut pos = 0;

    let method_token = take_until_space(buf, &mut pos).ok_or(Rejection::BadRequest)?;
    if method_token.is_empty() {
        return Err(Rejection::BadRequest);
    }
    let method = Method::from_token(method_token).ok_or(Rejection::NotImplemented)?;

    let path_token = take_until_space(buf, &mut pos).ok_or(Rejection::BadRequest)?;
    if path_token.is_empty() {
        return Err(Rejection::BadRequest);
    }
    let path = as_text(path_token)?;

    let version_token = take_line(buf, &mut pos).ok_or(Rejection::BadRequest)?;
    let version = as_text(version_token)?;
    if version != SUPPORTED_VERSION {
        return Err(Rejection::VersionNotSupported);
    }

    let mut headers = Vec::new();
    loop {
        // Running out of buffer before the blank line is a malformed
        // request, never an out-of-bounds read.
        let line = take_line(buf, &mut pos).ok_or(Rejection::BadRequest)?;
        if line.is_empty() {
            break;
        }

        let colon = line
            .iter()
            .position(|&b| b == b':')
            .ok_or(Rejection::BadRequest)?;
        let name = &line[..colon];
        if name.is_empty() {
            return Err(Rejection::BadRequest);
        }

        // Skip spaces after the colon; everything beyond is kept verbatim.
        let mut value_start = colon + 1;
        while value_start < line.len() && line[value_start] == b' ' {
            value_start += 1;
        }
        let value = &line[value_start..];
        if value.is_empty() {
            return Err(Rejection::BadRequest);
        }

        headers.push(Header::new(as_text(name)?, as_text(value)?));
    }

    let body = match method {
        Method::GET => None,
        _ => {
            let length = declared_length(&headers).ok_or(Rejection::LengthRequired)?;
            let end = pos.checked_add(length).ok_or(Rejection::BadRequest)?;
            if end > buf.len() {
                return Err(Rejection::BadRequest);
            }
            Some(buf[pos..end].to_vec())
        }
    };

    Ok(Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    })
}

/// Token up to the next space, advancing past the separator.
///
/// Returns None when no space exists before the end of the line or end of
/// the buffer.
fn take_until_space<'a>(buf: &'a [u8], pos: &mut usize) -> Option<&'a [u8]> {
    let rest = buf.get(*pos..)?;
    for (i, &b) in rest.iter().enumerate() {
        match b {
            b' ' => {
                *pos += i + 1;
                return Some(&rest[..i]);
            }
            b'\n' => return None,
            _ => {}
        }
    }
    None
}

/// Line up to the next `\n`, advancing past it, with a trailing `\r`
/// stripped. Returns None when no line terminator remains.
fn take_line<'a>(buf: &'a [u8], pos: &mut usize) -> Option<&'a [u8]> {
    let rest = buf.get(*pos..)?;
    let end = rest.iter().position(|&b| b == b'\n')?;
    *pos += end + 1;

    let mut line = &rest[..end];
    if line.last() == Some(&b'\r') {
        line = &line[..line.len() - 1];
    }
    Some(line)
}

fn as_text(bytes: &[u8]) -> Result<&str, Rejection> {
    std::str::from_utf8(bytes).map_err(|_| Rejection::BadRequest)
}

/// Positive Content-Length declared by the headers, if any.
///
/// Zero, non-numeric, and absent all count as undeclared.
fn declared_length(headers: &[Header]) -> Option<usize> {
    let value = headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case("Content-Length"))?
        .value
        .as_str();

    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}
