use outpost::http::response::{Response, ResponseBuilder};
use outpost::http::writer::{SERVER_NAME, serialize_response};

/// Splits serialized wire bytes at the blank line into (header lines, body).
fn split_wire(bytes: &[u8]) -> (Vec<String>, Vec<u8>) {
    let sep = bytes
        .windows(2)
        .position(|w| w == b"\n\n")
        .expect("no blank line separator");
    let head = String::from_utf8(bytes[..sep].to_vec()).unwrap();
    let body = bytes[sep + 2..].to_vec();
    (head.lines().map(str::to_string).collect(), body)
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(200)
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, 200);
    assert_eq!(response.reason(), "OK");
    assert_eq!(response.body.as_deref(), Some(b"Hello, World!".as_slice()));
}

#[test]
fn test_response_builder_auto_content_length() {
    let response = ResponseBuilder::new(200).body(b"16 bytes of body".to_vec()).build();

    let length = response
        .headers
        .iter()
        .find(|h| h.name == "Content-Length")
        .map(|h| h.value.as_str());
    assert_eq!(length, Some("16"));
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(200)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    let lengths: Vec<&str> = response
        .headers
        .iter()
        .filter(|h| h.name.eq_ignore_ascii_case("Content-Length"))
        .map(|h| h.value.as_str())
        .collect();
    assert_eq!(lengths, vec!["999"]);
}

#[test]
fn test_response_from_status_has_no_body() {
    let response = Response::from_status(404);

    assert_eq!(response.status, 404);
    assert!(response.body.is_none());
    assert!(response.headers.is_empty());
}

#[test]
fn test_serialize_round_trip() {
    let response = ResponseBuilder::new(200)
        .header("Content-Type", "text/plain")
        .header("Content-Length", "5")
        .body(b"hello".to_vec())
        .build();

    let wire = serialize_response(&response);
    let (lines, body) = split_wire(&wire);

    assert_eq!(lines[0], "HTTP/1.0 200 OK");
    assert!(lines.iter().any(|l| l.starts_with("Server: ")));
    assert!(lines.iter().any(|l| l.starts_with("Date: ")));
    assert!(lines.contains(&"Content-Type: text/plain".to_string()));
    assert!(lines.contains(&"Content-Length: 5".to_string()));
    assert_eq!(body, b"hello");
}

#[test]
fn test_serialize_mandatory_headers_come_first() {
    let response = ResponseBuilder::new(200)
        .header("X-Custom", "value")
        .body(b"x".to_vec())
        .build();

    let wire = serialize_response(&response);
    let (lines, _) = split_wire(&wire);

    assert_eq!(lines[1], format!("Server: {}", SERVER_NAME));
    assert!(lines[2].starts_with("Date: "));
    // Caller headers follow the mandatory pair
    assert_eq!(lines[3], "X-Custom: value");
}

#[test]
fn test_serialize_preserves_caller_header_order() {
    let response = ResponseBuilder::new(200)
        .header("First", "1")
        .header("Second", "2")
        .header("Third", "3")
        .body(b"x".to_vec())
        .build();

    let wire = serialize_response(&response);
    let (lines, _) = split_wire(&wire);

    let caller: Vec<&String> = lines
        .iter()
        .filter(|l| {
            l.starts_with("First") || l.starts_with("Second") || l.starts_with("Third")
        })
        .collect();
    assert_eq!(caller[0], "First: 1");
    assert_eq!(caller[1], "Second: 2");
    assert_eq!(caller[2], "Third: 3");
}

#[test]
fn test_serialize_fallback_body_is_reason_phrase() {
    let wire = serialize_response(&Response::not_found());
    let (lines, body) = split_wire(&wire);

    assert_eq!(lines[0], "HTTP/1.0 404 Not Found");
    assert_eq!(body, b"Not Found");
}

#[test]
fn test_serialize_status_and_reason_stay_coupled() {
    for (status, expected) in [
        (400, "HTTP/1.0 400 Bad Request"),
        (411, "HTTP/1.0 411 Length Required"),
        (500, "HTTP/1.0 500 Internal Server Error"),
        (501, "HTTP/1.0 501 Not Implemented"),
        (505, "HTTP/1.0 505 HTTP Version Not Supported"),
    ] {
        let wire = serialize_response(&Response::from_status(status));
        let (lines, body) = split_wire(&wire);
        assert_eq!(lines[0], expected);
        assert!(!body.is_empty(), "status {} body must not be empty", status);
    }
}

#[test]
fn test_serialize_uses_lf_line_endings() {
    let wire = serialize_response(&Response::ok("x"));
    let head_end = wire.windows(2).position(|w| w == b"\n\n").unwrap();

    assert!(!wire[..head_end].contains(&b'\r'));
}

#[test]
fn test_response_helpers() {
    assert_eq!(Response::ok("body").status, 200);
    assert_eq!(Response::not_found().status, 404);
    assert_eq!(Response::internal_error().status, 500);
}
