use outpost::http::request::{Header, Method, Request, RequestBuilder};

#[test]
fn test_method_from_str_exact_match() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::from_str("PUT"), Some(Method::PUT));
    assert_eq!(Method::from_str("DELETE"), Some(Method::DELETE));
    assert_eq!(Method::from_str("get"), None); // case-sensitive
    assert_eq!(Method::from_str("GE"), None); // prefixes do not match
    assert_eq!(Method::from_str("GETS"), None);
    assert_eq!(Method::from_str(""), None);
}

#[test]
fn test_method_as_str_round_trip() {
    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
        assert_eq!(Method::from_str(method.as_str()), Some(method));
    }
}

#[test]
fn test_request_header_lookup_is_case_insensitive() {
    let req = Request {
        method: Method::GET,
        path: "/".to_string(),
        version: "HTTP/1.0".to_string(),
        headers: vec![Header::new("Content-Type", "application/json")],
        body: None,
    };

    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("CONTENT-TYPE"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_header_lookup_returns_first_duplicate() {
    let req = Request {
        method: Method::GET,
        path: "/".to_string(),
        version: "HTTP/1.0".to_string(),
        headers: vec![
            Header::new("Accept", "text/html"),
            Header::new("Accept", "text/plain"),
        ],
        body: None,
    };

    assert_eq!(req.header("Accept"), Some("text/html"));
    assert_eq!(req.headers.len(), 2);
}

#[test]
fn test_request_content_length_parsing() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/api")
        .header("Content-Length", "42")
        .build()
        .unwrap();

    assert_eq!(req.content_length(), Some(42));
}

#[test]
fn test_request_content_length_missing_or_invalid() {
    let missing = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .build()
        .unwrap();
    assert_eq!(missing.content_length(), None);

    let invalid = RequestBuilder::new()
        .method(Method::POST)
        .path("/api")
        .header("Content-Length", "not-a-number")
        .build()
        .unwrap();
    assert_eq!(invalid.content_length(), None);
}

#[test]
fn test_request_builder_preserves_header_order() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .header("First", "1")
        .header("Second", "2")
        .header("Third", "3")
        .build()
        .unwrap();

    let names: Vec<&str> = req.headers.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn test_request_builder_defaults_version() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.0");
    assert!(req.body.is_none());
}

#[test]
fn test_request_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}
