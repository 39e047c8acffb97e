use minihttp::http::parser::{ParseError, find_headers_end, parse_request, parse_response_head};
use minihttp::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.host, "example.com");
}

#[test]
fn test_parse_head_request() {
    let req = b"HEAD /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::HEAD);
    assert_eq!(parsed.path, "/index.html");
}

#[test]
fn test_parse_unsupported_method_is_kept() {
    let req = b"PATCH /a HTTP/1.1\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::Other("PATCH".to_string()));
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(parsed.header("User-Agent"), Some("test-client"));
    assert_eq!(parsed.header("Accept"), Some("*/*"));
}

#[test]
fn test_parse_ignores_bytes_after_head() {
    let req = b"GET /a HTTP/1.1\r\nHost: h\r\n\r\nnot a header";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.iter().count(), 1);
}

#[test]
fn test_parse_request_without_version() {
    let parsed = parse_request(b"GET /legacy\r\n\r\n").unwrap();

    assert_eq!(parsed.path, "/legacy");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_empty_request() {
    assert_eq!(parse_request(b"").unwrap_err(), ParseError::Empty);
    assert_eq!(parse_request(b"\r\n\r\n").unwrap_err(), ParseError::Empty);
}

#[test]
fn test_parse_missing_target() {
    assert_eq!(parse_request(b"GET\r\n\r\n").unwrap_err(), ParseError::InvalidRequest);
}

#[test]
fn test_parse_malformed_header() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n";

    assert_eq!(parse_request(req).unwrap_err(), ParseError::InvalidHeader);
}

#[test]
fn test_parse_invalid_utf8() {
    let req = b"GET /\xff\xfe HTTP/1.1\r\n\r\n";

    assert_eq!(parse_request(req).unwrap_err(), ParseError::InvalidEncoding);
}

#[test]
fn test_find_headers_end() {
    assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n\r\n"), Some(14));
    assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n"), None);
}

#[test]
fn test_parse_response_head() {
    let buf = b"HTTP/1.1 404 NOT FOUND\r\nHost: localhost\r\nContent-Length: 14\r\n\r\nFile not found";
    let (head, consumed) = parse_response_head(buf).unwrap();

    assert_eq!(head.version, "HTTP/1.1");
    assert_eq!(head.status, 404);
    assert_eq!(head.reason, "NOT FOUND");
    assert_eq!(head.headers.content_length(), Some(14));
    assert_eq!(&buf[consumed..], b"File not found");
}

#[test]
fn test_parse_response_head_incomplete() {
    let result = parse_response_head(b"HTTP/1.1 200 OK\r\nHost: x\r\n");

    assert_eq!(result.unwrap_err(), ParseError::Incomplete);
}

#[test]
fn test_parse_response_head_bad_status_line() {
    assert_eq!(
        parse_response_head(b"HTTP/1.1 abc OK\r\n\r\n").unwrap_err(),
        ParseError::InvalidStatusLine
    );
    assert_eq!(
        parse_response_head(b"garbage\r\n\r\n").unwrap_err(),
        ParseError::InvalidStatusLine
    );
}
