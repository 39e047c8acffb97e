use minihttp::http::request::{Method, Request};
use minihttp::http::writer::serialize_request;

#[test]
fn test_method_parse_exact_tokens() {
    assert_eq!(Method::parse("GET"), Method::GET);
    assert_eq!(Method::parse("HEAD"), Method::HEAD);
}

#[test]
fn test_method_parse_is_case_sensitive() {
    assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    assert_eq!(Method::parse("Head"), Method::Other("Head".to_string()));
}

#[test]
fn test_method_other_keeps_token() {
    let method = Method::parse("DELETE");

    assert_eq!(method, Method::Other("DELETE".to_string()));
    assert_eq!(method.as_str(), "DELETE");
    assert_eq!(method.to_string(), "DELETE");
}

#[test]
fn test_request_new_sets_host_header() {
    let req = Request::new(Method::GET, "example.com", "/a.html");

    assert_eq!(req.host, "example.com");
    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("host"), Some("example.com"));
    assert_eq!(req.header("Missing"), None);
    assert_eq!(req.version, "HTTP/1.1");
}

#[test]
fn test_request_empty_path_normalized() {
    let req = Request::new(Method::GET, "localhost", "");

    assert_eq!(req.path, "/");
}

#[test]
fn test_serialize_get_request() {
    let req = Request::new(Method::GET, "localhost", "/a.html");

    assert_eq!(
        serialize_request(&req),
        b"GET /a.html HTTP/1.1\r\nHost: localhost\r\n\r\n".to_vec()
    );
}

#[test]
fn test_serialize_other_method_request() {
    let req = Request::new(Method::parse("POST"), "www.example.com", "/form");

    assert_eq!(
        serialize_request(&req),
        b"POST /form HTTP/1.1\r\nHost: www.example.com\r\n\r\n".to_vec()
    );
}
