use minihttp::client::target::{Target, TargetError};
use minihttp::http::request::Method;

#[test]
fn test_target_with_port_and_path() {
    let target = Target::parse("localhost:8080/a.html", None).unwrap();

    assert_eq!(target.host, "localhost");
    assert_eq!(target.port, 8080);
    assert_eq!(target.path, "/a.html");
    assert_eq!(target.method, Method::GET);
}

#[test]
fn test_target_defaults() {
    let target = Target::parse("www.example.com", None).unwrap();

    assert_eq!(target.port, 80);
    assert_eq!(target.path, "/");
}

#[test]
fn test_target_scheme_is_stripped() {
    let plain = Target::parse("example.com/test.html", None).unwrap();

    assert_eq!(Target::parse("http://example.com/test.html", None).unwrap(), plain);
    assert_eq!(Target::parse("https://example.com/test.html", None).unwrap(), plain);
}

#[test]
fn test_target_method_uppercased() {
    let target = Target::parse("localhost:9000/", Some("head")).unwrap();
    assert_eq!(target.method, Method::HEAD);

    let target = Target::parse("localhost:9000/", Some("post")).unwrap();
    assert_eq!(target.method, Method::Other("POST".to_string()));
}

#[test]
fn test_target_keeps_query() {
    let target = Target::parse("localhost/search?q=rust", None).unwrap();

    assert_eq!(target.path, "/search?q=rust");
}

#[test]
fn test_target_empty() {
    assert!(matches!(Target::parse("", None), Err(TargetError::Empty)));
    assert!(matches!(Target::parse("http://", None), Err(TargetError::Empty)));
}

#[test]
fn test_target_bad_port() {
    assert!(matches!(
        Target::parse("localhost:notaport/a", None),
        Err(TargetError::Invalid { .. })
    ));
    assert!(matches!(
        Target::parse("localhost:99999/a", None),
        Err(TargetError::Invalid { .. })
    ));
}

#[test]
fn test_target_path_is_verbatim() {
    let cases = [
        ("localhost/my file.html", "/my file.html"),
        ("localhost/café.html", "/café.html"),
        ("localhost/a/../b.html", "/a/../b.html"),
        ("localhost:8080/x%20y", "/x%20y"),
    ];

    for (input, expected) in cases {
        assert_eq!(Target::parse(input, None).unwrap().path, expected, "{input}");
    }
}

#[test]
fn test_target_query_without_path() {
    let target = Target::parse("localhost:8080?q=1", None).unwrap();

    assert_eq!(target.port, 8080);
    assert_eq!(target.path, "/?q=1");
}

#[test]
fn test_target_missing_authority() {
    assert!(matches!(
        Target::parse("/index.html", None),
        Err(TargetError::Invalid { .. })
    ));
}
