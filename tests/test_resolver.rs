use std::fs;

use minihttp::server::resolver::{DocumentRoot, Resolution};

#[tokio::test]
async fn test_resolve_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.html"), "hello").unwrap();

    let root = DocumentRoot::new(dir.path());
    let resolution = root.resolve("/a.html").await.unwrap();

    assert_eq!(resolution, Resolution::Found(dir.path().join("a.html")));
}

#[tokio::test]
async fn test_resolve_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let root = DocumentRoot::new(dir.path());
    let resolution = root.resolve("/nope.html").await.unwrap();

    assert!(matches!(resolution, Resolution::Missing(_)));
}

#[tokio::test]
async fn test_resolve_slash_is_index() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();

    let root = DocumentRoot::new(dir.path());

    assert_eq!(
        root.resolve("/").await.unwrap(),
        root.resolve("/index.html").await.unwrap()
    );
}

#[tokio::test]
async fn test_resolve_doubled_separator() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.html"), "hello").unwrap();

    let plain = DocumentRoot::new(dir.path());
    let slashed = DocumentRoot::new(format!("{}/", dir.path().display()));

    assert_eq!(
        plain.resolve("/a.html").await.unwrap(),
        slashed.resolve("/a.html").await.unwrap()
    );
}

#[tokio::test]
async fn test_resolve_directory_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();

    let root = DocumentRoot::new(dir.path());

    assert!(matches!(root.resolve("/sub").await.unwrap(), Resolution::Missing(_)));
}

#[tokio::test]
async fn test_resolve_traversal_is_forbidden() {
    let outer = tempfile::tempdir().unwrap();
    let public = outer.path().join("public");
    fs::create_dir(&public).unwrap();
    fs::write(outer.path().join("secret.txt"), "secret").unwrap();

    let root = DocumentRoot::new(&public);
    let resolution = root.resolve("/../secret.txt").await.unwrap();

    assert!(matches!(resolution, Resolution::Forbidden(_)));
}

#[tokio::test]
async fn test_resolve_missing_traversal_is_missing() {
    let dir = tempfile::tempdir().unwrap();

    let root = DocumentRoot::new(dir.path());

    assert!(matches!(
        root.resolve("/../../no-such-file-anywhere").await.unwrap(),
        Resolution::Missing(_)
    ));
}

#[tokio::test]
async fn test_resolve_path_through_regular_file_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.html"), "hello").unwrap();

    let root = DocumentRoot::new(dir.path());
    let resolution = root.resolve("/a.html/nope").await.unwrap();

    assert!(matches!(resolution, Resolution::Missing(_)));
}
