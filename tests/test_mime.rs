use outpost::http::mime::{DEFAULT_MIME, mime_for};

#[test]
fn test_mime_common_types() {
    assert_eq!(mime_for("/index.html"), "text/html");
    assert_eq!(mime_for("/style.css"), "text/css");
    assert_eq!(mime_for("/app.js"), "text/javascript");
    assert_eq!(mime_for("/data.json"), "application/json");
    assert_eq!(mime_for("/logo.png"), "image/png");
    assert_eq!(mime_for("/notes.txt"), "text/plain");
}

#[test]
fn test_mime_extension_is_case_insensitive() {
    assert_eq!(mime_for("/PHOTO.JPG"), "image/jpeg");
    assert_eq!(mime_for("/Index.Html"), "text/html");
}

#[test]
fn test_mime_nested_path_uses_file_extension() {
    assert_eq!(mime_for("/assets/css/site.css"), "text/css");
    // Dots in directories do not count as an extension
    assert_eq!(mime_for("/v1.2/readme"), DEFAULT_MIME);
}

#[test]
fn test_mime_unknown_extension_falls_back() {
    assert_eq!(mime_for("/archive.xyz"), DEFAULT_MIME);
}

#[test]
fn test_mime_no_extension_falls_back() {
    assert_eq!(mime_for("/README"), DEFAULT_MIME);
    assert_eq!(mime_for("/"), DEFAULT_MIME);
}

#[test]
fn test_mime_dotfile_is_not_an_extension() {
    assert_eq!(mime_for("/.gitignore"), DEFAULT_MIME);
}
