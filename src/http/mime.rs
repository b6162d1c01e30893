/// Fallback MIME type for unknown or missing extensions.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Maps a file path to a MIME type based on its extension.
///
/// Pure lookup over a static table; paths with no extension, or with an
/// extension the table does not know, map to [`DEFAULT_MIME`].
pub fn mime_for(path: &str) -> &'static str {
    let file_name = path.rsplit('/').next().unwrap_or(path);

    let ext = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext,
        _ => return DEFAULT_MIME,
    };

    match ext.to_ascii_lowercase().as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "xml" => "application/xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "wasm" => "application/wasm",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        _ => DEFAULT_MIME,
    }
}
