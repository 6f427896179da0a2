// responses/static_files.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Serve `rel_path` from under `root`.
pub fn static_file_response(root: &Path, rel_path: &str) -> ResultResp {
    let path = resolve(root, rel_path)?;
    if !path.is_file() {
        return Err(ServerError::NotFound);
    }

    let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ServerError::NotFound,
        _ => {
            tracing::error!("reading {} failed: {e}", path.display());
            ServerError::InternalError
        }
    })?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type(&path).as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

// Only plain segments are allowed; `..`, roots and prefixes never reach the filesystem.
fn resolve(root: &Path, rel_path: &str) -> Result<PathBuf, ServerError> {
    let rel = Path::new(rel_path);
    if rel_path.is_empty() {
        return Err(ServerError::NotFound);
    }
    if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
        return Err(ServerError::BadRequest(format!("invalid asset path: {rel_path}")));
    }
    Ok(root.join(rel))
}

pub fn content_type(path: &Path) -> Mime {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("js") => mime::TEXT_JAVASCRIPT,
        Some("html") => mime::TEXT_HTML_UTF_8,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("svg") => mime::IMAGE_SVG,
        Some("ico") => "image/x-icon".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        Some("webp") => "image/webp".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
