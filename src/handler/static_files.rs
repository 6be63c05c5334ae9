//! Static file serving module
//!
//! Loads resolved files from disk and builds their responses.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a resolved filename, read relative to the working directory.
///
/// A file that does not exist or cannot be read yields an explicit 404
/// with the read error logged.
pub async fn serve_file(filename: &str) -> Response<Full<Bytes>> {
    match load_file(filename).await {
        Ok(content) => {
            let content_type = mime::content_type_for(filename);
            http::response::build_file_response(content, content_type)
        }
        Err(e) => {
            logger::log_file_error(filename, &e);
            http::build_404_response()
        }
    }
}

/// Read a file's full contents as bytes.
pub async fn load_file(path: impl AsRef<Path>) -> std::io::Result<Vec<u8>> {
    fs::read(path).await
}
