//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, path
//! resolution, and dispatch to the file-serving executor.

use crate::config::Config;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// What a request maps to, decided before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Serve the bytes of this local file.
    Serve(String),
    /// No route matches the path.
    NotFound,
    /// Methods other than GET have no behavior here.
    NotImplemented,
}

/// Map a request path to a local filename, or reject it.
///
/// Exactly two routes exist: `/` serves `index.html`, and `/out/...`
/// serves the path with the leading slash removed. No other normalization
/// is applied to the path.
pub fn resolve_path(path: &str) -> Option<String> {
    if path == "/" {
        Some("index.html".to_string())
    } else if path.starts_with("/out/") {
        Some(path[1..].to_string())
    } else {
        None
    }
}

/// Pure dispatch: `(method, path)` to an [`Action`].
pub fn dispatch(method: &Method, path: &str) -> Action {
    if *method != Method::GET {
        return Action::NotImplemented;
    }

    match resolve_path(path) {
        Some(filename) => Action::Serve(filename),
        None => Action::NotFound,
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();

    if config.logging.access_log {
        logger::log_request(method, uri, req.version());
    }

    let response = match dispatch(method, path) {
        Action::Serve(filename) => {
            logger::log_serving(&filename);
            static_files::serve_file(&filename).await
        }
        Action::NotFound => {
            logger::log_not_found(path);
            http::build_404_response()
        }
        Action::NotImplemented => {
            logger::log_method_not_implemented(method);
            http::build_501_response()
        }
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_to_index() {
        assert_eq!(resolve_path("/"), Some("index.html".to_string()));
    }

    #[test]
    fn test_out_prefix_strips_leading_slash() {
        assert_eq!(
            resolve_path("/out/app.wasm"),
            Some("out/app.wasm".to_string())
        );
        assert_eq!(
            resolve_path("/out/nested/app.js"),
            Some("out/nested/app.js".to_string())
        );
    }

    #[test]
    fn test_bare_out_prefix_resolves_to_directory_name() {
        // "/out/" itself matches the prefix rule; the read later fails.
        assert_eq!(resolve_path("/out/"), Some("out/".to_string()));
    }

    #[test]
    fn test_everything_else_is_unroutable() {
        assert_eq!(resolve_path("/missing"), None);
        assert_eq!(resolve_path("/index.html"), None);
        assert_eq!(resolve_path("/out"), None);
        assert_eq!(resolve_path("/outside/app.js"), None);
        assert_eq!(resolve_path(""), None);
    }

    #[test]
    fn test_dispatch_get() {
        assert_eq!(
            dispatch(&Method::GET, "/"),
            Action::Serve("index.html".to_string())
        );
        assert_eq!(dispatch(&Method::GET, "/missing"), Action::NotFound);
    }

    #[test]
    fn test_dispatch_rejects_other_methods() {
        assert_eq!(dispatch(&Method::POST, "/"), Action::NotImplemented);
        assert_eq!(dispatch(&Method::HEAD, "/"), Action::NotImplemented);
        assert_eq!(
            dispatch(&Method::DELETE, "/out/app.js"),
            Action::NotImplemented
        );
    }
}
