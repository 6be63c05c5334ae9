use crate::config::Config;
use hyper::{Method, Uri, Version};

pub fn log_server_start(config: &Config) {
    println!("======================================");
    println!(
        "Server started http://{}:{}",
        config.server.host, config.server.port
    );
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Serving index.html and out/ from the working directory");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &std::net::SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_serving(filename: &str) {
    println!("[Serving] {filename}");
}

pub fn log_not_found(path: &str) {
    println!("[Response] 404 for {path}");
}

pub fn log_method_not_implemented(method: &Method) {
    eprintln!("[WARN] Method not implemented: {method}");
}

pub fn log_unknown_extension(extension: &str) {
    eprintln!("[WARN] Unknown extension for content type: {extension}");
}

pub fn log_file_error(filename: &str, err: &std::io::Error) {
    eprintln!("[ERROR] Failed to read file '{filename}': {err}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_server_stop() {
    println!("Server stopped.");
}
