//! Request handler module
//!
//! Pure routing dispatch composed with the file-serving executor.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
