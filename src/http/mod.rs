//! HTTP protocol layer module
//!
//! MIME classification and response building, decoupled from routing and
//! file I/O.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_501_response};
