// Server module entry point
// Listener construction, connection handling, signals, and the accept loop

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module in loop.rs needs another name
#[path = "loop.rs"]
pub mod server_loop;

// Re-export common entry points
pub use listener::create_listener;
pub use server_loop::start_server_loop;
pub use signal::start_signal_handler;
