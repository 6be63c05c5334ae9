// Server loop module
// Accepts connections until a shutdown notification arrives

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::Config;
use crate::logger;

/// Accept connections until shutdown is signalled.
///
/// On shutdown the loop exits, the listener is dropped (closing the
/// socket), and the stop message is printed before returning.
pub async fn start_server_loop(
    listener: TcpListener,
    config: Arc<Config>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &config);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                break;
            }
        }
    }

    drop(listener);
    logger::log_server_stop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::listener::create_listener;
    use std::time::Duration;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::load_from("no-such-config-file").unwrap())
    }

    #[tokio::test]
    async fn test_shutdown_sent_before_loop_starts_still_exits() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let shutdown = Arc::new(Notify::new());

        // Signal arrives before the loop ever polls notified()
        shutdown.notify_one();

        let result = tokio::time::timeout(
            Duration::from_secs(1),
            start_server_loop(listener, test_config(), shutdown),
        )
        .await;

        assert!(
            result.is_ok(),
            "serve loop never observed a shutdown sent before it started"
        );
    }

    #[tokio::test]
    async fn test_shutdown_sent_while_loop_is_parked_exits() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let shutdown = Arc::new(Notify::new());

        let notifier = Arc::clone(&shutdown);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            notifier.notify_one();
        });

        let result = tokio::time::timeout(
            Duration::from_secs(1),
            start_server_loop(listener, test_config(), shutdown),
        )
        .await;

        assert!(result.is_ok(), "serve loop did not exit on shutdown");
    }
}
