//! Server module
//!
//! Binds the listener and runs the accept loop. Listener creation is kept
//! separate from request handling so the handler stack can be exercised
//! in-process without a socket.

pub mod connection;
pub mod listener;

// Re-export commonly used entry points
pub use listener::create_listener;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;

/// Accept connections until the process exits.
///
/// Entering this loop is the one `Constructed -> Listening` transition the
/// server has; there is no stop or restart operation. Accept errors are
/// logged and the loop continues.
pub async fn run(listener: TcpListener, state: Arc<AppState>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::accept_connection(stream, peer_addr, &state);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
