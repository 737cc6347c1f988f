// Connection handling module
// Accepts a TCP connection and serves HTTP/1.1 requests on it

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept a connection and serve it in a spawned task
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<AppState>,
) {
    logger::log_connection_accepted(&peer_addr);
    handle_connection(stream, Arc::clone(state));
}

/// Serve HTTP/1.1 on a single connection until the peer closes it.
///
/// The stream is wrapped in `TokioIo`, served with keep-alive, and every
/// request on it goes through the request handler. Handlers are stateless,
/// so the task needs nothing beyond the shared state.
fn handle_connection(stream: tokio::net::TcpStream, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handler::handle_request(req, state).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
