//! Logger module
//!
//! Stdout/stderr logging for the HTTP server:
//! - Server lifecycle logging
//! - Per-request access lines in Common Log Format
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Bookstore server started");
    println!("Listening on: http://{addr}");
    println!(
        "Mode: {}",
        config.node_env.as_deref().unwrap_or("development")
    );
    if config.db_url.is_some() {
        // Value withheld: connection URLs carry credentials
        println!("DB_URL is set; persistence integration pending");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

/// Log startup in non-production mode, where no listener is bound
pub fn log_standby(config: &Config) {
    println!(
        "NODE_ENV is '{}'; not binding a listener",
        config.node_env.as_deref().unwrap_or("unset")
    );
    println!("Handlers stay available for in-process use through the library crate");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_common());
}
