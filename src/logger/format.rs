//! Access log format module
//!
//! Formats per-request access lines in Common Log Format.

use chrono::Local;

/// Access log entry for a completed request
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, HEAD, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with the current timestamp
    #[must_use]
    pub fn new(method: &str, path: &str, status: u16, body_bytes: u64) -> Self {
        Self {
            time: Local::now(),
            method: method.to_string(),
            path: path.to_string(),
            status,
            body_bytes,
        }
    }

    /// Common Log Format (CLF)
    /// `- - - [$time_local] "$request" $status $body_bytes_sent`
    ///
    /// The server only speaks HTTP/1.1, so the request line is fixed to it.
    #[must_use]
    pub fn format_common(&self) -> String {
        format!(
            "- - - [{}] \"{} {} HTTP/1.1\" {} {}",
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.body_bytes,
        )
    }
}
