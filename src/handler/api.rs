//! JSON API endpoints
//!
//! Placeholder handlers for the API surface. Both respond with a fixed
//! single-key payload; real data arrives with the persistence integration.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::http;

/// Single-key payload returned by the API stubs
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiMessage {
    pub msg: String,
}

impl ApiMessage {
    #[must_use]
    pub fn new(msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
        }
    }
}

/// Health check endpoint
pub fn health(is_head: bool) -> Response<Full<Bytes>> {
    http::build_json_response(
        StatusCode::OK,
        &ApiMessage::new("api is up and running"),
        is_head,
    )
}

/// Books endpoint
pub fn books(is_head: bool) -> Response<Full<Bytes>> {
    http::build_json_response(
        StatusCode::OK,
        &ApiMessage::new("this is the books endpoint"),
        is_head,
    )
}
