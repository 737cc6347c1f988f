//! HTTP protocol layer module
//!
//! Response building, MIME detection and cache validation shared by the
//! JSON endpoints and the static bundle handlers.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_500_response,
    build_json_response, build_options_response, build_static_response,
};
