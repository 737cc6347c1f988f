//! Static bundle serving module
//!
//! Serves the pre-built frontend assets and the single-page-application
//! fallback that lets the client-side router own unmatched paths.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

const INDEX_FILE: &str = "index.html";

/// Serve a request against the frontend bundle.
///
/// A path matching a file under the bundle directory is served directly;
/// everything else falls back to `index.html` so the client router can take
/// over.
pub async fn serve_spa(ctx: &RequestContext<'_>, static_dir: &Path) -> Response<Full<Bytes>> {
    match load_from_directory(static_dir, ctx.path).await {
        Some((content, content_type)) => build_asset_response(&content, content_type, ctx),
        None => serve_index(ctx, static_dir).await,
    }
}

/// Serve the SPA entry point
async fn serve_index(ctx: &RequestContext<'_>, static_dir: &Path) -> Response<Full<Bytes>> {
    let index_path = static_dir.join(INDEX_FILE);
    match fs::read(&index_path).await {
        Ok(content) => {
            build_asset_response(&content, mime::get_content_type(Some("html")), ctx)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read SPA entry point '{}': {e}",
                index_path.display()
            ));
            http::build_500_response()
        }
    }
}

/// Load a static file from the bundle directory
pub async fn load_from_directory(
    static_dir: &Path,
    path: &str,
) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");

    let mut file_path = static_dir.join(&clean_path);

    // Security: ensure file_path stays within the bundle directory
    let static_dir_canonical = match static_dir.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{}': {e}",
                static_dir.display()
            ));
            return None;
        }
    };

    // Directory requests resolve to their index file
    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        file_path = file_path.join(INDEX_FILE);
    }

    // File not found is common (the SPA fallback takes over), no log here
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    // Determine content type from extension
    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build the response for a bundle asset, honoring conditional requests
fn build_asset_response(
    data: &[u8],
    content_type: &'static str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    http::build_static_response(data, content_type, &etag, ctx.is_head)
}
