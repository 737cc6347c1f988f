//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, and dispatch to the API or static bundle handlers.

use crate::config::AppState;
use crate::handler::{api, static_files};
use crate::http;
use crate::logger;
use crate::logger::AccessLogEntry;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating what the route handlers need
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling.
///
/// Generic over the body type so a test harness can drive it with synthetic
/// requests; no handler reads the request body.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method) {
        logger::log_access(&AccessLogEntry::new(
            method.as_str(),
            path,
            resp.status().as_u16(),
            0,
        ));
        return Ok(resp);
    }

    // 2. Extract headers for conditional requests
    let ctx = RequestContext {
        path,
        is_head,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    // 3. Dispatch
    let response = route_request(&ctx, &state).await;

    logger::log_access(&AccessLogEntry::new(
        method.as_str(),
        path,
        response.status().as_u16(),
        response.body().size_hint().exact().unwrap_or(0),
    ));

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route request based on path and mode.
///
/// The JSON routes are always active; the bundle handler only exists in
/// production mode, where it also owns the fallback for unmatched paths.
async fn route_request(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    match ctx.path {
        "/health" => api::health(ctx.is_head),
        "/books" => api::books(ctx.is_head),
        _ if state.serves_frontend() => static_files::serve_spa(ctx, &state.static_dir).await,
        _ => http::build_404_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use hyper::StatusCode;
    use std::path::PathBuf;

    fn test_config(node_env: Option<&str>) -> Config {
        Config {
            port: None,
            db_url: None,
            node_env: node_env.map(ToString::to_string),
        }
    }

    fn dev_state() -> Arc<AppState> {
        Arc::new(AppState::with_static_dir(
            &test_config(Some("test")),
            PathBuf::from("no-such-bundle"),
        ))
    }

    fn production_state(static_dir: PathBuf) -> Arc<AppState> {
        Arc::new(AppState::with_static_dir(
            &test_config(Some("production")),
            static_dir,
        ))
    }

    async fn send(state: &Arc<AppState>, method: Method, path: &str) -> (StatusCode, Bytes) {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(())
            .expect("request");
        let resp = handle_request(req, Arc::clone(state))
            .await
            .expect("handler is infallible");
        let status = resp.status();
        let body = resp.into_body().collect().await.expect("body").to_bytes();
        (status, body)
    }

    #[tokio::test]
    async fn health_returns_fixed_payload() {
        let state = dev_state();
        let (status, body) = send(&state, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], br#"{"msg":"api is up and running"}"#);
    }

    #[tokio::test]
    async fn books_returns_fixed_payload() {
        let state = dev_state();
        let (status, body) = send(&state, Method::GET, "/books").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], br#"{"msg":"this is the books endpoint"}"#);
    }

    #[tokio::test]
    async fn repeated_requests_are_byte_identical() {
        let state = dev_state();
        let first = send(&state, Method::GET, "/health").await;
        let second = send(&state, Method::GET, "/health").await;
        assert_eq!(first, second);

        let first = send(&state, Method::GET, "/books").await;
        let second = send(&state, Method::GET, "/books").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unmatched_path_is_not_found_outside_production() {
        let state = dev_state();
        let (status, _) = send(&state, Method::GET, "/nonexistent-path").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn head_health_has_empty_body() {
        let state = dev_state();
        let (status, body) = send(&state, Method::HEAD, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn post_is_rejected() {
        let state = dev_state();
        let (status, _) = send(&state, Method::POST, "/health").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unmatched_path_falls_back_to_index_in_production() {
        let dist = tempfile::tempdir().expect("tempdir");
        std::fs::write(dist.path().join("index.html"), "<html>bookstore</html>")
            .expect("write");
        let state = production_state(dist.path().to_path_buf());

        let (status, body) = send(&state, Method::GET, "/reading-list/42").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"<html>bookstore</html>");
    }

    #[tokio::test]
    async fn bundle_assets_are_served_in_production() {
        let dist = tempfile::tempdir().expect("tempdir");
        std::fs::write(dist.path().join("index.html"), "<html>bookstore</html>")
            .expect("write");
        std::fs::write(dist.path().join("app.js"), "console.log(1);").expect("write");
        let state = production_state(dist.path().to_path_buf());

        let req = Request::builder().uri("/app.js").body(()).expect("request");
        let resp = handle_request(req, Arc::clone(&state))
            .await
            .expect("handler is infallible");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "application/javascript");

        let body = resp.into_body().collect().await.expect("body").to_bytes();
        assert_eq!(&body[..], b"console.log(1);");
    }

    #[tokio::test]
    async fn api_routes_win_over_the_bundle() {
        let dist = tempfile::tempdir().expect("tempdir");
        std::fs::write(dist.path().join("index.html"), "<html>bookstore</html>")
            .expect("write");
        let state = production_state(dist.path().to_path_buf());

        let (status, body) = send(&state, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], br#"{"msg":"api is up and running"}"#);
    }
}
