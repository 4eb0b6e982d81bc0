use crate::persistence::test_util::in_memory_connectivity;
use crate::{SharedData, build_router};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Path the todo API is served on
pub const TODO_PATH: &str = "/api/todos";

/// Builds the full application router on top of a fresh in-memory store
pub async fn test_app() -> Router {
    let ext_cxn = in_memory_connectivity().await;

    build_router(Arc::new(SharedData { ext_cxn }))
}

/// Builds a request against the todo API with an optional JSON body
pub fn todo_request(method: Method, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(TODO_PATH);

    match body {
        Some(json_body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("test request should be valid")
}

/// Sends a request through the router and waits for the response
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("router should never fail to produce a response")
}
