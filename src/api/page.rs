use crate::SharedData;
use axum::Router;
use axum::response::{Html, Redirect};
use axum::routing::get;
use std::sync::Arc;

/// Browser list view. Everything it does goes through the JSON API under `/api/todos`.
const TODO_PAGE: &str = include_str!("../../assets/todos.html");

/// Routes for the browser-facing pages
pub fn page_routes() -> Router<Arc<SharedData>> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/todos") }))
        .route("/todos", get(todo_page))
}

async fn todo_page() -> Html<&'static str> {
    Html(TODO_PAGE)
}
