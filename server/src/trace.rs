//! Request logging middleware.
//!
//! # Design
//! One info event before dispatch and one after, so every request — the
//! happy path, validation short-circuits, and legacy redirects alike —
//! leaves a Started/Finished pair in the log. Timestamps come from the
//! subscriber's fmt layer. Purely observational: the response passes
//! through untouched.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    info!(%method, %path, "Started");
    let response = next.run(request).await;
    info!(%method, %path, status = %response.status(), "Finished");

    response
}
