//! Access log middleware.
//! Emits one structured event per request through the service logger.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};

use crate::http::request::X_REQUEST_ID;
use crate::observability::Logger;

pub async fn access_log(State(logger): State<Logger>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_owned());

    let response = logger.attach(next.run(request)).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    logger.in_scope(|| {
        if status >= 500 {
            tracing::error!(%method, %path, status, latency_ms, %request_id, %client_ip, "request completed");
        } else if status >= 400 {
            tracing::warn!(%method, %path, status, latency_ms, %request_id, %client_ip, "request completed");
        } else {
            tracing::info!(%method, %path, status, latency_ms, %request_id, %client_ip, "request completed");
        }
    });

    response
}
