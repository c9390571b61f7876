//! Request body handling and request IDs.
//!
//! # Responsibilities
//! - Read the full request body once, under a size bound
//! - Attach an `x-request-id` to every request and response
//!
//! # Design Decisions
//! - Request ID added as early as possible for the access log
//! - An incoming `x-request-id` is kept rather than replaced

use axum::body::{Body, Bytes};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Upper bound on a request body. Larger bodies count as a read failure.
pub const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Read the entire request body.
pub async fn read_body(body: Body) -> Result<Bytes, axum::Error> {
    axum::body::to_bytes(body, MAX_BODY_BYTES).await
}

/// Layer generating a UUID v4 `x-request-id` for requests without one.
pub fn set_request_id() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Layer copying the request's `x-request-id` onto the response.
pub fn propagate_request_id() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_whole_body() {
        let body = Body::from("hello world");
        assert_eq!(read_body(body).await.unwrap(), Bytes::from_static(b"hello world"));
    }

    #[tokio::test]
    async fn empty_body_is_not_an_error() {
        assert!(read_body(Body::empty()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn oversized_body_is_an_error() {
        let body = Body::from(vec![b'a'; MAX_BODY_BYTES + 1]);
        assert!(read_body(body).await.is_err());
    }
}
