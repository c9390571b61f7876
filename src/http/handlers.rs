//! Endpoint handlers.
//!
//! Body-consuming endpoints share one contract, implemented by
//! [`transform_body`]:
//!
//! ```text
//! read body ──err──▶ 500 "Bad Request"
//!     │
//!   empty ─────────▶ 400 "Please add a text on the request body"
//!     │
//!     └───────────▶ 200 transform(body)
//! ```

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::Response;

use crate::http::request::read_body;
use crate::http::response::{self, text};
use crate::transform::Transform;

/// Read `body` and answer with `transform` applied to it.
pub async fn transform_body(body: Body, transform: Transform) -> Response {
    let bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(transform = transform.name(), error = %e, "Failed to read request body");
            return text(StatusCode::INTERNAL_SERVER_ERROR, response::READ_FAILURE);
        }
    };

    if bytes.is_empty() {
        return text(StatusCode::BAD_REQUEST, response::EMPTY_BODY);
    }

    text(StatusCode::OK, transform.apply(&bytes))
}

/// `GET /ping`. Ignores the body.
pub async fn ping() -> Response {
    text(StatusCode::OK, response::PONG)
}

/// `GET /echo`
pub async fn echo(body: Body) -> Response {
    transform_body(body, Transform::Identity).await
}

/// `POST /reverse`
pub async fn reverse(body: Body) -> Response {
    transform_body(body, Transform::Reverse).await
}

/// `POST /skip_odd`
pub async fn skip_odd(body: Body) -> Response {
    transform_body(body, Transform::SkipOdd).await
}

/// Fallback for paths with no route.
pub async fn not_found() -> Response {
    text(StatusCode::NOT_FOUND, response::NOT_FOUND)
}

/// Fallback for known paths requested with the wrong method.
pub async fn method_not_allowed() -> Response {
    text(StatusCode::METHOD_NOT_ALLOWED, response::METHOD_NOT_ALLOWED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use futures_util::stream;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn transform_applies_to_body() {
        let response = transform_body(Body::from("ping"), Transform::Reverse).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "gnip");
    }

    #[tokio::test]
    async fn empty_body_is_client_error() {
        let response = transform_body(Body::empty(), Transform::SkipOdd).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, response::EMPTY_BODY);
    }

    #[tokio::test]
    async fn read_failure_keeps_legacy_message() {
        let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
            Ok(Bytes::from_static(b"pi")),
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset")),
        ];
        let body = Body::from_stream(stream::iter(chunks));

        let response = transform_body(body, Transform::Identity).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Bad Request");
    }

    #[tokio::test]
    async fn ping_ignores_everything() {
        let response = ping().await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_string(response).await, "pong");
    }
}
