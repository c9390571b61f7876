//! Plain-text responses.
//!
//! Every response body the service writes is `text/plain; charset=utf-8`,
//! whatever the endpoint or outcome.

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

pub const PONG: &str = "pong";
/// Paired with a 500 status; clients depend on this exact pairing.
pub const READ_FAILURE: &str = "Bad Request";
pub const EMPTY_BODY: &str = "Please add a text on the request body";
pub const NOT_FOUND: &str = "Not Found";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed.";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

const TEXT_PLAIN_UTF_8: &str = "text/plain; charset=utf-8";

/// Build a plain-text response.
pub fn text(status: StatusCode, body: impl Into<Body>) -> Response {
    (status, [(header::CONTENT_TYPE, TEXT_PLAIN_UTF_8)], body.into()).into_response()
}
