//! Panic recovery middleware.
//!
//! A panic inside a handler becomes a `500 Internal Server Error` for that
//! request only. The connection and every other request keep running.

use std::any::Any;

use axum::body::Body;
use axum::http::{Response, StatusCode};
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::http::response::{self, text};
use crate::observability::Logger;

/// Turns a caught panic into a response, logging the payload.
#[derive(Clone, Debug)]
pub struct PanicResponder {
    logger: Logger,
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Self::ResponseBody> {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s
        } else {
            "non-string panic payload"
        };

        self.logger
            .in_scope(|| tracing::error!(panic = detail, "Recovered from handler panic"));

        text(StatusCode::INTERNAL_SERVER_ERROR, response::INTERNAL_ERROR)
    }
}

/// Build the recovery layer.
pub fn layer(logger: Logger) -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder { logger })
}
