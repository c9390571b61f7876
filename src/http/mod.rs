//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! connection (net layer)
//!     → middleware (request ID, access log, recovery, timeouts)
//!     → server.rs routing table
//!     → handlers.rs (read body, validate, transform)
//!     → response.rs (plain-text response)
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{build_router, HttpServer, ServeError};
