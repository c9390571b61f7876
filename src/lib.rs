//! Transform Service Library
//!
//! A small HTTP service with a health check and three body transforms:
//! echo, reverse and skip-odd.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod transform;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use observability::Logger;
