//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! main.rs builds a Logger from the configured LogFormat
//!     → HttpServer (startup and connection events)
//!     → access log middleware (one event per request)
//!     → recovery middleware (handler panics)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON or text) through tracing
//! - The Logger handle is passed explicitly, never installed globally

pub mod logging;

pub use logging::Logger;
