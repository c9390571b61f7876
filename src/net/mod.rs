//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (accept loop, connection limits)
//!     → connection.rs (tracking, HTTP/1.1 + HTTP/2 serving)
//!     → axum Router (http module)
//! ```
//!
//! # Design Decisions
//! - Bounded accept queue prevents resource exhaustion
//! - Each connection tracked for graceful shutdown

pub mod connection;
pub mod listener;

pub use connection::{serve_connection, ConnectionTracker};
pub use listener::{Listener, ListenerError};
