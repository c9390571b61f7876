//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → accept loop stops → connections drain → exit
//! ```
//!
//! # Design Decisions
//! - Config is validated before the listener is bound (fail fast)
//! - Shutdown has a deadline: connections still open after it are dropped

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownSignal};
