//! Cross-cutting request middleware.
//!
//! Order, outermost first: request ID → access log → recovery → timeouts.
//! The access log sits outside recovery so recovered panics are logged
//! with their final 500 status.

pub mod access_log;
pub mod recovery;

pub use access_log::access_log;
