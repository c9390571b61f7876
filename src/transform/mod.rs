//! Text transforms applied to request bodies.
//!
//! # Responsibilities
//! - Reverse a character sequence
//! - Keep only the characters at even positions
//! - Map a raw body to its transformed form
//!
//! # Design Decisions
//! - Characters are Unicode scalar values, never raw bytes
//! - Invalid UTF-8 decodes to U+FFFD before transforming
//! - Identity keeps the exact input bytes

use axum::body::Bytes;

/// Returns the characters of `s` in opposite order.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Returns the characters of `s` at even (0-based) positions, in order.
pub fn skip_odd(s: &str) -> String {
    s.chars().step_by(2).collect()
}

/// The body transform bound to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Body is returned verbatim.
    Identity,
    /// Body characters in opposite order.
    Reverse,
    /// Body characters at even positions.
    SkipOdd,
}

impl Transform {
    /// Apply the transform to a raw request body.
    pub fn apply(self, body: &[u8]) -> Bytes {
        match self {
            Transform::Identity => Bytes::copy_from_slice(body),
            Transform::Reverse => Bytes::from(reverse(&String::from_utf8_lossy(body))),
            Transform::SkipOdd => Bytes::from(skip_odd(&String::from_utf8_lossy(body))),
        }
    }

    /// Short name used in log fields.
    pub fn name(self) -> &'static str {
        match self {
            Transform::Identity => "identity",
            Transform::Reverse => "reverse",
            Transform::SkipOdd => "skip_odd",
        }
    }
}
