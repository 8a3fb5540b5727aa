//! # Error Types — Canonicalization Failures
//!
//! Defines the error type shared by every stage of the pipeline. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Parse failures carry the byte offset where the input stopped conforming,
//!   so callers can point at the offending region of source text.
//! - Every failure surfaces to the caller; nothing is retried, logged, or
//!   swallowed, and no canonical bytes are produced on any error path.

use thiserror::Error;

/// Top-level error type for canonicalization.
#[derive(Error, Debug)]
pub enum JcsError {
    /// Source text was not valid RFC 8259 JSON.
    #[error("parse error at byte {offset}: {reason}")]
    Parse {
        /// Byte position in the input where the error was detected.
        offset: usize,
        /// Short description of what was expected or found.
        reason: String,
    },

    /// A number outside the finite binary64 domain: NaN, an infinity, or a
    /// numeric token whose magnitude overflows IEEE-754 double precision.
    #[error("number is not representable as a finite binary64: {0}")]
    UnrepresentableNumber(f64),

    /// A string under construction contained an unpaired surrogate.
    ///
    /// Rust's `String` cannot hold a lone surrogate, so this variant is not
    /// reachable through safe construction here; it is part of the stable
    /// error contract shared with other implementations of the scheme, where
    /// caller-assembled strings can bypass the parser.
    #[error("string contains an unpaired surrogate")]
    InvalidString,

    /// An object contained the same key twice under the reject policy.
    #[error("duplicate object key: {key:?}")]
    DuplicateKey {
        /// The key that appeared more than once.
        key: String,
    },

    /// The serde bridge failed to turn a value into a JSON tree.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
