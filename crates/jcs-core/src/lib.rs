//! # jcs-core — RFC 8785 JSON Canonicalization
//!
//! Maps any JSON value to the unique byte sequence defined by the JSON
//! Canonicalization Scheme (RFC 8785), so that semantically equal documents
//! hash and sign identically across languages, platforms, and library
//! versions. The caller feeds the output to a digest or signature; this
//! crate produces the bytes and nothing else.
//!
//! ## Pipeline
//!
//! ```text
//! source text --parse--> Value --canonicalize--> CanonicalBytes
//!                          ^
//!      any T: Serialize ---+   (to_canonical_bytes)
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalBytes` newtype.** The output type has a private inner
//!    buffer and the only constructors are the canonicalize entry points, so
//!    a value of this type is always a complete, valid canonical encoding.
//!
//! 2. **ECMAScript number serialization.** Floats print exactly as
//!    `Number.prototype.toString()` would: Ryū shortest round-trip digits,
//!    the ECMA-262 notation-selection rule, lowercase `e` with an explicit
//!    `+`. No fixed-precision formatting anywhere.
//!
//! 3. **UTF-16 member ordering.** Object members sort by UTF-16 code-unit
//!    order, not UTF-8 byte order and not scalar-value order; the orders
//!    disagree on supplementary-plane keys.
//!
//! 4. **Integer tag.** Number tokens without fraction or exponent in signed
//!    64-bit range keep an integer tag and never round-trip through the
//!    float formatter.
//!
//! 5. **Explicit duplicate-key policy.** Rejected by default; last-wins by
//!    opt-in. Never silent.
//!
//! ## Crate Policy
//!
//! - No internal dependencies; no `unsafe`; no `panic!()` or `unwrap()`
//!   outside tests.
//! - Pure and synchronous: no I/O, no global state, one output buffer per
//!   call, safe to use from many threads at once.
//!
//! ## Example
//!
//! ```
//! use jcs_core::canonicalize_text;
//!
//! let bytes = canonicalize_text(br#"{ "b": 2, "a": 1 }"#)?;
//! assert_eq!(bytes.as_bytes(), br#"{"a":1,"b":2}"#);
//! # Ok::<(), jcs_core::JcsError>(())
//! ```

pub mod canonical;
pub mod error;
pub mod escape;
pub mod number;
pub mod order;
pub mod parse;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use canonical::{
    canonicalize, canonicalize_text, canonicalize_text_with, is_canonical, to_canonical_bytes,
    CanonicalBytes,
};
pub use error::JcsError;
pub use parse::{DuplicateKeys, ParseOptions};
pub use value::Value;
