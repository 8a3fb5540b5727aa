//! # Member Ordering — UTF-16 Code-Unit Order
//!
//! Canonical member ordering compares keys as their UTF-16 code-unit
//! sequences, each unit taken as an unsigned 16-bit integer, with a shorter
//! prefix sorting first. This differs from both UTF-8 byte order and scalar
//! value order for supplementary-plane characters: U+1F600 encodes as the
//! surrogate pair D83D DE00, so it sorts before U+FB33 even though its
//! scalar value is larger.

use std::cmp::Ordering;

/// Compare two strings by their UTF-16 code-unit sequences.
///
/// `encode_utf16` yields surrogate pairs for supplementary scalars, so no
/// transcoding buffer is needed.
pub fn utf16_cmp(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}
