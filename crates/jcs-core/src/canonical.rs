//! # Canonical Serialization — RFC 8785 Byte Production
//!
//! This module defines `CanonicalBytes`, the sole construction path for the
//! canonical encoding of a JSON value, and the entry points that produce it.
//!
//! ## Construction Invariant
//!
//! The `CanonicalBytes` newtype has a private inner buffer. The only way to
//! construct one is through the canonicalize entry points, which run the full
//! pipeline: member sorting by UTF-16 code units, the fixed string-escape
//! table, ECMAScript number serialization, and zero interstitial whitespace.
//! A value of this type is therefore always a complete canonical encoding —
//! the encoder never hands out partial output on an error path.
//!
//! ## Entry Points
//!
//! - [`canonicalize`] — encode an in-memory [`Value`].
//! - [`canonicalize_text`] / [`canonicalize_text_with`] — parse strict JSON
//!   source text, then encode.
//! - [`to_canonical_bytes`] — bridge for any `T: Serialize`, routed through
//!   the JSON data model.
//! - [`is_canonical`] — check a byte string against its own canonical form.

use serde::Serialize;

use crate::error::JcsError;
use crate::parse::{self, ParseOptions};
use crate::value::Value;
use crate::{escape, number, order};

/// Bytes produced exclusively by the canonicalization pipeline.
///
/// # Invariants
///
/// - The only constructors are the canonicalize entry points.
/// - The contents are UTF-8 canonical JSON: members in UTF-16 code-unit
///   order, no whitespace outside string literals, ECMAScript numbers.
/// - No terminator, newline, or byte-order mark is appended.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Access the canonical bytes, e.g. to feed a digest.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume self, returning the underlying buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Canonicalize an in-memory value.
///
/// # Errors
///
/// Returns `UnrepresentableNumber` if a `Float` holds NaN or an infinity,
/// and `DuplicateKey` if a hand-built object repeats a key.
pub fn canonicalize(value: &Value) -> Result<CanonicalBytes, JcsError> {
    let mut out = Vec::new();
    write_value(&mut out, value)?;
    Ok(CanonicalBytes(out))
}

/// Parse strict JSON source text and canonicalize it.
///
/// Duplicate object keys are rejected; use [`canonicalize_text_with`] to opt
/// into last-wins handling.
///
/// # Errors
///
/// Any [`JcsError`] from parsing or encoding.
pub fn canonicalize_text(json: &[u8]) -> Result<CanonicalBytes, JcsError> {
    canonicalize_text_with(json, &ParseOptions::default())
}

/// Parse strict JSON source text with explicit options, then canonicalize.
///
/// # Errors
///
/// Any [`JcsError`] from parsing or encoding.
pub fn canonicalize_text_with(
    json: &[u8],
    options: &ParseOptions,
) -> Result<CanonicalBytes, JcsError> {
    let value = parse::parse_with(json, options)?;
    canonicalize(&value)
}

/// Canonicalize any serializable value through the JSON data model.
///
/// The value is first turned into a JSON tree with `serde_json`, so its
/// `Serialize` impl decides how structs, enums, and maps appear.
///
/// # Errors
///
/// `SerializationFailed` if the tree conversion fails, plus any encoding
/// error.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Result<CanonicalBytes, JcsError> {
    let tree = serde_json::to_value(value)?;
    canonicalize(&Value::try_from(tree)?)
}

/// True iff `bytes` already are the canonical form of the value they encode.
///
/// Returns false for input that does not parse as strict JSON (including
/// input with duplicate keys).
pub fn is_canonical(bytes: &[u8]) -> bool {
    match canonicalize_text(bytes) {
        Ok(canonical) => canonical.as_bytes() == bytes,
        Err(_) => false,
    }
}

fn write_value(out: &mut Vec<u8>, value: &Value) -> Result<(), JcsError> {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Int(int) => {
            let mut buffer = itoa::Buffer::new();
            out.extend_from_slice(buffer.format(*int).as_bytes());
        }
        Value::Float(float) => number::write_f64(out, *float)?,
        Value::String(text) => escape::write_string(out, text),
        Value::Array(items) => {
            out.push(b'[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(b',');
                }
                write_value(out, item)?;
            }
            out.push(b']');
        }
        Value::Object(members) => write_object(out, members)?,
    }
    Ok(())
}

fn write_object(out: &mut Vec<u8>, members: &[(String, Value)]) -> Result<(), JcsError> {
    let mut ordered: Vec<&(String, Value)> = members.iter().collect();
    ordered.sort_by(|a, b| order::utf16_cmp(&a.0, &b.0));
    // Equal keys are adjacent after sorting; hand-built objects can carry
    // them even though the parser never produces any.
    for pair in ordered.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(JcsError::DuplicateKey {
                key: pair[0].0.clone(),
            });
        }
    }
    out.push(b'{');
    for (index, member) in ordered.iter().enumerate() {
        if index > 0 {
            out.push(b',');
        }
        escape::write_string(out, &member.0);
        out.push(b':');
        write_value(out, &member.1)?;
    }
    out.push(b'}');
    Ok(())
}
