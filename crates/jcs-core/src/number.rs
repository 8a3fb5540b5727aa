//! # Number Formatting — ECMAScript `ToString` for binary64
//!
//! Serializes a finite IEEE-754 double to the exact character sequence
//! ECMAScript's `Number.prototype.toString()` produces, with the scheme's
//! exponent spelling: lowercase `e` and an explicit `+` on non-negative
//! exponents.
//!
//! The shortest round-trip digit sequence comes from Ryū. Its output is split
//! into a digit string and a decimal exponent, and the ECMA-262 §6.1.6.1.13
//! notation rule then decides between plain decimal and scientific form.
//! Re-notating from the digits means the result never depends on Ryū's own
//! decimal/exponent cutoffs, only on its digit generation.

use crate::error::JcsError;

/// Append the canonical serialization of `value` to `out`.
///
/// # Errors
///
/// Returns [`JcsError::UnrepresentableNumber`] for NaN and the infinities.
pub fn write_f64(out: &mut Vec<u8>, value: f64) -> Result<(), JcsError> {
    if !value.is_finite() {
        return Err(JcsError::UnrepresentableNumber(value));
    }
    // Both zeros collapse to the same literal.
    if value == 0.0 {
        out.push(b'0');
        return Ok(());
    }
    if value.is_sign_negative() {
        out.push(b'-');
    }
    let mut buffer = ryu::Buffer::new();
    let shortest = buffer.format_finite(value.abs());
    let (digits, point) = split_decimal(shortest);
    write_positioned(out, &digits, point);
    Ok(())
}

/// Serialize a finite binary64 as a `String`.
///
/// # Errors
///
/// Returns [`JcsError::UnrepresentableNumber`] for NaN and the infinities.
pub fn format(value: f64) -> Result<String, JcsError> {
    let mut out = Vec::new();
    write_f64(&mut out, value)?;
    // The emitter writes ASCII only.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Split Ryū output for a positive finite double into its significant digits
/// and the decimal point position `k`: the value equals the digit string read
/// as an integer times `10^(k - n)`, where `n` is the digit count. `k` is the
/// position of the decimal point counted from the left of the digits.
fn split_decimal(shortest: &str) -> (String, i32) {
    let (mantissa, exponent) = match shortest.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (shortest, 0),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };
    let (digits, point) = if int_part == "0" {
        // Pure fraction: each leading zero shifts the point left.
        let significant = frac_part.trim_start_matches('0');
        let zeros = (frac_part.len() - significant.len()) as i32;
        (significant.trim_end_matches('0').to_string(), -zeros)
    } else {
        let mut all = String::with_capacity(int_part.len() + frac_part.len());
        all.push_str(int_part);
        all.push_str(frac_part);
        (
            all.trim_end_matches('0').to_string(),
            int_part.len() as i32,
        )
    };
    (digits, point + exponent)
}

/// ECMA-262 §6.1.6.1.13 steps 5–10: choose between plain decimal and
/// scientific notation from the digit count `n` and point position `k`.
fn write_positioned(out: &mut Vec<u8>, digits: &str, k: i32) {
    let s = digits.as_bytes();
    let n = s.len() as i32;
    if 0 < k && k <= 21 {
        if k >= n {
            // All digits sit left of the point: pad with zeros, no point.
            out.extend_from_slice(s);
            for _ in 0..(k - n) {
                out.push(b'0');
            }
        } else {
            // The point falls inside the digit string.
            out.extend_from_slice(&s[..k as usize]);
            out.push(b'.');
            out.extend_from_slice(&s[k as usize..]);
        }
    } else if -6 < k && k <= 0 {
        // Small magnitude: `0.`, then the zeros that position the digits.
        out.extend_from_slice(b"0.");
        for _ in 0..(-k) {
            out.push(b'0');
        }
        out.extend_from_slice(s);
    } else {
        // Scientific notation with an explicit exponent sign.
        out.push(s[0]);
        if n > 1 {
            out.push(b'.');
            out.extend_from_slice(&s[1..]);
        }
        out.push(b'e');
        let exponent = k - 1;
        out.push(if exponent >= 0 { b'+' } else { b'-' });
        let mut buffer = itoa::Buffer::new();
        out.extend_from_slice(buffer.format(exponent.abs()).as_bytes());
    }
}
