//! Decimal numeric-string recognition
//!
//! Hosts hand over form values as text, so "is this numeric" is a question
//! about the string. The accepted grammar is plain decimal notation:
//!
//! ```text
//! ws* [+-]? (digits [. digits?]? | . digits) ([eE] [+-]? digits)? ws*
//! ```
//!
//! Hex, `inf`/`nan` and digit separators are rejected even where Rust's
//! `f64::from_str` would accept them.

/// ASCII whitespace that may surround a numeric string (includes vertical tab).
const fn is_padding(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

fn trim_padding(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii() && is_padding(c as u8))
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Returns true if `literal` (already trimmed) is a decimal numeric literal.
fn is_numeric_literal(literal: &str) -> bool {
    let bytes = literal.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_end = skip_digits(bytes, i);
    let int_digits = int_end - i;
    i = int_end;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        let frac_end = skip_digits(bytes, i + 1);
        frac_digits = frac_end - (i + 1);
        i = frac_end;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_end = skip_digits(bytes, i);
        if exp_end == i {
            return false;
        }
        i = exp_end;
    }

    i == bytes.len()
}

/// Returns true if `text` is a numeric string.
///
/// # Examples
///
/// ```
/// use commonval_validator::foundation::is_numeric;
///
/// assert!(is_numeric("-157.123523"));
/// assert!(is_numeric(" 1e3"));
/// assert!(!is_numeric("0asdfaf"));
/// assert!(!is_numeric("inf"));
/// ```
#[must_use]
pub fn is_numeric(text: &str) -> bool {
    is_numeric_literal(trim_padding(text))
}

/// Parses a numeric string into an `f64`, or `None` if it is not numeric.
#[must_use]
pub fn parse_numeric(text: &str) -> Option<f64> {
    let literal = trim_padding(text);
    if !is_numeric_literal(literal) {
        return None;
    }
    literal.parse::<f64>().ok()
}
