//! Textual encode/decode for sequence containers.
//!
//! The wire shape is `"(e0, e1, ..., en-1)"`: comma-space separators, no
//! trailing separator, `"()"` for an empty sequence. Element rendering
//! and parsing delegate to the element type's `Display` and `FromStr`
//! impls. Decoding is tolerant: tokens are split on ASCII whitespace and
//! on the container punctuation `(` `)` `,`, so a rendering produced by
//! [`write_seq`] reads back as the same element tokens.

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

/// Bytes that separate element tokens in the textual form.
fn is_delimiter(byte: u8) -> bool {
    byte.is_ascii_whitespace() || matches!(byte, b'(' | b')' | b',')
}

// ── Encoding ────────────────────────────────────────────────────

/// Write `elems` to `w` as `"(e0, e1, ..., en-1)"`.
pub fn write_seq<'a, T, I>(w: &mut dyn Write, elems: I) -> std::io::Result<()>
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(w, "(")?;
    for (i, elem) in elems.into_iter().enumerate() {
        if i > 0 {
            write!(w, ", ")?;
        }
        write!(w, "{elem}")?;
    }
    write!(w, ")")
}

// ── Decoding ────────────────────────────────────────────────────

/// Pull the next delimited token from `r`.
///
/// Skips leading delimiter bytes, then accumulates until the next
/// delimiter or end of input. Returns `None` when the input is
/// exhausted before a token starts. Read errors and non-UTF-8 token
/// bytes also end the scan — decoding treats them like end of input
/// rather than surfacing a fault.
pub fn next_token(r: &mut dyn Read) -> Option<String> {
    let mut byte = [0u8; 1];
    let first = loop {
        match r.read(&mut byte) {
            Ok(0) | Err(_) => return None,
            Ok(_) if is_delimiter(byte[0]) => continue,
            Ok(_) => break byte[0],
        }
    };
    let mut token = vec![first];
    loop {
        match r.read(&mut byte) {
            Ok(0) | Err(_) => break,
            Ok(_) if is_delimiter(byte[0]) => break,
            Ok(_) => token.push(byte[0]),
        }
    }
    String::from_utf8(token).ok()
}

/// Parse the next token from `r` as a `T`.
///
/// Returns `None` at end of input or on the first token that fails to
/// parse, which is the decode loop's termination condition.
pub fn parse_next<T: FromStr>(r: &mut dyn Read) -> Option<T> {
    next_token(r)?.parse().ok()
}
