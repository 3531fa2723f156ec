//! Value readers over a [`Cursor`].
//!
//! Every reader skips leading blanks, then tries to extract one value. On
//! success the cursor moves past the consumed text; on failure it is left
//! exactly where it was and `None` is returned. Whether a `None` is fatal is
//! up to the caller.

use super::stream::{Cursor, is_blank};
use crate::core::models::options::{Keyword, Terms};
use std::path::PathBuf;

/// Tokens accepted by [`read_terms`], matched by prefix like keyword tables.
const TERM_TOKENS: &[(&str, Terms)] = &[
    ("elec", Terms::ELEC),
    ("pol", Terms::POL),
    ("disp", Terms::DISP),
    ("xr", Terms::XR),
];

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of the longest prefix of `text` that spells an integer.
fn scan_int(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    (digits > 0).then_some(sign + digits)
}

/// Length of the longest prefix of `text` that spells a floating-point value.
fn scan_float(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in ["infinity", "inf", "nan"] {
        if starts_with_ignore_case(&text[len..], word) {
            return Some(len + word.len());
        }
    }

    let whole = count_digits(&bytes[len..]);
    len += whole;

    let mut fraction = 0;
    if bytes.get(len) == Some(&b'.') {
        fraction = count_digits(&bytes[len + 1..]);
        if whole + fraction > 0 {
            len += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let mut exp = len + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let digits = count_digits(&bytes[exp..]);
        if digits > 0 {
            len = exp + digits;
        }
    }

    Some(len)
}

/// Reads a double-quoted span or a run of non-blank characters.
///
/// The quotes are not part of the value. An opening quote without a closing
/// one, or an empty remainder, is a failure.
pub fn read_string(cursor: &mut Cursor<'_>) -> Option<String> {
    let mut scratch = *cursor;
    scratch.skip_space();
    let rest = scratch.rest();

    let (value, consumed) = if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted.find('"')?;
        (&quoted[..end], end + 2)
    } else {
        let end = rest.find(is_blank).unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        (&rest[..end], end)
    };

    scratch.advance(consumed);
    *cursor = scratch;
    Some(value.to_string())
}

pub fn read_path(cursor: &mut Cursor<'_>) -> Option<PathBuf> {
    read_string(cursor).map(PathBuf::from)
}

/// Reads a signed decimal integer that fits in 32 bits.
pub fn read_int(cursor: &mut Cursor<'_>) -> Option<i32> {
    let mut scratch = *cursor;
    scratch.skip_space();
    let rest = scratch.rest();
    let len = scan_int(rest)?;
    let value = rest[..len].parse().ok()?;
    scratch.advance(len);
    *cursor = scratch;
    Some(value)
}

/// Reads a decimal floating-point value, with optional exponent.
pub fn read_double(cursor: &mut Cursor<'_>) -> Option<f64> {
    let mut scratch = *cursor;
    scratch.skip_space();
    let rest = scratch.rest();
    let len = scan_float(rest)?;
    let value = rest[..len].parse().ok()?;
    scratch.advance(len);
    *cursor = scratch;
    Some(value)
}

/// Matches the cursor against `T::TOKENS` in order and returns the first hit.
///
/// Matching is by case-insensitive prefix, not whole word: `optimize` matches
/// `opt` and leaves `imize` unread.
pub fn read_keyword<T: Keyword>(cursor: &mut Cursor<'_>) -> Option<T> {
    read_token(cursor, T::TOKENS)
}

/// Prefix match over an explicit `(name, value)` table; first match wins.
pub fn read_token<T: Copy>(cursor: &mut Cursor<'_>, table: &[(&str, T)]) -> Option<T> {
    let mut scratch = *cursor;
    scratch.skip_space();
    let rest = scratch.rest();
    let (name, value) = table
        .iter()
        .find(|(name, _)| starts_with_ignore_case(rest, name))?;
    scratch.advance(name.len());
    *cursor = scratch;
    Some(*value)
}

/// Reads a blank-separated list of interaction terms up to the end of line.
///
/// Any unrecognized text, or a list with no terms at all, fails the whole
/// read.
pub fn read_terms(cursor: &mut Cursor<'_>) -> Option<Terms> {
    let mut scratch = *cursor;
    let mut terms = Terms::empty();

    scratch.skip_space();
    while !scratch.is_empty() {
        terms |= read_token(&mut scratch, TERM_TOKENS)?;
        scratch.skip_space();
    }

    if terms.is_empty() {
        return None;
    }
    *cursor = scratch;
    Some(terms)
}
