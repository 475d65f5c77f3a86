//! Ge'ez numeral codec.
//!
//! Encodes integers in `1..=1_000_000` as Ge'ez glyph strings (፩, ፲፭, ፳፻፳፭, ...)
//! and decodes canonical strings back. Values are grouped by ten-thousands (፼)
//! and hundreds (፻). A multiplier of one before either power glyph is never
//! written, so 100 is ፻ and 10000 is ፼. Multipliers two to nine take the tens
//! glyph (200 is ፳፻, 20000 is ፳፼) and larger ones are written out in full,
//! so 2000 is also ፳፻. Only values where that overlap cannot occur decode back
//! to themselves; see [`has_unique_form`].

use tracing::{debug, debug_span};

use crate::unicode::is_geez_numeral;

/// Largest value with a Ge'ez rendering (፻፼).
pub const MAX_VALUE: i64 = 1_000_000;

const ONES: [char; 9] = ['፩', '፪', '፫', '፬', '፭', '፮', '፯', '፰', '፱'];
const TENS: [char; 9] = ['፲', '፳', '፴', '፵', '፶', '፷', '፸', '፹', '፺'];

pub const HUNDRED: char = '፻';
pub const TEN_THOUSAND: char = '፼';

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumeralError {
    #[error("{0} is outside the Ge'ez numeral range 1..=1000000")]
    OutOfRange(i64),
    #[error("{0} is not an integer")]
    NonIntegral(f64),
}

/// Encode an integer as a canonical Ge'ez numeral string.
pub fn encode(value: i64) -> Result<String, NumeralError> {
    let _span = debug_span!("encode_geez", value).entered();
    if !(1..=MAX_VALUE).contains(&value) {
        return Err(NumeralError::OutOfRange(value));
    }
    let mut out = String::new();
    // Range-checked above, so the narrowing is lossless.
    push_value(&mut out, value as u32);
    Ok(out)
}

/// Encode a floating-point value, rejecting NaN, infinities and fractions.
pub fn encode_f64(value: f64) -> Result<String, NumeralError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(NumeralError::NonIntegral(value));
    }
    if value < 1.0 || value > MAX_VALUE as f64 {
        return Err(NumeralError::OutOfRange(value as i64));
    }
    encode(value as i64)
}

/// Encode, falling back to the decimal rendering when `value` has no Ge'ez form.
pub fn format(value: i64) -> String {
    encode(value).unwrap_or_else(|e| {
        debug!(value, "falling back to decimal: {e}");
        value.to_string()
    })
}

fn push_value(out: &mut String, value: u32) {
    let ten_thousands = value / 10_000;
    if ten_thousands > 0 {
        push_multiplier(out, ten_thousands);
        out.push(TEN_THOUSAND);
    }

    let rest = value % 10_000;
    let hundreds = rest / 100;
    if hundreds > 0 {
        push_multiplier(out, hundreds);
        out.push(HUNDRED);
    }

    push_below_hundred(out, rest % 100);
}

/// A multiplier of one is implied by the power glyph alone.
fn push_multiplier(out: &mut String, multiplier: u32) {
    match multiplier {
        0 | 1 => {}
        2..=9 => out.push(TENS[multiplier as usize - 1]),
        _ => push_value(out, multiplier),
    }
}

/// True when the encoding of `value` decodes back to `value`.
///
/// A ten-thousands or hundreds multiplier of two to nine shares its tens glyph
/// with the multiplier ten times larger, and the decoder reads the larger one.
pub fn has_unique_form(value: i64) -> bool {
    let single_digit = |m: i64| (2..=9).contains(&m);
    (1..=MAX_VALUE).contains(&value)
        && !single_digit(value / 10_000)
        && !single_digit(value % 10_000 / 100)
}

fn push_below_hundred(out: &mut String, value: u32) {
    let (tens, ones) = ((value / 10) as usize, (value % 10) as usize);
    if tens > 0 {
        out.push(TENS[tens - 1]);
    }
    if ones > 0 {
        out.push(ONES[ones - 1]);
    }
}

/// Decode a Ge'ez numeral string.
///
/// Best-effort inverse of [`encode`]: exact when [`has_unique_form`] holds, but glyph
/// order is not enforced and unknown characters are skipped, so malformed
/// input yields an unspecified value instead of an error. Check untrusted
/// input with [`is_valid_glyph_string`] first.
pub fn decode(glyphs: &str) -> u64 {
    let _span = debug_span!("decode_geez", glyphs).entered();
    match glyphs.split_once(TEN_THOUSAND) {
        Some((prefix, rest)) => {
            let multiplier = if prefix.is_empty() { 1 } else { decode(prefix) };
            multiplier * 10_000 + decode_hundreds(rest)
        }
        None => decode_hundreds(glyphs),
    }
}

fn decode_hundreds(glyphs: &str) -> u64 {
    match glyphs.split_once(HUNDRED) {
        Some((prefix, rest)) => {
            let multiplier = if prefix.is_empty() {
                1
            } else {
                scan_tens_and_ones(prefix)
            };
            multiplier * 100 + scan_tens_and_ones(rest)
        }
        None => scan_tens_and_ones(glyphs),
    }
}

/// Sum every tens and ones glyph regardless of position.
fn scan_tens_and_ones(glyphs: &str) -> u64 {
    glyphs
        .chars()
        .map(|c| {
            if let Some(i) = TENS.iter().position(|&t| t == c) {
                (i as u64 + 1) * 10
            } else if let Some(i) = ONES.iter().position(|&o| o == c) {
                i as u64 + 1
            } else {
                0
            }
        })
        .sum()
}

/// True when `candidate` is non-empty and made only of Ge'ez numeral glyphs.
pub fn is_valid_glyph_string(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.chars().all(is_geez_numeral)
}

/// Glyph for a single digit 1..=9.
pub fn ones_glyph(digit: u8) -> Option<char> {
    match digit {
        1..=9 => Some(ONES[digit as usize - 1]),
        _ => None,
    }
}

/// Glyph for `tens * 10`, with `tens` in 1..=9.
pub fn tens_glyph(tens: u8) -> Option<char> {
    match tens {
        1..=9 => Some(TENS[tens as usize - 1]),
        _ => None,
    }
}
