//! Positional-notation decoding of encoded share values.
//!
//! Each share carries its y-coordinate as a digit string in an arbitrary
//! radix between 2 and 36. Decoding must stay exact for values well beyond
//! the 64-bit range, so everything accumulates into a [`BigUint`].

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{Error, Result};

/// Smallest radix a share value may be encoded in.
pub const MIN_BASE: u32 = 2;

/// Largest radix a share value may be encoded in.
pub const MAX_BASE: u32 = 36;

/// Decodes `encoded` as a non-negative integer written in `base`.
///
/// Digits `0`-`9` map to 0-9 and letters (case-insensitive) map to 10-35;
/// characters are folded in left to right with Horner's method. An empty
/// string has no digits and decodes to zero.
///
/// Returns an error if `base` is outside `[2, 36]`, if a character is not
/// alphanumeric, or if a digit's value is not below `base`.
pub fn decode(encoded: &str, base: u32) -> Result<BigUint> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::UnsupportedBase(base));
    }

    let mut result = BigUint::zero();
    for character in encoded.chars() {
        let digit = match character {
            '0'..='9' => character as u32 - '0' as u32,
            'a'..='z' => character as u32 - 'a' as u32 + 10,
            'A'..='Z' => character as u32 - 'A' as u32 + 10,
            _ => return Err(Error::InvalidCharacter { character }),
        };
        if digit >= base {
            return Err(Error::DigitOutOfRange {
                digit: character,
                base,
            });
        }
        result = result * base + digit;
    }
    Ok(result)
}
