//! Error types for share decoding and secret reconstruction.

use num_bigint::BigInt;
use thiserror::Error;

/// The Result type for reconstruction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The errors that can occur while decoding shares or reconstructing a
/// secret.
#[derive(Debug, Error)]
pub enum Error {
    /// The radix of an encoded value is outside the supported range.
    #[error("unsupported base {0}, must be between 2 and 36")]
    UnsupportedBase(u32),

    /// An encoded value contains a character that is not a digit or a letter.
    #[error("invalid character {character:?} in encoded value")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },

    /// A digit of an encoded value does not fit its stated base.
    #[error("digit {digit:?} is out of range for base {base}")]
    DigitOutOfRange {
        /// The offending digit.
        digit: char,
        /// The base the value was declared in.
        base: u32,
    },

    /// Fewer decodable shares were available than the threshold requires.
    #[error("not enough decodable shares: needed {needed}, got {available}")]
    InsufficientShares {
        /// Required number of shares (k).
        needed: usize,
        /// Number of shares that actually decoded.
        available: usize,
    },

    /// Two interpolation points share the same x-coordinate.
    #[error("duplicate x-coordinate {0} among interpolation points")]
    DuplicateAbscissa(BigInt),

    /// An empty point set was passed to the reconstructor.
    #[error("cannot interpolate an empty set of points")]
    DegenerateInput,

    /// The exact interpolation sum is not an integer, so the points were not
    /// sampled from an integer-valued secret polynomial.
    #[error("reconstructed value {numerator}/{denominator} is not an integer")]
    NonIntegralSecret {
        /// Reduced numerator of the exact sum.
        numerator: BigInt,
        /// Reduced denominator of the exact sum, greater than one.
        denominator: BigInt,
    },

    /// The input document does not have the expected shape.
    #[error("malformed task document: {0}")]
    Document(String),

    /// The input document is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
