#![warn(missing_docs)]

//! Exact reconstruction of Shamir-style secrets from base-encoded shares.
//!
//! A task document supplies `(x, y)` shares whose y-coordinates are digit
//! strings in arbitrary radices between 2 and 36. This crate decodes those
//! values to exact big integers, deterministically selects the `k`
//! lowest-indexed decodable shares, and recovers the secret as the constant
//! term of the unique degree-`(k-1)` polynomial through them, evaluated at
//! `x = 0` with exact rational arithmetic.
//!
//! ```rust
//! use num_bigint::BigInt;
//! use shamir_recover::{recover_secret, ReconstructionTask};
//!
//! let task = ReconstructionTask::from_json(
//!     r#"{
//!         "keys": { "n": 4, "k": 3 },
//!         "1": { "base": "10", "value": "1" },
//!         "2": { "base": "2", "value": "111" },
//!         "3": { "base": "10", "value": "12" },
//!         "6": { "base": "4", "value": "213" }
//!     }"#,
//! )?;
//! assert_eq!(recover_secret(&task)?, BigInt::from(-6));
//! # Ok::<(), shamir_recover::Error>(())
//! ```

mod errors;
/// Exact Lagrange interpolation at `x = 0`.
pub mod lagrange;
/// Positional-notation decoding of encoded share values.
pub mod radix;
/// Share data model, document parsing, and threshold selection.
pub mod select;

pub use errors::{Error, Result};
pub use select::{DecodedShare, ReconstructionTask, Share};

use num_bigint::BigInt;

/// Recovers the secret of one task: selects the `k` lowest-indexed decodable
/// shares and interpolates the polynomial through them at `x = 0`.
///
/// Pure and synchronous; independent tasks can be processed in parallel by
/// any outer driver without coordination.
pub fn recover_secret(task: &ReconstructionTask) -> Result<BigInt> {
    let selected = task.select_shares()?;
    let points: Vec<(BigInt, BigInt)> = selected
        .into_iter()
        .map(|share| (BigInt::from(share.index), BigInt::from(share.value)))
        .collect();
    lagrange::interpolate_at_zero(&points)
}
