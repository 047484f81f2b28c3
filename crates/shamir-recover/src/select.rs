//! Share bookkeeping: the task data model, document parsing, and the
//! deterministic selection of the `k` shares used for interpolation.
//!
//! Selection walks the available shares in ascending x-index order and keeps
//! the first `k` that decode. A share whose value fails to decode is logged
//! and skipped rather than failing the whole task; the task only fails when
//! fewer than `k` decodable shares remain.

use std::collections::BTreeMap;

use num_bigint::BigUint;
use serde::Deserialize;
use tracing::warn;

use crate::{radix, Error, Result};

/// One share of the secret: a point `(index, y)` on the hidden polynomial,
/// with the y-coordinate still in textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// The x-coordinate of the polynomial point (share index).
    pub index: u64,
    /// Radix the value is encoded in, between 2 and 36.
    pub base: u32,
    /// The y-coordinate as a digit string in `base`.
    pub encoded: String,
}

/// A share whose value has been decoded to an exact integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedShare {
    /// The x-coordinate of the polynomial point.
    pub index: u64,
    /// The decoded y-coordinate.
    pub value: BigUint,
}

/// Raw shape of one share entry in the task document.
#[derive(Debug, Deserialize)]
struct RawShare {
    /// String-encoded radix, e.g. `"16"`.
    base: String,
    /// The encoded y-coordinate.
    value: String,
}

/// Raw shape of the `keys` header in the task document.
#[derive(Debug, Deserialize)]
struct RawKeys {
    n: usize,
    k: usize,
}

/// Raw shape of the whole task document: a `keys` header and any number of
/// share entries keyed by their stringified x-index.
#[derive(Debug, Deserialize)]
struct RawDocument {
    keys: RawKeys,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

/// Everything needed to reconstruct one secret: the threshold and the
/// available shares, keyed by x-index so iteration is in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionTask {
    /// Total share count declared by the document. Advisory only; it is not
    /// checked against the number of shares actually present.
    pub n: usize,
    /// Number of shares required for reconstruction.
    pub k: usize,
    /// Available shares, keyed by x-coordinate.
    pub shares: BTreeMap<u64, Share>,
}

impl ReconstructionTask {
    /// Creates a task from already-parsed shares.
    ///
    /// Returns an error if the threshold `k` is zero; a zero threshold can
    /// never pin down a polynomial.
    pub fn new(n: usize, k: usize, shares: BTreeMap<u64, Share>) -> Result<Self> {
        if k == 0 {
            return Err(Error::Document(
                "threshold k must be at least 1".to_string(),
            ));
        }
        Ok(Self { n, k, shares })
    }

    /// Parses a JSON task document.
    ///
    /// The expected shape is a `keys` object holding the integers `n` and
    /// `k`, plus one entry per share keyed by its stringified positive
    /// x-index, each holding a string-encoded `base` and an encoded `value`:
    ///
    /// ```json
    /// { "keys": { "n": 3, "k": 2 },
    ///   "1": { "base": "16", "value": "4" },
    ///   "2": { "base": "16", "value": "7" },
    ///   "5": { "base": "16", "value": "c" } }
    /// ```
    pub fn from_json(document: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(document)?;

        let mut shares = BTreeMap::new();
        for (key, entry) in raw.shares {
            let index: u64 = key.parse().map_err(|_| {
                Error::Document(format!("share key {key:?} is not a positive integer"))
            })?;
            if index == 0 {
                return Err(Error::Document(
                    "share key \"0\" is not a positive integer".to_string(),
                ));
            }
            let base: u32 = entry.base.parse().map_err(|_| {
                Error::Document(format!(
                    "share {index} declares a non-numeric base {:?}",
                    entry.base
                ))
            })?;
            shares.insert(
                index,
                Share {
                    index,
                    base,
                    encoded: entry.value,
                },
            );
        }

        Self::new(raw.keys.n, raw.keys.k, shares)
    }

    /// Selects the `k` lowest-indexed decodable shares.
    ///
    /// Shares that fail to decode are skipped with a warning. Returns
    /// [`Error::InsufficientShares`] if fewer than `k` shares decode.
    pub fn select_shares(&self) -> Result<Vec<DecodedShare>> {
        let mut selected = Vec::with_capacity(self.k);
        for share in self.shares.values() {
            if selected.len() == self.k {
                break;
            }
            match radix::decode(&share.encoded, share.base) {
                Ok(value) => selected.push(DecodedShare {
                    index: share.index,
                    value,
                }),
                Err(error) => {
                    warn!(index = share.index, %error, "skipping undecodable share")
                }
            }
        }

        if selected.len() < self.k {
            return Err(Error::InsufficientShares {
                needed: self.k,
                available: selected.len(),
            });
        }
        Ok(selected)
    }
}
