use std::collections::BTreeMap;

use num_bigint::BigInt;
use serde::{Deserialize, Deserializer};

use crate::error::Error;
use crate::radix;
use crate::reconstruct::{self, Point};

/// One encoded point on the secret polynomial: an x identifier plus the
/// y-value as a numeral string in the stated base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    x: u64,
    base: u32,
    digits: String,
}

impl Share {
    /// Build a share, rejecting an out-of-range base or empty numeral up
    /// front. Digits are only checked against the base when decoding.
    pub fn new(x: u64, base: u32, digits: impl Into<String>) -> Result<Self, Error> {
        let digits = digits.into();
        if !(radix::MIN_BASE..=radix::MAX_BASE).contains(&base) {
            return Err(Error::UnsupportedBase { base });
        }
        if digits.is_empty() {
            return Err(Error::EmptyDigits);
        }
        Ok(Share { x, base, digits })
    }

    pub fn x(&self) -> u64 {
        self.x
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Decode the numeral string into the (x, y) point it encodes.
    pub fn decode(&self) -> Result<Point, Error> {
        let y = radix::decode(&self.digits, self.base)?;
        Ok(Point::new(self.x, y))
    }
}

/// The keyed wire shape share suppliers use:
///
/// ```json
/// {
///     "keys": { "n": 4, "k": 3 },
///     "1": { "base": "10", "value": "4" },
///     "2": { "base": "2", "value": "111" }
/// }
/// ```
///
/// Entries are keyed by their x value as a string; `base` arrives as a
/// string as well. The numeric keys present define which shares exist, so
/// gaps in the numbering are fine as long as at least k remain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawShareSet")]
pub struct ShareSet {
    shares: Vec<Share>,
    threshold: usize,
}

impl ShareSet {
    pub fn new(shares: Vec<Share>, threshold: usize) -> Self {
        ShareSet { shares, threshold }
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Decode every share and reconstruct the secret with the default
    /// first-k-by-ascending-x selection.
    pub fn recover(&self) -> Result<BigInt, Error> {
        let points = self
            .shares
            .iter()
            .map(Share::decode)
            .collect::<Result<Vec<Point>, Error>>()?;
        reconstruct::reconstruct(&points, self.threshold)
    }
}

// `keys` also declares `n`, the advertised share count; the entries present
// are authoritative, so only the threshold is read.
#[derive(Deserialize)]
struct RawKeys {
    k: usize,
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(deserialize_with = "base_from_string")]
    base: u32,
    value: String,
}

#[derive(Deserialize)]
struct RawShareSet {
    keys: RawKeys,
    #[serde(flatten)]
    entries: BTreeMap<String, RawEntry>,
}

fn base_from_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

impl TryFrom<RawShareSet> for ShareSet {
    type Error = Error;

    fn try_from(raw: RawShareSet) -> Result<Self, Error> {
        let mut shares = Vec::with_capacity(raw.entries.len());
        for (key, entry) in raw.entries {
            // non-numeric keys are metadata, not shares
            if let Ok(x) = key.parse::<u64>() {
                shares.push(Share::new(x, entry.base, entry.value)?);
            }
        }
        shares.sort_by_key(Share::x);
        Ok(ShareSet::new(shares, raw.keys.k))
    }
}
