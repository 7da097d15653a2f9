//! Shamir-style secret reconstruction: decode share values from arbitrary
//! numeral bases, then recover the polynomial's constant term by exact
//! Lagrange interpolation at x = 0.

pub mod error;
pub mod radix;
pub mod reconstruct;
pub mod share;

pub use error::Error;
pub use radix::decode;
pub use reconstruct::{first_by_ascending_x, reconstruct, reconstruct_with, Point};
pub use share::{Share, ShareSet};

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use crate::share::ShareSet;

    #[test]
    fn test_end_to_end_small() {
        // x^2 + 3 sampled at 1, 2, 3 and 6, y-values in mixed bases
        let set: ShareSet = serde_json::from_str(
            r#"{
                "keys": { "n": 4, "k": 3 },
                "1": { "base": "10", "value": "4" },
                "2": { "base": "2", "value": "111" },
                "3": { "base": "10", "value": "12" },
                "6": { "base": "4", "value": "213" }
            }"#,
        )
        .unwrap();

        assert_eq!(set.recover().unwrap(), BigInt::from(3));
    }

    #[test]
    fn test_end_to_end_large_shares() {
        // Ten shares in bases 3 through 16 with y-values past 64 bits; the
        // full set is deliberately mutually inconsistent, so the answer is
        // pinned by the first-7-by-ascending-x selection. The expected value
        // was computed independently with exact rational arithmetic.
        let set: ShareSet = serde_json::from_str(
            r#"{
                "keys": { "n": 10, "k": 7 },
                "1": { "base": "6", "value": "13444211440455345511" },
                "2": { "base": "15", "value": "aed7015a346d635" },
                "3": { "base": "15", "value": "6aeeb69631c227c" },
                "4": { "base": "16", "value": "e1b5e05623d881f" },
                "5": { "base": "8", "value": "316034514573652620673" },
                "6": { "base": "3", "value": "2122212201122002221120200210011020220200" },
                "7": { "base": "3", "value": "20120221122211000100210021102001201112121" },
                "8": { "base": "6", "value": "20220554335330240002224253" },
                "9": { "base": "12", "value": "45153788322a1255483" },
                "10": { "base": "7", "value": "1101613130313526312514143" }
            }"#,
        )
        .unwrap();

        let expected: BigInt = "-6290016743746469796".parse().unwrap();
        assert_eq!(set.recover().unwrap(), expected);
    }
}
