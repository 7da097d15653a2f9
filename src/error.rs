use num_bigint::BigInt;
use thiserror::Error;

/// Every way a reconstruction request can fail. All variants are fatal to
/// the single request; the computation is pure, so retrying is the caller's
/// call to make.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid digit '{digit}': not in the base-36 alphabet")]
    InvalidDigit { digit: char },

    #[error("digit '{digit}' has value {value}, which does not fit in base {base}")]
    DigitExceedsBase { digit: char, value: u32, base: u32 },

    #[error("base {base} is outside the supported range 2..=36")]
    UnsupportedBase { base: u32 },

    #[error("numeral string is empty")]
    EmptyDigits,

    #[error("only {available} shares available but the threshold is {required}")]
    InsufficientShares { available: usize, required: usize },

    #[error("two selected points share x = {x}, interpolation is undefined")]
    DuplicateAbscissa { x: BigInt },

    #[error("reconstruction gave the non-integer {numerator}/{denominator}: the input shares are inconsistent")]
    NonIntegerResult {
        numerator: BigInt,
        denominator: BigInt,
    },
}
