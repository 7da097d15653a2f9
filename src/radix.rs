use num_bigint::BigInt;

use crate::error::Error;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

// Case-insensitive: '0'-'9' map to 0-9, 'a'-'z' and 'A'-'Z' to 10-35.
fn digit_value(digit: char) -> Result<u32, Error> {
    match digit {
        '0'..='9' => Ok(digit as u32 - '0' as u32),
        'a'..='z' => Ok(digit as u32 - 'a' as u32 + 10),
        'A'..='Z' => Ok(digit as u32 - 'A' as u32 + 10),
        _ => Err(Error::InvalidDigit { digit }),
    }
}

/// Decode a numeral string in the given base into an exact integer.
///
/// Share values in this domain routinely exceed 64 bits, so the accumulator
/// is a big integer from the start and the numeral can be arbitrarily long.
pub fn decode(digits: &str, base: u32) -> Result<BigInt, Error> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::UnsupportedBase { base });
    }
    if digits.is_empty() {
        return Err(Error::EmptyDigits);
    }

    /*
        Horner accumulation, most significant digit first:
        "213" in base 4 -> ((2 * 4) + 1) * 4 + 3 = 39
        One big-integer multiplication per digit, no power table needed.
    */
    let mut value = BigInt::from(0u32);
    for digit in digits.chars() {
        let v = digit_value(digit)?;
        if v >= base {
            return Err(Error::DigitExceedsBase {
                digit,
                value: v,
                base,
            });
        }
        value = value * base + v;
    }

    Ok(value)
}
