// Copyright 2024 Wadmath Developers.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decimal literal parsing and validation.

use crate::error::ParseDecimalError;
use crate::math::pow10;
use ethnum::I256;

/// Splits literal bytes into sign and the rest, without inspecting or
/// validating the rest.
#[inline]
fn extract_sign(s: &[u8]) -> (bool, &[u8]) {
    match s.first() {
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    }
}

/// Carves off decimal digits up to the first non-digit character.
#[inline]
fn eat_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let i = s.iter().take_while(|&i| i.is_ascii_digit()).count();
    (&s[..i], &s[i..])
}

/// Accumulates ASCII digits onto a 256-bit integer.
fn accumulate(int: I256, digits: &[u8]) -> Result<I256, ParseDecimalError> {
    let mut int = int;
    for &d in digits {
        int = int
            .checked_mul(I256::new(10))
            .and_then(|val| val.checked_add(I256::new((d - b'0') as i128)))
            .ok_or(ParseDecimalError::Overflow)?;
    }
    Ok(int)
}

/// Parses a decimal literal into `value * 10^decimals`.
///
/// The accepted grammar is `-?\d+(\.\d+)?`: no exponent, no leading
/// `+`, no whitespace, and the fractional part must not be longer than
/// `decimals` digits.
///
/// ```
/// use wadmath::{parse_units, I256};
///
/// let val = parse_units("9.123467", 6).unwrap();
/// assert_eq!(val, I256::new(9123467));
/// ```
pub fn parse_units(s: &str, decimals: u32) -> Result<I256, ParseDecimalError> {
    let s = s.as_bytes();
    if s.is_empty() {
        return Err(ParseDecimalError::Empty);
    }

    let (negative, s) = extract_sign(s);
    let (integral, s) = eat_digits(s);
    if integral.is_empty() {
        return Err(ParseDecimalError::Invalid);
    }

    let fractional = match s.first() {
        None => &b""[..],
        Some(&b'.') => {
            let (fractional, rest) = eat_digits(&s[1..]);
            if fractional.is_empty() || !rest.is_empty() {
                return Err(ParseDecimalError::Invalid);
            }
            fractional
        }
        Some(_) => return Err(ParseDecimalError::Invalid),
    };

    if fractional.len() > decimals as usize {
        return Err(ParseDecimalError::TooManyDecimals);
    }

    let int = accumulate(I256::ZERO, integral)?;
    let int = accumulate(int, fractional)?;
    let int = int
        .checked_mul(pow10(decimals - fractional.len() as u32))
        .ok_or(ParseDecimalError::Overflow)?;

    Ok(if negative { -int } else { int })
}

/// Checks that `s` parses under the strict literal grammar with at most
/// `decimals` fractional digits, and is non-negative when
/// `non_negative_only` is set.
///
/// Fails closed: empty input and any parse failure yield `false`, never
/// a panic.
#[inline]
pub fn is_parsable_str(s: &str, decimals: u32, non_negative_only: bool) -> bool {
    match parse_units(s, decimals) {
        Ok(val) => !(non_negative_only && val.is_negative()),
        Err(_) => false,
    }
}

/// Returns `s` unchanged if [`is_parsable_str`] accepts it, else the
/// literal `"0"`.
#[inline]
pub fn sanitize_str<'a>(s: &'a str, decimals: u32, non_negative_only: bool) -> &'a str {
    if is_parsable_str(s, decimals, non_negative_only) {
        s
    } else {
        "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_parse(s: &str, decimals: u32, expected: &str) {
        let val = parse_units(s, decimals).unwrap();
        assert_eq!(val.to_string(), expected);
    }

    fn assert_parse_err(s: &str, decimals: u32, expected: ParseDecimalError) {
        assert_eq!(parse_units(s, decimals).unwrap_err(), expected);
    }

    #[test]
    fn test_parse_valid() {
        assert_parse("0", 18, "0");
        assert_parse("-0", 18, "0");
        assert_parse("1", 18, "1000000000000000000");
        assert_parse("1.5", 18, "1500000000000000000");
        assert_parse("-1.5", 18, "-1500000000000000000");
        assert_parse("0.000000000000000001", 18, "1");
        assert_parse("9.123467", 6, "9123467");
        assert_parse("0012.3400", 18, "12340000000000000000");
        assert_parse("123", 0, "123");
        assert_parse("2", 27, "2000000000000000000000000000");
    }

    #[test]
    fn test_parse_error() {
        assert_parse_err("", 18, ParseDecimalError::Empty);
        assert_parse_err("-", 18, ParseDecimalError::Invalid);
        assert_parse_err(".", 18, ParseDecimalError::Invalid);
        assert_parse_err(".5", 18, ParseDecimalError::Invalid);
        assert_parse_err("12.", 18, ParseDecimalError::Invalid);
        assert_parse_err("+1", 18, ParseDecimalError::Invalid);
        assert_parse_err("1e5", 18, ParseDecimalError::Invalid);
        assert_parse_err(" 1", 18, ParseDecimalError::Invalid);
        assert_parse_err("1 ", 18, ParseDecimalError::Invalid);
        assert_parse_err("12.3.4", 18, ParseDecimalError::Invalid);
        assert_parse_err("abc", 18, ParseDecimalError::Invalid);
        assert_parse_err("1.234", 2, ParseDecimalError::TooManyDecimals);
        assert_parse_err("0.1234567891234567891", 18, ParseDecimalError::TooManyDecimals);

        let huge = format!("1{}", "0".repeat(80));
        assert_parse_err(&huge, 18, ParseDecimalError::Overflow);
    }

    #[test]
    fn test_is_parsable_str() {
        assert!(is_parsable_str("10", 18, false));
        assert!(is_parsable_str("10.123", 18, false));
        assert!(is_parsable_str("-10.123", 18, false));
        assert!(is_parsable_str("0.01", 2, true));

        assert!(!is_parsable_str("", 18, false));
        assert!(!is_parsable_str("abc", 18, false));
        assert!(!is_parsable_str("-10.123", 18, true));
        assert!(!is_parsable_str("0.123", 2, false));
        assert!(!is_parsable_str("12.", 18, false));
    }

    #[test]
    fn test_sanitize_str() {
        assert_eq!(sanitize_str("10.1", 18, false), "10.1");
        assert_eq!(sanitize_str("-10.1", 18, false), "-10.1");
        assert_eq!(sanitize_str("-10.1", 18, true), "0");
        assert_eq!(sanitize_str("abc", 18, false), "0");
        assert_eq!(sanitize_str("", 18, false), "0");
        assert_eq!(sanitize_str("1.234", 2, false), "0");
    }
}
