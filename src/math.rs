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

//! Fixed-point arithmetic at wad (10^18) and ray (10^27) scales.
//!
//! Multiplication and division round half up on the discarded
//! remainder: the half-scale term added before the integer division is
//! a fixed convention, not configurable.

use crate::amount::Amount;
use crate::error::MathError;
use crate::format::wad_to_string;
use crate::parse::parse_units;
use ethnum::I256;
use std::cmp::Ordering;

/// Number of decimal digits in a wad-scaled value.
pub const WAD_DECIMALS: u32 = 18;
/// Number of decimal digits in a ray-scaled value.
pub const RAY_DECIMALS: u32 = 27;

/// Scale factor for 18-decimal fixed-point values.
pub const WAD: I256 = I256::new(1_000_000_000_000_000_000);
/// Scale factor for 27-decimal fixed-point values.
pub const RAY: I256 = I256::new(1_000_000_000_000_000_000_000_000_000);

const HALF_WAD: I256 = I256::new(500_000_000_000_000_000);
const HALF_RAY: I256 = I256::new(500_000_000_000_000_000_000_000_000);

const TWO: I256 = I256::new(2);

/// `10^n` as a 256-bit integer.
///
/// Panics if the power overflows 256 bits (`n > 76`).
#[inline]
pub fn pow10(n: u32) -> I256 {
    I256::new(10).pow(n)
}

/// `x * mul / div` with the multiplication checked.
#[inline]
fn mul_div(x: I256, mul: I256, div: I256) -> I256 {
    match x.checked_mul(mul) {
        Some(product) => product / div,
        None => panic!("scale conversion overflowed"),
    }
}

/// Converts an unscaled integer to a wad.
#[inline]
pub fn int_to_wad(x: I256) -> I256 {
    match x.checked_mul(WAD) {
        Some(val) => val,
        None => panic!("wad conversion overflowed"),
    }
}

/// Converts an unscaled integer to a ray.
#[inline]
pub fn int_to_ray(x: I256) -> I256 {
    match x.checked_mul(RAY) {
        Some(val) => val,
        None => panic!("ray conversion overflowed"),
    }
}

/// Moves a value between two decimal scales, multiplying or dividing by
/// `10^|from_decimals - to_decimals|` depending on direction.
#[inline]
pub fn convert_decimals(x: I256, from_decimals: u32, to_decimals: u32) -> I256 {
    match from_decimals.cmp(&to_decimals) {
        Ordering::Greater => x / pow10(from_decimals - to_decimals),
        Ordering::Less => match x.checked_mul(pow10(to_decimals - from_decimals)) {
            Some(val) => val,
            None => panic!("scale conversion overflowed"),
        },
        Ordering::Equal => x,
    }
}

/// Converts a token-native amount with `decimals` fractional digits to
/// a wad.
#[inline]
pub fn native_to_wad(x: I256, decimals: u32) -> I256 {
    mul_div(x, WAD, pow10(decimals))
}

/// Converts a wad back to a token-native amount with `decimals`
/// fractional digits.
#[inline]
pub fn wad_to_native(x: I256, decimals: u32) -> I256 {
    mul_div(x, pow10(decimals), WAD)
}

/// Converts a wad to a ray.
#[inline]
pub fn wad_to_ray(x: I256) -> I256 {
    mul_div(x, RAY, WAD)
}

/// Converts a ray to a wad.
#[inline]
pub fn ray_to_wad(x: I256) -> I256 {
    mul_div(x, WAD, RAY)
}

/// Checked wad multiplication. Computes `x * y` at wad scale, returning
/// `None` on overflow.
#[inline]
pub fn checked_wmul(x: I256, y: I256) -> Option<I256> {
    let product = x.checked_mul(y)?.checked_add(HALF_WAD)?;
    Some(product / WAD)
}

/// The product of two wads, rounded half up on the discarded remainder.
#[inline]
pub fn wmul(x: I256, y: I256) -> I256 {
    match checked_wmul(x, y) {
        Some(product) => product,
        None => panic!("wad multiplication overflowed"),
    }
}

/// Checked wad division. Computes `x / y` at wad scale, returning
/// `None` if `y == 0` or on overflow.
#[inline]
pub fn checked_wdiv(x: I256, y: I256) -> Option<I256> {
    if y == I256::ZERO {
        return None;
    }
    let numerator = x.checked_mul(WAD)?.checked_add(y / TWO)?;
    Some(numerator / y)
}

/// The quotient of two wads, rounded half up on the discarded
/// remainder.
///
/// A zero divisor is a caller contract violation and panics; see
/// [`safe_wdiv`] for the degrading variant.
#[inline]
pub fn wdiv(x: I256, y: I256) -> I256 {
    match checked_wdiv(x, y) {
        Some(quotient) => quotient,
        None => panic!("wad division by zero or overflowed"),
    }
}

/// [`wdiv`] that returns zero on a zero divisor.
#[inline]
pub fn safe_wdiv(x: I256, y: I256) -> I256 {
    if y == I256::ZERO {
        return I256::ZERO;
    }
    wdiv(x, y)
}

/// Plain integer division that returns zero on a zero divisor.
#[inline]
pub fn safe_div(x: I256, y: I256) -> I256 {
    if y == I256::ZERO {
        return I256::ZERO;
    }
    x / y
}

/// Checked ray multiplication. Computes `x * y` at ray scale, returning
/// `None` on overflow.
#[inline]
pub fn checked_rmul(x: I256, y: I256) -> Option<I256> {
    let product = x.checked_mul(y)?.checked_add(HALF_RAY)?;
    Some(product / RAY)
}

/// The product of two rays, rounded half up on the discarded remainder.
#[inline]
pub fn rmul(x: I256, y: I256) -> I256 {
    match checked_rmul(x, y) {
        Some(product) => product,
        None => panic!("ray multiplication overflowed"),
    }
}

/// Checked [`rpow`], returning `None` on overflow.
pub fn checked_rpow(x: I256, n: u32) -> Option<I256> {
    let mut base = x;
    let mut n = n;
    let mut acc = if n % 2 != 0 { base } else { RAY };

    n /= 2;
    while n != 0 {
        base = checked_rmul(base, base)?;
        if n % 2 != 0 {
            acc = checked_rmul(acc, base)?;
        }
        n /= 2;
    }
    Some(acc)
}

/// Raises a ray to a non-negative integer power by squaring, in
/// `O(log n)` multiplications.
#[inline]
pub fn rpow(x: I256, n: u32) -> I256 {
    match checked_rpow(x, n) {
        Some(power) => power,
        None => panic!("ray exponentiation overflowed"),
    }
}

/// Integer square root of a non-negative unscaled integer, by the
/// Babylonian method.
///
/// Fails on negative input; this is the one operation that enforces its
/// argument contract by failing instead of degrading to zero.
pub fn sqrt(x: I256) -> Result<I256, MathError> {
    if x.is_negative() {
        return Err(MathError::NegativeSqrt);
    }
    if x < TWO {
        return Ok(x);
    }
    if x < I256::new(4) {
        return Ok(I256::ONE);
    }

    // The seed x/2 + 1 is at or above the true root for x >= 4, so the
    // iteration decreases monotonically until it converges.
    let mut root = x;
    let mut next = x / TWO + I256::ONE;
    while next < root {
        root = next;
        next = (x / next + next) / TWO;
    }
    Ok(root)
}

/// Square root of a wad, itself a wad.
pub fn wsqrt(x: I256) -> Result<I256, MathError> {
    match x.checked_mul(WAD) {
        Some(scaled) => sqrt(scaled),
        None => Err(MathError::Overflow),
    }
}

/// Parses a decimal literal to wad scale, degrading to zero on any
/// invalid input (including the empty string).
#[inline]
pub fn str_to_wad(s: &str) -> I256 {
    parse_units(s, WAD_DECIMALS).unwrap_or(I256::ZERO)
}

/// Adds two values at wad scale and renders the total as a decimal
/// string.
#[inline]
pub fn sum<'a, 'b>(x: impl Into<Amount<'a>>, y: impl Into<Amount<'b>>) -> String {
    let total = match x.into().to_wad().checked_add(y.into().to_wad()) {
        Some(total) => total,
        None => panic!("wad addition overflowed"),
    };
    wad_to_string(total)
}

/// Whether `x - y` compares to `value` as `ordering`.
#[inline]
pub fn difference_compares(x: I256, y: I256, value: I256, ordering: Ordering) -> bool {
    match x.checked_sub(y) {
        Some(difference) => difference.cmp(&value) == ordering,
        None => panic!("wad subtraction overflowed"),
    }
}

/// Whether `x` is below `0.01` at a scale of `decimals` digits.
#[inline]
pub fn below_point_zero_one(x: I256, decimals: u32) -> bool {
    x < pow10(decimals) / I256::new(100)
}

/// The percentage of `x` in `y`, as a decimal string, clamped to
/// `upper_bound` when provided and exceeded. Returns `"0.0"` when
/// either operand is zero.
pub fn percentage_of(x: I256, y: I256, upper_bound: Option<I256>) -> String {
    if x == I256::ZERO || y == I256::ZERO {
        return "0.0".to_string();
    }

    let mut result = match wdiv(x, y).checked_mul(I256::new(100)) {
        Some(percentage) => percentage,
        None => panic!("percentage overflowed"),
    };
    if let Some(bound) = upper_bound {
        if result > bound {
            result = bound;
        }
    }
    wad_to_string(result)
}

/// The smaller of two decimal literals, at wad scale.
#[inline]
pub fn min_value(x: &str, y: &str) -> I256 {
    str_to_wad(x).min(str_to_wad(y))
}
