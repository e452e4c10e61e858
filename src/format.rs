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

//! Display formatting for wad-scaled values and decimal literals.
//!
//! Every entry point accepts either a scaled integer or a raw literal
//! (see [`Amount`]); invalid literals degrade to zero, so these
//! functions never fail. Scientific notation never appears in output.

use crate::amount::Amount;
use crate::commify::commify;
use crate::math::{below_point_zero_one, pow10, str_to_wad, RAY_DECIMALS, WAD, WAD_DECIMALS};
use ethnum::I256;
use stack_buf::StackVec;

/// Marker rendered in place of nonzero values whose magnitude is under
/// `0.01`, by the formatters whose below-threshold check is enabled.
pub const BELOW_THRESHOLD_MARKER: &str = "< 0.01";

/// Dispatch threshold for [`dynamic_format`]: `100000` at wad scale.
const ABBREVIATION_THRESHOLD: I256 = I256::new(100_000_000_000_000_000_000_000);

/// Magnitude suffixes for [`millified_format`], one per power of 1000.
const MAGNITUDE_SUFFIXES: [&str; 7] = ["", "K", "M", "B", "T", "P", "E"];

/// Rounding convention applied to the first discarded fractional digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Drop the extra digits.
    Truncate,
    /// Add one unit at the last kept position when the first discarded
    /// digit is 5 or more.
    HalfUp,
}

impl Default for Rounding {
    #[inline]
    fn default() -> Self {
        Rounding::Truncate
    }
}

/// Number of fractional digits kept by [`commified_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Keep exactly this many digits.
    Places(u32),
    /// Keep the exact rendering, digits untouched.
    Exact,
}

impl Default for Precision {
    #[inline]
    fn default() -> Self {
        Precision::Places(2)
    }
}

/// Options for fixed decimal-place formatting.
///
/// ```
/// use wadmath::{DpFormat, Rounding};
///
/// let format = DpFormat::new(2).rounding(Rounding::HalfUp);
/// assert_eq!(format.format("49.999"), "50.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DpFormat {
    /// Number of fractional digits to keep.
    pub places: u32,
    /// How to treat the first discarded digit.
    pub rounding: Rounding,
    /// Render [`BELOW_THRESHOLD_MARKER`] for nonzero values whose
    /// magnitude is under `0.01`.
    pub show_below_threshold: bool,
    /// Pad the fractional part with zeros up to `places`.
    pub pad_with_zeros: bool,
}

impl Default for DpFormat {
    #[inline]
    fn default() -> Self {
        DpFormat {
            places: 2,
            rounding: Rounding::Truncate,
            show_below_threshold: false,
            pad_with_zeros: true,
        }
    }
}

impl DpFormat {
    /// Creates options keeping `places` fractional digits: truncating,
    /// zero padded, below-threshold marker off.
    #[inline]
    pub fn new(places: u32) -> DpFormat {
        DpFormat {
            places,
            ..DpFormat::default()
        }
    }

    /// Sets the rounding convention.
    #[inline]
    pub fn rounding(mut self, rounding: Rounding) -> DpFormat {
        self.rounding = rounding;
        self
    }

    /// Enables the [`BELOW_THRESHOLD_MARKER`] check.
    #[inline]
    pub fn show_below_threshold(mut self) -> DpFormat {
        self.show_below_threshold = true;
        self
    }

    /// Disables zero padding of the fractional part.
    #[inline]
    pub fn no_padding(mut self) -> DpFormat {
        self.pad_with_zeros = false;
        self
    }

    /// Formats `value` under these options.
    pub fn format<'a>(&self, value: impl Into<Amount<'a>>) -> String {
        let amount = value.into();
        let text = amount.resolve_str();
        let wad = str_to_wad(&text);

        if wad == I256::ZERO {
            return if self.pad_with_zeros && self.places > 0 {
                format!("0.{}", zeros_str(self.places as usize))
            } else {
                "0".to_string()
            };
        }

        if self.show_below_threshold && below_point_zero_one(wad.abs(), WAD_DECIMALS) {
            return BELOW_THRESHOLD_MARKER.to_string();
        }

        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => {
                return if self.pad_with_zeros {
                    fill_zeros(&text, self.places)
                } else {
                    text.into_owned()
                };
            }
        };

        let places = self.places as usize;
        let round_up = self.rounding == Rounding::HalfUp
            && frac_part
                .as_bytes()
                .get(places)
                .map_or(false, |digit| digit - b'0' >= 5);

        if places == 0 {
            return if round_up {
                increment_integer(int_part)
            } else {
                int_part.to_string()
            };
        }

        let kept = &frac_part[..frac_part.len().min(places)];
        if round_up {
            let (sign, magnitude) = match int_part.strip_prefix('-') {
                Some(magnitude) => ("-", magnitude),
                None => ("", int_part),
            };
            let truncated = str_to_wad(&format!("{}.{}", magnitude, kept));
            // one unit at the last kept fractional position, at wad scale
            let unit = pow10(WAD_DECIMALS - self.places);
            let rounded = wad_to_string(truncated + unit);
            format!("{}{}", sign, fill_zeros(&rounded, self.places))
        } else {
            let joined = format!("{}.{}", int_part, kept);
            if self.pad_with_zeros {
                fill_zeros(&joined, self.places)
            } else {
                joined
            }
        }
    }
}

/// Formats `value` with `places` fractional digits under `rounding`,
/// zero padded, without the below-threshold marker.
#[inline]
pub fn dp_format<'a>(value: impl Into<Amount<'a>>, places: u32, rounding: Rounding) -> String {
    DpFormat::new(places).rounding(rounding).format(value)
}

/// A string of `n` zeros.
#[inline]
pub fn zeros_str(n: usize) -> String {
    "0".repeat(n)
}

/// Pads the fractional part of `text` with zeros up to `places` digits.
/// Text that already has more than `places` fractional digits is
/// returned unchanged.
pub fn fill_zeros(text: &str, places: u32) -> String {
    let places = places as usize;
    match text.split_once('.') {
        Some((_, frac_part)) => {
            if frac_part.len() > places {
                text.to_string()
            } else {
                format!("{}{}", text, zeros_str(places - frac_part.len()))
            }
        }
        None => {
            if places > 0 {
                format!("{}.{}", text, zeros_str(places))
            } else {
                text.to_string()
            }
        }
    }
}

/// Trims trailing zeros off the fractional part, and the decimal point
/// itself when the fraction trims away entirely.
fn trim_trailing_zeros(text: &str) -> String {
    match text.split_once('.') {
        Some((int_part, frac_part)) => {
            let frac_part = frac_part.trim_end_matches('0');
            if frac_part.is_empty() {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac_part)
            }
        }
        None => text.to_string(),
    }
}

/// Strips redundant leading zeros off the integer part, keeping at
/// least one digit.
fn strip_leading_zeros(text: &str) -> String {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text, None),
    };
    let trimmed = int_part.trim_start_matches('0');
    let int_part = if trimmed.is_empty() { "0" } else { trimmed };
    match frac_part {
        Some(frac_part) => format!("{}.{}", int_part, frac_part),
        None => int_part.to_string(),
    }
}

/// Adds one to a digit string in place, prepending on full carry.
fn increment_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Increments the magnitude of a (possibly signed) integer string by
/// one, preserving the sign.
fn increment_integer(int_part: &str) -> String {
    let (sign, magnitude) = match int_part.strip_prefix('-') {
        Some(magnitude) => ("-", magnitude),
        None => ("", int_part),
    };

    let mut digits: Vec<u8> = magnitude.bytes().collect();
    increment_digits(&mut digits);

    let mut out = String::with_capacity(sign.len() + digits.len());
    out.push_str(sign);
    out.extend(digits.iter().map(|&digit| digit as char));
    out
}

/// Renders `value * 10^-decimals` as a decimal string: sign, integer
/// digits, and the fractional digits with trailing zeros trimmed but
/// never fewer than one (zero renders as `"0.0"`).
pub fn format_units(value: I256, decimals: u32) -> String {
    use std::fmt::Write;

    if value == I256::ZERO {
        return "0.0".to_string();
    }

    let mut buf = StackVec::<u8, 80>::new();
    write!(&mut buf, "{}", value.abs()).expect("failed to format digits");
    let digits = buf.as_slice();

    let scale = decimals as usize;
    let mut out = String::with_capacity(digits.len() + scale + 3);
    if value.is_negative() {
        out.push('-');
    }

    if digits.len() <= scale {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take(scale - digits.len()));
        let zero_num = digits.iter().rev().take_while(|&&digit| digit == b'0').count();
        out.extend(digits[..digits.len() - zero_num].iter().map(|&digit| digit as char));
    } else {
        let (int_digits, frac_digits) = digits.split_at(digits.len() - scale);
        out.extend(int_digits.iter().map(|&digit| digit as char));
        out.push('.');
        let zero_num = frac_digits.iter().rev().take_while(|&&digit| digit == b'0').count();
        if zero_num == frac_digits.len() {
            out.push('0');
        } else {
            out.extend(
                frac_digits[..frac_digits.len() - zero_num]
                    .iter()
                    .map(|&digit| digit as char),
            );
        }
    }

    out
}

/// Renders a wad as a decimal string.
#[inline]
pub fn wad_to_string(value: I256) -> String {
    format_units(value, WAD_DECIMALS)
}

/// Renders a ray as a decimal string.
#[inline]
pub fn ray_to_string(value: I256) -> String {
    format_units(value, RAY_DECIMALS)
}

/// Formats `value` to `sig_figs` significant digits, trimming trailing
/// fractional zeros. Values that would round into scientific-notation
/// territory fall back to the trimmed exact rendering instead, so
/// scientific notation never appears in the output.
pub fn sf_format<'a>(value: impl Into<Amount<'a>>, sig_figs: u32) -> String {
    let text = value.into().resolve_str();
    match round_significant(&text, sig_figs) {
        Some(rounded) => rounded,
        None => trim_trailing_zeros(&text),
    }
}

/// Rounds a decimal string to `sig_figs` significant digits, returning
/// `None` when the result lands outside the plainly renderable range
/// (at or above `10^21`, or with the first significant digit at the
/// seventh fractional position or beyond).
fn round_significant(text: &str, sig_figs: u32) -> Option<String> {
    let sig_figs = sig_figs.max(1) as usize;

    let (sign, body) = match text.strip_prefix('-') {
        Some(body) => ("-", body),
        None => ("", text),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (body, ""),
    };

    let point = int_part.len();
    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();

    let first_significant = match digits.iter().position(|&digit| digit != b'0') {
        Some(i) => i,
        None => return Some("0".to_string()),
    };

    // exponent of the last kept digit relative to the decimal point
    let keep_end = first_significant + sig_figs;
    let exponent = if digits.len() > keep_end {
        let round_up = digits[keep_end] >= b'5';
        digits.truncate(keep_end);
        if round_up {
            increment_digits(&mut digits);
        }
        point as isize - keep_end as isize
    } else {
        point as isize - digits.len() as isize
    };

    let rendered = if exponent >= 0 {
        if digits.len() + exponent as usize >= 22 {
            return None;
        }
        let mut out: String = digits.iter().map(|&digit| digit as char).collect();
        out.extend(std::iter::repeat('0').take(exponent as usize));
        out
    } else {
        let frac_len = (-exponent) as usize;
        debug_assert!(frac_len < digits.len());
        let split = digits.len() - frac_len;
        let int_is_zero = digits[..split].iter().all(|&digit| digit == b'0');
        if int_is_zero {
            let sig_index = digits.iter().position(|&digit| digit != b'0').unwrap_or(split);
            if sig_index - split >= 6 {
                return None;
            }
        }
        let mut out: String = digits[..split].iter().map(|&digit| digit as char).collect();
        out.push('.');
        out.extend(digits[split..].iter().map(|&digit| digit as char));
        out
    };

    let cleaned = trim_trailing_zeros(&strip_leading_zeros(&rendered));
    Some(format!("{}{}", sign, cleaned))
}

/// Formats `value` with magnitude abbreviation: one decimal place and a
/// `K`/`M`/`B`-style suffix, e.g. `12.2M`, `1.4K`.
pub fn millified_format<'a>(value: impl Into<Amount<'a>>, show_below_threshold: bool) -> String {
    let wad = value.into().to_wad();
    if wad == I256::ZERO {
        return "0".to_string();
    }
    if show_below_threshold && below_point_zero_one(wad.abs(), WAD_DECIMALS) {
        return BELOW_THRESHOLD_MARKER.to_string();
    }

    // truncate to one decimal place before abbreviating
    let tenth_unit = WAD / I256::new(10);
    let truncated = wad - wad % tenth_unit;
    let magnitude = truncated.abs();

    let mut tier = 0;
    let mut unit = WAD;
    while tier + 1 < MAGNITUDE_SUFFIXES.len() && magnitude >= unit * I256::new(1000) {
        unit = unit * I256::new(1000);
        tier += 1;
    }

    // tenths of the scaled value, rounded half up
    let tenths = match magnitude.checked_mul(I256::new(10)) {
        Some(scaled) => (scaled + unit / I256::new(2)) / unit,
        None => panic!("abbreviation overflowed"),
    };
    let whole = tenths / I256::new(10);
    let tenth = tenths % I256::new(10);

    let mut out = String::new();
    if truncated.is_negative() {
        out.push('-');
    }
    out.push_str(&whole.to_string());
    if tenth != I256::ZERO {
        out.push('.');
        out.push_str(&tenth.to_string());
    }
    out.push_str(MAGNITUDE_SUFFIXES[tier]);
    out
}

/// Formats `value` with thousands separators, keeping `precision`
/// fractional digits. Nonzero values under `0.01` in magnitude render
/// as [`BELOW_THRESHOLD_MARKER`].
pub fn commified_format<'a>(value: impl Into<Amount<'a>>, precision: Precision) -> String {
    let amount = value.into();
    if let Amount::Raw("") = amount {
        return "0".to_string();
    }

    let wad = amount.to_wad();
    if wad == I256::ZERO {
        return match precision {
            Precision::Places(0) => "0".to_string(),
            Precision::Places(places) => format!("0.{}", zeros_str(places as usize)),
            Precision::Exact => "0.00".to_string(),
        };
    }
    if below_point_zero_one(wad.abs(), WAD_DECIMALS) {
        return BELOW_THRESHOLD_MARKER.to_string();
    }

    match precision {
        Precision::Exact => commify(&amount.resolve_str()),
        Precision::Places(places) => {
            let formatted = DpFormat::new(places).format(amount);
            fill_zeros(&commify(&formatted), places)
        }
    }
}

/// Formats `value` with magnitude abbreviation at or above `100000` in
/// magnitude, and with thousands separators below it.
pub fn dynamic_format<'a>(value: impl Into<Amount<'a>>, places: u32) -> String {
    let amount = value.into();
    if amount.to_wad().abs() >= ABBREVIATION_THRESHOLD {
        millified_format(amount, false)
    } else {
        commified_format(amount, Precision::Places(places))
    }
}
