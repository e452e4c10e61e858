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

//! Deterministic fixed-point arithmetic and display formatting for
//! token amounts.
//!
//! All values are signed 256-bit integers ([`I256`]) scaled by one of
//! two fixed powers of ten: [`WAD`] (`10^18`) or [`RAY`] (`10^27`).
//! Arithmetic is exact and integer-only; results render back to decimal
//! strings with explicit control over rounding, truncation, significant
//! figures, digit grouping and magnitude abbreviation.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, the formatting option
//! enums implement the `serde::Serialize` and `serde::Deserialize`
//! traits.
//!
//! ## Usage
//!
//! Arithmetic on wad-scaled values:
//!
//! ```
//! use wadmath::{str_to_wad, wad_to_string, wmul};
//!
//! let x = str_to_wad("1.5");
//! let y = str_to_wad("2");
//! assert_eq!(wmul(x, y), str_to_wad("3"));
//! assert_eq!(wad_to_string(wmul(x, y)), "3.0");
//! ```
//!
//! Display formatting accepts scaled values and decimal literals alike:
//!
//! ```
//! use wadmath::{commified_format, dp_format, Precision, Rounding};
//!
//! assert_eq!(dp_format("49.999", 2, Rounding::HalfUp), "50.00");
//! assert_eq!(
//!     commified_format("1120121.5687", Precision::Places(2)),
//!     "1,120,121.56"
//! );
//! ```
//!
//! Invalid literals never fail display paths; they degrade to zero:
//!
//! ```
//! use wadmath::{str_to_wad, I256};
//!
//! assert_eq!(str_to_wad("not a number"), I256::ZERO);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod amount;
mod commify;
mod error;
mod format;
mod math;
mod parse;

#[cfg(feature = "serde")]
mod serde;

pub use crate::amount::Amount;
pub use crate::commify::commify;
pub use crate::error::{MathError, ParseDecimalError};
pub use crate::format::{
    commified_format, dp_format, dynamic_format, fill_zeros, format_units, millified_format,
    ray_to_string, sf_format, wad_to_string, zeros_str, DpFormat, Precision, Rounding,
    BELOW_THRESHOLD_MARKER,
};
pub use crate::math::{
    below_point_zero_one, checked_rmul, checked_rpow, checked_wdiv, checked_wmul,
    convert_decimals, difference_compares, int_to_ray, int_to_wad, min_value, native_to_wad,
    percentage_of, pow10, ray_to_wad, rmul, rpow, safe_div, safe_wdiv, sqrt, str_to_wad, sum,
    wad_to_native, wad_to_ray, wdiv, wmul, wsqrt, RAY, RAY_DECIMALS, WAD, WAD_DECIMALS,
};
pub use crate::parse::{is_parsable_str, parse_units, sanitize_str};

pub use ethnum::I256;
