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

//! Error definitions.

use thiserror::Error;

/// An error which can be returned when parsing a decimal literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDecimalError {
    /// Empty string.
    #[error("cannot parse number from empty string")]
    Empty,
    /// Invalid literal.
    #[error("invalid number")]
    Invalid,
    /// The fractional part has more digits than the target scale allows.
    #[error("too many decimal places")]
    TooManyDecimals,
    /// The scaled value overflows the 256-bit representation.
    #[error("value overflows number format")]
    Overflow,
}

/// An error which can be returned by the arithmetic operations that
/// enforce their argument contract by failing instead of degrading to
/// zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Square root of a negative number.
    #[error("square root of negative number")]
    NegativeSqrt,
    /// The result overflows the 256-bit representation.
    #[error("numeric overflow")]
    Overflow,
}
