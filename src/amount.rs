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

//! Tagged input values for the arithmetic and formatting entry points.

use crate::format::wad_to_string;
use crate::math::{str_to_wad, WAD_DECIMALS};
use crate::parse::sanitize_str;
use ethnum::I256;
use std::borrow::Cow;

/// A value accepted by the entry points that take either an
/// already-scaled integer or a raw decimal literal.
///
/// Raw literals go through the validator on resolution: anything the
/// strict grammar rejects degrades to zero instead of failing, which
/// keeps display paths non-crashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount<'a> {
    /// A raw decimal literal, parsed at wad scale on use.
    Raw(&'a str),
    /// A wad-scaled integer.
    Scaled(I256),
}

impl<'a> Amount<'a> {
    /// Resolves to a wad-scaled integer.
    #[inline]
    pub fn to_wad(&self) -> I256 {
        match self {
            Amount::Raw(s) => str_to_wad(s),
            Amount::Scaled(val) => *val,
        }
    }

    /// Resolves to a decimal-string rendering.
    pub(crate) fn resolve_str(&self) -> Cow<'a, str> {
        match self {
            Amount::Raw(s) => Cow::Borrowed(sanitize_str(s, WAD_DECIMALS, false)),
            Amount::Scaled(val) => Cow::Owned(wad_to_string(*val)),
        }
    }
}

impl<'a> From<&'a str> for Amount<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Amount::Raw(s)
    }
}

impl<'a> From<&'a String> for Amount<'a> {
    #[inline]
    fn from(s: &'a String) -> Self {
        Amount::Raw(s.as_str())
    }
}

impl From<I256> for Amount<'static> {
    #[inline]
    fn from(val: I256) -> Self {
        Amount::Scaled(val)
    }
}

impl From<&I256> for Amount<'static> {
    #[inline]
    fn from(val: &I256) -> Self {
        Amount::Scaled(*val)
    }
}
