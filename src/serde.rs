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

//! serde implementation.

use crate::format::{Precision, Rounding};
use std::fmt;

const ROUNDING_NAMES: &[&str] = &["truncate", "round-half-up"];

impl serde::Serialize for Rounding {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let name = match self {
            Rounding::Truncate => "truncate",
            Rounding::HalfUp => "round-half-up",
        };
        serializer.serialize_str(name)
    }
}

impl<'de> serde::Deserialize<'de> for Rounding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct RoundingVisitor;

        impl<'de> serde::de::Visitor<'de> for RoundingVisitor {
            type Value = Rounding;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "\"truncate\" or \"round-half-up\"")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Rounding, E>
            where
                E: serde::de::Error,
            {
                match v {
                    "truncate" => Ok(Rounding::Truncate),
                    "round-half-up" => Ok(Rounding::HalfUp),
                    _ => Err(E::unknown_variant(v, ROUNDING_NAMES)),
                }
            }
        }

        deserializer.deserialize_str(RoundingVisitor)
    }
}

impl serde::Serialize for Precision {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            Precision::Places(places) => serializer.serialize_u32(*places),
            Precision::Exact => serializer.serialize_str("exact"),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Precision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct PrecisionVisitor;

        impl<'de> serde::de::Visitor<'de> for PrecisionVisitor {
            type Value = Precision;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a number of decimal places or \"exact\"")
            }

            #[inline]
            fn visit_u64<E>(self, v: u64) -> Result<Precision, E>
            where
                E: serde::de::Error,
            {
                use std::convert::TryFrom;

                let places =
                    u32::try_from(v).map_err(|_| E::custom("decimal places out of range"))?;
                Ok(Precision::Places(places))
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Precision, E>
            where
                E: serde::de::Error,
            {
                if v == "exact" {
                    Ok(Precision::Exact)
                } else {
                    Err(E::custom("expected \"exact\""))
                }
            }
        }

        deserializer.deserialize_any(PrecisionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_serde() {
        let json = serde_json::to_string(&Rounding::HalfUp).unwrap();
        assert_eq!(json, r#""round-half-up""#);
        let rounding: Rounding = serde_json::from_str(&json).unwrap();
        assert_eq!(rounding, Rounding::HalfUp);

        let json = serde_json::to_string(&Rounding::Truncate).unwrap();
        assert_eq!(json, r#""truncate""#);
        let rounding: Rounding = serde_json::from_str(&json).unwrap();
        assert_eq!(rounding, Rounding::Truncate);

        assert!(serde_json::from_str::<Rounding>(r#""ceil""#).is_err());
    }

    #[test]
    fn test_precision_serde() {
        let json = serde_json::to_string(&Precision::Places(3)).unwrap();
        assert_eq!(json, "3");
        let precision: Precision = serde_json::from_str(&json).unwrap();
        assert_eq!(precision, Precision::Places(3));

        let json = serde_json::to_string(&Precision::Exact).unwrap();
        assert_eq!(json, r#""exact""#);
        let precision: Precision = serde_json::from_str(&json).unwrap();
        assert_eq!(precision, Precision::Exact);

        assert!(serde_json::from_str::<Precision>(r#""approximate""#).is_err());
    }
}
