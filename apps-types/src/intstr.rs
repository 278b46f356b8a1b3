// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! A value that is either an integer or a string, e.g. `maxSurge: 3` or `maxSurge: "25%"`.

use serde::{Deserialize, Serialize};

/// Either an absolute count or a string (usually a percentage).
///
/// The zero value is `Int(0)`, which is how an unset field of this type reads back.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(untagged)]
pub enum IntOrString {
    Int(i32),
    String(String),
}

impl IntOrString {
    #[must_use]
    pub fn from_int(value: i32) -> Self {
        IntOrString::Int(value)
    }

    #[must_use]
    pub fn from_string(value: impl Into<String>) -> Self {
        IntOrString::String(value.into())
    }

    /// True if this is the zero value
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, IntOrString::Int(0))
    }

    /// The percentage carried by a `"<digits>%"` string, if that is what this is
    #[must_use]
    pub fn as_percent(&self) -> Option<u32> {
        match self {
            IntOrString::String(s) => {
                let digits = s.strip_suffix('%')?;
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                digits.parse().ok()
            }
            IntOrString::Int(_) => None,
        }
    }
}

impl Default for IntOrString {
    fn default() -> Self {
        IntOrString::Int(0)
    }
}

impl From<i32> for IntOrString {
    fn from(value: i32) -> Self {
        IntOrString::from_int(value)
    }
}

impl From<&str> for IntOrString {
    fn from(value: &str) -> Self {
        IntOrString::from_string(value)
    }
}
