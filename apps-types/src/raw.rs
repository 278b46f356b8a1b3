// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! An embedded object kept as raw bytes.

use serde::de::Deserializer;
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};

/// An embedded document of arbitrary schema.
///
/// The bytes are held as-is. On the wire they appear as the JSON document they contain,
/// so serializing bytes which are not JSON fails. An empty payload is written as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
pub struct RawExtension {
    pub raw: Vec<u8>,
}

impl RawExtension {
    #[must_use]
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self { raw: raw.into() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl Serialize for RawExtension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.raw.is_empty() {
            return serializer.serialize_none();
        }
        let document: serde_json::Value = serde_json::from_slice(&self.raw)
            .map_err(|e| S::Error::custom(format!("embedded object is not JSON: {e}")))?;
        document.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawExtension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = Option::<serde_json::Value>::deserialize(deserializer)?;
        let raw = match document {
            Some(document) => serde_json::to_vec(&document).map_err(serde::de::Error::custom)?,
            None => Vec::new(),
        };
        Ok(Self { raw })
    }
}
