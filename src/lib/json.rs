// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ErrorKind, RuuidError, Uuid};

// Two quotes plus at least one character
const UNMARSHAL_MIN_LEN: usize = 3;

// Interchange format always uses the compact string without dashes, and
// deserialization only accepts that form. Use `Uuid::parse_str()` on a plain
// string if dashed input needs to be tolerated.
impl Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_compact_string())
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let uuid_str = <String>::deserialize(deserializer)?;
        Uuid::from_compact_str(&uuid_str).map_err(serde::de::Error::custom)
    }
}

impl Uuid {
    /// Encode as JSON string holding the compact form, for example
    /// `"b7c016dc2ba4a68db368a97da9f43cee"`.
    pub fn marshal(&self) -> Result<Vec<u8>, RuuidError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, RuuidError> {
        if data.len() < UNMARSHAL_MIN_LEN {
            return Err(RuuidError::new(
                ErrorKind::InvalidUuid,
                format!(
                    "JSON value is too short for UUID: {}",
                    String::from_utf8_lossy(data)
                ),
            ));
        }
        serde_json::from_slice(data).map_err(|e| {
            RuuidError::new(
                ErrorKind::InvalidUuid,
                format!("Invalid UUID JSON value: {e}"),
            )
        })
    }
}
