// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use rand::rngs::OsRng;

use crate::{ErrorKind, RuuidError, UuidGenerator};

pub const UUID_LEN: usize = 16;

const UUID_COMPACT_STR_LEN: usize = UUID_LEN * 2;

/// Random (version 4) UUID stored as 16 raw bytes.
///
/// Values built through [Uuid::from_bytes] or `From<[u8; 16]>` keep the
/// bytes untouched and may not carry the version 4 and RFC 4122 variant bits.
/// Only [Uuid::new], [UuidGenerator] and [Uuid::from_random_bytes] guarantee
/// them.
#[repr(transparent)]
#[derive(PartialEq, Eq, Default, Clone, Copy, Hash, Debug, PartialOrd, Ord)]
pub struct Uuid([u8; UUID_LEN]);

impl Uuid {
    pub const NIL: Self = Self([0u8; UUID_LEN]);

    /// Generate new random UUID using the operating system secure random
    /// source.
    ///
    /// Panics if the random source cannot supply entropy.
    pub fn new() -> Self {
        UuidGenerator::<OsRng>::default().generate()
    }

    /// Turn random bytes into version 4 UUID by overriding the version
    /// nibble of byte 6 and the variant bits of byte 8.
    pub fn from_random_bytes(mut bytes: [u8; UUID_LEN]) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// Wrap the bytes as they are, no version or variant bits are touched.
    pub const fn from_bytes(bytes: [u8; UUID_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse 32 hex digits without any separator.
    pub fn from_compact_str(s: &str) -> Result<Self, RuuidError> {
        if s.len() != UUID_COMPACT_STR_LEN {
            return Err(RuuidError::new(
                ErrorKind::InvalidUuid,
                format!(
                    "Invalid UUID string {s}: wrong string length for decode"
                ),
            ));
        }
        let mut bytes = [0u8; UUID_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| {
            RuuidError::new(
                ErrorKind::InvalidUuid,
                format!("Invalid UUID string {s}: {e}"),
            )
        })?;
        Ok(Self(bytes))
    }

    /// Parse hex string with or without dashes.
    ///
    /// All dashes are removed before decoding, their positions are not
    /// validated. For example `b7-c0-16dc2ba4a68db368a97da9f43cee` is
    /// accepted.
    pub fn parse_str(s: &str) -> Result<Self, RuuidError> {
        let compact = s.replace('-', "");
        let uuid = Self::from_compact_str(&compact)?;
        log::trace!("Parsed UUID {uuid} from {s}");
        Ok(uuid)
    }

    /// Example: `b7c016dc-2ba4-a68d-b368-a97da9f43cee`
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Example: `b7c016dc2ba4a68db368a97da9f43cee`
    pub fn to_compact_string(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; UUID_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; UUID_LEN] {
        self.0
    }

    pub fn equal(&self, other: &Self) -> bool {
        self == other
    }

    pub fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    pub fn is_rfc4122_variant(&self) -> bool {
        self.0[8] & 0xc0 == 0x80
    }

    pub fn is_nil(&self) -> bool {
        self == &Self::NIL
    }
}

impl std::fmt::Display for Uuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            hex::encode(&self.0[..4]),
            hex::encode(&self.0[4..6]),
            hex::encode(&self.0[6..8]),
            hex::encode(&self.0[8..10]),
            hex::encode(&self.0[10..]),
        )
    }
}

impl FromStr for Uuid {
    type Err = RuuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; UUID_LEN]> for Uuid {
    fn from(d: [u8; UUID_LEN]) -> Self {
        Self(d)
    }
}

impl From<Uuid> for [u8; UUID_LEN] {
    fn from(v: Uuid) -> Self {
        v.0
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(d: uuid::Uuid) -> Self {
        Self(d.into_bytes())
    }
}

impl From<Uuid> for uuid::Uuid {
    fn from(v: Uuid) -> Self {
        uuid::Uuid::from_bytes(v.0)
    }
}
