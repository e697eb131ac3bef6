// SPDX-License-Identifier: Apache-2.0

use crate::{ErrorKind, Uuid, UuidGenerator};

const CANONICAL: &str = "b7c016dc-2ba4-a68d-b368-a97da9f43cee";
const COMPACT: &str = "b7c016dc2ba4a68db368a97da9f43cee";
const BYTES: [u8; 16] = [
    0xb7, 0xc0, 0x16, 0xdc, 0x2b, 0xa4, 0xa6, 0x8d, 0xb3, 0x68, 0xa9, 0x7d,
    0xa9, 0xf4, 0x3c, 0xee,
];

#[test]
fn test_uuid_string_forms() {
    let uuid = Uuid::from_bytes(BYTES);

    assert_eq!(uuid.to_canonical_string(), CANONICAL);
    assert_eq!(uuid.to_string(), CANONICAL);
    assert_eq!(uuid.to_compact_string(), COMPACT);
}

#[test]
fn test_parse_dash_insensitive() {
    let expected = Uuid::from_bytes(BYTES);

    assert_eq!(Uuid::parse_str(COMPACT).unwrap(), expected);
    assert_eq!(Uuid::parse_str(CANONICAL).unwrap(), expected);
    assert_eq!(
        Uuid::parse_str("b7-c0-16dc2ba4a68db368a97da9f43cee").unwrap(),
        expected
    );
    assert_eq!(
        Uuid::parse_str("--b7c016dc2ba4a68db368a97da9f43cee--").unwrap(),
        expected
    );
    assert_eq!(CANONICAL.parse::<Uuid>().unwrap(), expected);
}

#[test]
fn test_parse_upper_case() {
    assert_eq!(
        Uuid::parse_str(&CANONICAL.to_uppercase()).unwrap(),
        Uuid::from_bytes(BYTES)
    );
}

#[test]
fn test_compact_reject_dashes() {
    let result = Uuid::from_compact_str(CANONICAL);

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidUuid);
    }
}

#[test]
fn test_compact_reject_wrong_length() {
    for s in ["", "abcd", "b7c016dc2ba4a68db368a97da9f43cee0", "b7c016dc2ba4"]
    {
        let result = Uuid::from_compact_str(s);
        assert!(result.is_err(), "{s} should be rejected");
        if let Err(e) = result {
            assert_eq!(e.kind(), ErrorKind::InvalidUuid);
            assert!(e.msg().contains("wrong string length for decode"));
        }
    }
}

#[test]
fn test_compact_reject_invalid_hex() {
    let result = Uuid::from_compact_str("g7c016dc2ba4a68db368a97da9f43cee");

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidUuid);
    }
}

#[test]
fn test_flexible_reject_wrong_digit_count() {
    assert!(Uuid::parse_str("b7c016dc-2ba4-a68d-b368-a97da9f43ce").is_err());
    assert!(Uuid::parse_str("b7c016dc-2ba4-a68d-b368-a97da9f43cee0").is_err());
    assert!(Uuid::parse_str("------------------------------------").is_err());
}

#[test]
fn test_round_trip() {
    let mut generator: UuidGenerator = UuidGenerator::default();
    for uuid in generator.generate_many(100) {
        assert_eq!(Uuid::parse_str(&uuid.to_canonical_string()).unwrap(), uuid);
        assert_eq!(
            Uuid::from_compact_str(&uuid.to_compact_string()).unwrap(),
            uuid
        );
    }
}

#[test]
fn test_equal() {
    let uuid = Uuid::new();
    assert!(uuid.equal(&uuid));

    for i in 0..16 {
        let mut bytes = uuid.into_bytes();
        bytes[i] ^= 0x01;
        let other = Uuid::from(bytes);
        assert!(!uuid.equal(&other));
        assert_ne!(uuid, other);
    }
}

#[test]
fn test_bytes_access() {
    let uuid = Uuid::from_bytes(BYTES);

    assert_eq!(uuid.as_bytes(), &BYTES);
    let slice: &[u8] = uuid.as_ref();
    assert_eq!(slice, &BYTES[..]);
    assert_eq!(<[u8; 16]>::from(uuid), BYTES);
}

#[test]
fn test_nil() {
    assert!(Uuid::NIL.is_nil());
    assert_eq!(Uuid::default(), Uuid::NIL);
    assert_eq!(
        Uuid::NIL.to_string(),
        "00000000-0000-0000-0000-000000000000"
    );
    assert_eq!(Uuid::NIL.version(), 0);
    assert!(!Uuid::NIL.is_rfc4122_variant());
}

#[test]
fn test_convert_to_and_from_uuid_crate() {
    let uuid = Uuid::from_bytes(BYTES);
    let other: uuid::Uuid = uuid.into();

    assert_eq!(other.hyphenated().to_string(), CANONICAL);
    assert_eq!(Uuid::from(other), uuid);
    assert_eq!(other.get_version_num(), 0x0a);
}
