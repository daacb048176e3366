//! Implementation of `Address`, the 20-byte account identifier.

use crate::error::{PrimitiveError, PrimitiveResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of `Address` values in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// A 20-byte account identifier.
///
/// The ledger compares addresses only for equality; hex parsing and display
/// exist for configuration files and diagnostics. An address carries no
/// key material and implies nothing about how the account is controlled.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Address {
    bytes: [u8; ADDRESS_SIZE],
}

impl Address {
    /// Alias for the byte length of an address.
    pub const LENGTH: usize = ADDRESS_SIZE;

    /// Returns the all-zero address.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            bytes: [0u8; ADDRESS_SIZE],
        }
    }

    /// Checks whether every byte of this address is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Creates an `Address` from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidLength` if the input is not exactly
    /// 20 bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        if value.len() != ADDRESS_SIZE {
            return Err(PrimitiveError::invalid_length(ADDRESS_SIZE, value.len()));
        }

        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes.copy_from_slice(value);
        Ok(Self { bytes })
    }

    /// Returns the raw bytes of this address.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; ADDRESS_SIZE] {
        self.bytes
    }

    /// Borrows the raw bytes of this address.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.bytes
    }

    /// Parses an `Address` from a hexadecimal string, with or without a
    /// leading `0x`.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input is not a
    /// 40-character hexadecimal string.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != ADDRESS_SIZE * 2 {
            return Err(PrimitiveError::invalid_format(format!(
                "expected {} hex characters, got {}",
                ADDRESS_SIZE * 2,
                s.len()
            )));
        }

        let bytes = hex::decode(s)
            .map_err(|_| PrimitiveError::invalid_format("not a hexadecimal string"))?;
        Self::from_bytes(&bytes)
    }

    /// Converts the address to a `0x`-prefixed lowercase hex string.
    #[inline]
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }
}

impl FromStr for Address {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex_string())
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self { bytes }
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = PrimitiveError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl AsRef<[u8]> for Address {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// Addresses appear in config files and fixtures as hex strings, so the serde
// representation is textual rather than a 20-element byte array.
impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_address_zero() {
        let addr = Address::zero();
        assert!(addr.is_zero());
        assert_eq!(addr.to_array(), [0u8; ADDRESS_SIZE]);
    }

    #[test]
    fn test_address_from_bytes() {
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes[0] = 1;
        let addr = Address::from_bytes(&bytes).unwrap();
        assert!(!addr.is_zero());
        assert_eq!(addr.to_array()[0], 1);
    }

    #[test]
    fn test_address_from_bytes_wrong_length() {
        let err = Address::from_bytes(&[0u8; 19]).unwrap_err();
        assert!(matches!(
            err,
            PrimitiveError::InvalidLength {
                expected: 20,
                actual: 19
            }
        ));
    }

    #[test]
    fn test_address_parse() {
        let addr = Address::parse("0x0100000000000000000000000000000000000000").unwrap();
        assert_eq!(addr.to_array()[0], 1);
        assert_eq!(addr.to_array()[1], 0);

        // Prefix is optional.
        let bare = Address::parse("0100000000000000000000000000000000000000").unwrap();
        assert_eq!(addr, bare);
    }

    #[test]
    fn test_address_parse_rejects_garbage() {
        assert!(Address::parse("0x01").is_err());
        assert!(Address::parse("zz00000000000000000000000000000000000000").is_err());
    }

    #[test]
    fn test_address_display() {
        let addr = Address::from([0xabu8; ADDRESS_SIZE]);
        assert_eq!(
            addr.to_string(),
            "0xabababababababababababababababababababab"
        );
    }

    #[test]
    fn test_address_ordering() {
        let lo = Address::from([0u8; ADDRESS_SIZE]);
        let hi = Address::from([1u8; ADDRESS_SIZE]);
        assert!(lo < hi);
    }

    #[test]
    fn test_address_serde_as_hex_string() {
        let addr = Address::from([0x11u8; ADDRESS_SIZE]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x1111111111111111111111111111111111111111\"");

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    proptest! {
        #[test]
        fn test_roundtrip_from_bytes(bytes in any::<[u8; ADDRESS_SIZE]>()) {
            let addr = Address::from_bytes(&bytes).unwrap();
            prop_assert_eq!(addr.to_array(), bytes);
        }

        #[test]
        fn test_parse_display_roundtrip(bytes in any::<[u8; ADDRESS_SIZE]>()) {
            let addr = Address::from(bytes);
            let reparsed = Address::parse(&addr.to_hex_string()).unwrap();
            prop_assert_eq!(addr, reparsed);
        }

        #[test]
        fn test_parse_accepts_mixed_case(hex in "[0-9a-fA-F]{40}") {
            let addr = Address::parse(&hex).unwrap();
            let lower = Address::parse(&hex.to_lowercase()).unwrap();
            prop_assert_eq!(addr, lower);
        }

        #[test]
        fn test_is_zero_correct(bytes in any::<[u8; ADDRESS_SIZE]>()) {
            let addr = Address::from(bytes);
            prop_assert_eq!(addr.is_zero(), bytes.iter().all(|&b| b == 0));
        }

        #[test]
        fn test_ordering_matches_bytes(
            a in any::<[u8; ADDRESS_SIZE]>(),
            b in any::<[u8; ADDRESS_SIZE]>()
        ) {
            let addr_a = Address::from(a);
            let addr_b = Address::from(b);
            prop_assert_eq!(addr_a.cmp(&addr_b), a.cmp(&b));
        }
    }
}
