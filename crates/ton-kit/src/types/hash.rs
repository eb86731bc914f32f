//! 256-bit hashes in their hex wire form.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseHashError;

/// A 256-bit block/transaction/message hash, carried as 64 hex characters.
///
/// The textual case is preserved exactly as received — the remote service
/// is the source of truth for these values and they travel back into query
/// parameters verbatim.
///
/// ```
/// use ton_kit::CryptoHash;
///
/// let hash: CryptoHash =
///     "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
///         .parse()
///         .unwrap();
/// assert!(!hash.is_zero());
/// assert!(CryptoHash::zero().is_zero());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CryptoHash(String);

impl CryptoHash {
    /// The all-zero hash, used by the chain as a "no previous hash" sentinel.
    pub fn zero() -> Self {
        Self("0".repeat(64))
    }

    /// True if this is the all-zero sentinel.
    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }

    /// The hex string, case preserved.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CryptoHash {
    type Err = ParseHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 || hex::decode(s).is_err() {
            return Err(ParseHashError::InvalidFormat(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl Display for CryptoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CryptoHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CryptoHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AA: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    #[test]
    fn parse_round_trip() {
        let hash: CryptoHash = AA.parse().unwrap();
        assert_eq!(hash.to_string(), AA);
        assert_eq!(hash.as_str(), AA);
    }

    #[test]
    fn case_preserved() {
        let mixed = format!("Aa{}", &AA[2..]);
        let hash: CryptoHash = mixed.parse().unwrap();
        assert_eq!(hash.as_str(), mixed);
    }

    #[test]
    fn zero_sentinel() {
        assert!(CryptoHash::zero().is_zero());
        assert_eq!(CryptoHash::zero().as_str().len(), 64);
        assert!(!AA.parse::<CryptoHash>().unwrap().is_zero());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(AA[..63].parse::<CryptoHash>().is_err());
        assert!(format!("{AA}aa").parse::<CryptoHash>().is_err());
        assert!("".parse::<CryptoHash>().is_err());
    }

    #[test]
    fn rejects_non_hex() {
        let bad = format!("zz{}", &AA[2..]);
        assert!(matches!(
            bad.parse::<CryptoHash>(),
            Err(ParseHashError::InvalidFormat(_))
        ));
    }

    #[test]
    fn decode_failure_in_json() {
        // A malformed hash inside a body is a decode failure.
        assert!(serde_json::from_str::<CryptoHash>("\"short\"").is_err());
        let ok: CryptoHash = serde_json::from_str(&format!("\"{AA}\"")).unwrap();
        assert_eq!(ok.as_str(), AA);
    }
}
