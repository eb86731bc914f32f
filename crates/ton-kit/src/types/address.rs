//! Raw TON account addresses.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseAddressError;
use crate::types::block_id::MASTERCHAIN;

/// A raw account address: workchain plus a 256-bit account id in hex.
///
/// The canonical string form is `"{workchain}:{hex}"`, e.g.
/// `"0:3333333333333333333333333333333333333333333333333333333333333333"`.
/// The hex part is kept exactly as received — no case normalization —
/// so formatting is the exact inverse of parsing.
///
/// # Example
///
/// ```
/// use ton_kit::Address;
///
/// let addr: Address = "-1:3333333333333333333333333333333333333333333333333333333333333333"
///     .parse()
///     .unwrap();
/// assert_eq!(addr.workchain(), -1);
/// assert!(addr.is_masterchain());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    workchain: i32,
    hex: String,
}

impl Address {
    /// Create an address from its parts.
    ///
    /// The account part must be exactly 64 ASCII hex characters.
    pub fn new(workchain: i32, hex: impl Into<String>) -> Result<Self, ParseAddressError> {
        let hex = hex.into();
        if !is_hex64(&hex) {
            return Err(ParseAddressError::InvalidFormat(format!(
                "{workchain}:{hex}"
            )));
        }
        Ok(Self { workchain, hex })
    }

    /// The workchain this account lives in.
    pub fn workchain(&self) -> i32 {
        self.workchain
    }

    /// The 64-hex-character account id, case preserved as received.
    pub fn hex_part(&self) -> &str {
        &self.hex
    }

    /// True for masterchain (workchain `-1`) addresses.
    pub fn is_masterchain(&self) -> bool {
        self.workchain == MASTERCHAIN
    }
}

fn is_hex64(s: &str) -> bool {
    s.len() == 64 && hex::decode(s).is_ok()
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exactly one colon separates workchain from account id.
        let mut parts = s.splitn(3, ':');
        let (workchain, hex) = match (parts.next(), parts.next(), parts.next()) {
            (Some(wc), Some(hex), None) => (wc, hex),
            _ => return Err(ParseAddressError::InvalidFormat(s.to_string())),
        };

        let workchain: i32 = workchain
            .parse()
            .map_err(|_| ParseAddressError::InvalidWorkchain(s.to_string()))?;

        if !is_hex64(hex) {
            return Err(ParseAddressError::InvalidFormat(s.to_string()));
        }

        Ok(Self {
            workchain,
            hex: hex.to_string(),
        })
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.workchain, self.hex)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
