//! Token amounts with nanoton precision.

use std::fmt::{self, Display};
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseTokensError;

/// A token amount in nanotons.
///
/// Amounts are arbitrary precision and travel on the wire as decimal
/// strings, never as JSON numbers — fees, supplies and balances routinely
/// exceed what an `f64` (or even a fixed-width integer) can represent
/// exactly. The type is non-negative: the occasional negative wire value
/// clamps to zero, and subtraction saturates at zero.
///
/// # Example
///
/// ```
/// use ton_kit::Tokens;
///
/// let a = Tokens::from(5_000_000_000u64); // 5 TON
/// let b = Tokens::from(7_000_000_000u64);
///
/// assert_eq!(a.saturating_sub(&b), Tokens::zero());
/// assert_eq!(b.saturating_sub(&a), Tokens::from(2_000_000_000u64));
/// assert_eq!(a.to_string(), "5000000000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tokens(BigUint);

impl Tokens {
    /// Zero tokens.
    pub fn zero() -> Self {
        Self(BigUint::ZERO)
    }

    /// Create from a nanoton count.
    pub fn from_nano(nano: impl Into<BigUint>) -> Self {
        Self(nano.into())
    }

    /// The raw nanoton value.
    pub fn as_nano(&self) -> &BigUint {
        &self.0
    }

    /// Check if zero.
    pub fn is_zero(&self) -> bool {
        self.0 == BigUint::ZERO
    }

    /// Addition. Arbitrary precision, so this never wraps.
    pub fn saturating_add(&self, other: &Self) -> Self {
        Self(&self.0 + &other.0)
    }

    /// Subtraction with a floor of zero. Never fails, never goes negative.
    pub fn saturating_sub(&self, other: &Self) -> Self {
        if self.0 >= other.0 {
            Self(&self.0 - &other.0)
        } else {
            Self::zero()
        }
    }
}

impl From<u64> for Tokens {
    fn from(nano: u64) -> Self {
        Self(BigUint::from(nano))
    }
}

impl From<u128> for Tokens {
    fn from(nano: u128) -> Self {
        Self(BigUint::from(nano))
    }
}

impl FromStr for Tokens {
    type Err = ParseTokensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Optional leading sign, then one or more ASCII digits. Nothing else.
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseTokensError::InvalidFormat(s.to_string()));
        }

        if negative {
            // Non-negative-biased: negative wire values clamp to zero.
            return Ok(Self::zero());
        }

        let value = BigUint::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| ParseTokensError::InvalidFormat(s.to_string()))?;
        Ok(Self(value))
    }
}

impl Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Tokens {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tokens {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
