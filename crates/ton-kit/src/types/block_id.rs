//! Block identifiers.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use super::hash::CryptoHash;

/// The masterchain workchain id.
pub const MASTERCHAIN: i32 = -1;

/// The masterchain's single shard id.
///
/// Shard ids are bit-prefix values in a signed 64-bit space; the masterchain
/// shard is the minimum representable value (`0x8000000000000000` as bits).
pub const MASTERCHAIN_SHARD: i64 = i64::MIN;

/// A short block identifier: chain coordinates without hashes.
///
/// The `shard` field is a 64-bit signed value carried on the wire as a
/// decimal string, since JSON numbers can't hold it losslessly.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId {
    pub workchain: i32,
    #[serde_as(as = "DisplayFromStr")]
    pub shard: i64,
    pub seqno: u32,
}

impl BlockId {
    /// The masterchain block at the given seqno.
    pub fn masterchain(seqno: u32) -> Self {
        Self {
            workchain: MASTERCHAIN,
            shard: MASTERCHAIN_SHARD,
            seqno,
        }
    }
}

/// A full block identifier: coordinates plus root and file hashes.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockIdExt {
    pub workchain: i32,
    #[serde_as(as = "DisplayFromStr")]
    pub shard: i64,
    pub seqno: u32,
    pub root_hash: CryptoHash,
    pub file_hash: CryptoHash,
}

impl BlockIdExt {
    /// Drop the hashes, keeping only the chain coordinates.
    pub fn short(&self) -> BlockId {
        BlockId {
            workchain: self.workchain,
            shard: self.shard,
            seqno: self.seqno,
        }
    }
}
