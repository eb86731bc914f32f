//! Core types for the TON Center API.
//!
//! Primitive value types live at this level; the per-interface schemas are
//! namespaced under [`v2`] and [`v3`] since the two interfaces expose the
//! same chain concepts through different wire shapes.

mod address;
mod block_id;
mod hash;
mod tokens;

pub mod v2;
pub mod v3;

pub use address::Address;
pub use block_id::{BlockId, BlockIdExt, MASTERCHAIN, MASTERCHAIN_SHARD};
pub use hash::CryptoHash;
pub use tokens::Tokens;
