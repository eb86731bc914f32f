//! A clean, ergonomic Rust client for the TON Center indexing API.
//!
//! **ton-kit** gives typed access to both interfaces the indexer exposes
//! over one ledger: the legacy tonlib-style **v2** interface and the REST
//! **v3** interface.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ton_kit::Ton;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ton_kit::Error> {
//!     let ton = Ton::mainnet().build()?;
//!
//!     let info = ton.v2().masterchain_info().await?;
//!     println!("masterchain seqno: {}", info.last.seqno);
//!
//!     let address = "0:3333333333333333333333333333333333333333333333333333333333333333"
//!         .parse()?;
//!     let balance = ton.v2().address_balance(&address).await?;
//!     println!("balance: {balance} nanoton");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Design Principles
//!
//! 1. **Single entry point**: everything hangs off the [`Ton`] client
//! 2. **Two namespaces, one pool**: [`Ton::v2`] and [`Ton::v3`] share one
//!    transport and base URL
//! 3. **Typed wire values**: amounts are arbitrary precision ([`Tokens`]),
//!    hashes and addresses are validated on decode, tagged unions decode
//!    into closed enums
//! 4. **One round trip per call**: no retries, caching or pagination loops
//!    inside the client — callers own those policies
//!
//! # Core Types
//!
//! - [`Address`] — Raw account address (`"workchain:hex64"`)
//! - [`CryptoHash`] — 64-hex-character block/transaction/message hash
//! - [`Tokens`] — Arbitrary-precision nanoton amount
//! - [`BlockId`], [`BlockIdExt`] — Block identifiers
//!
//! The per-interface schemas live under [`v2`] and [`v3`].

pub mod client;
pub mod error;
pub mod types;

mod codec;

// Re-export commonly used types at crate root
pub use error::{
    Error, ParseAddressError, ParseHashError, ParseTokensError, TransportError,
};
pub use types::{Address, BlockId, BlockIdExt, CryptoHash, MASTERCHAIN, MASTERCHAIN_SHARD, Tokens};
pub use types::{v2, v3};

// Re-export client types
pub use client::{
    HttpTransport, MAINNET_BASE_URL, Query, TESTNET_BASE_URL, Ton, TonBuilder, Transport,
    TransportConfig, V2Api, V3Api,
};
