//! The legacy v2 (tonlib-style) endpoint facade.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::{self, Envelope, Query};
use crate::error::Error;
use crate::types::v2::{
    AddressInformation, BlockHeader, BlockTransactions, ExtMessageHash,
    ExtendedAddressInformation, GetBlockTransactionsRequest, GetTransactionsRequest,
    LookupBlockRequest, MasterchainInfo, RunGetMethodRequest, RunGetMethodResult, Shards,
    TokenData, Transaction, WalletInformation,
};
use crate::types::{Address, BlockId, BlockIdExt, CryptoHash, Tokens};

use super::transport::Transport;

/// One method per v2 remote operation.
///
/// Every call is a single HTTP round trip: build the query or body, invoke
/// the transport, unwrap the `{ok, result}` envelope, decode. No retries,
/// no pagination, no caching — the facade is stateless and request-scoped.
///
/// # Example
///
/// ```rust,no_run
/// use ton_kit::Ton;
///
/// # async fn example() -> Result<(), ton_kit::Error> {
/// let ton = Ton::mainnet().build()?;
/// let info = ton.v2().masterchain_info().await?;
/// println!("masterchain seqno: {}", info.last.seqno);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct V2Api {
    transport: Arc<dyn Transport>,
}

impl V2Api {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn call_get<T: DeserializeOwned>(
        &self,
        method: &str,
        query: Query,
        what: &'static str,
    ) -> Result<T, Error> {
        let path = format!("/api/v2/{method}");
        let body = self.transport.get(&path, &query).await?;
        codec::decode(&body, Envelope::V2, what)
    }

    async fn call_post<T: DeserializeOwned>(
        &self,
        method: &str,
        request: &impl Serialize,
        what: &'static str,
    ) -> Result<T, Error> {
        let path = format!("/api/v2/{method}");
        let body = serde_json::to_string(request).map_err(|source| Error::Decode {
            what: "request body",
            source,
        })?;
        let body = self
            .transport
            .post(&path, body, "application/json")
            .await?;
        codec::decode(&body, Envelope::V2, what)
    }

    // ========================================================================
    // Chain state
    // ========================================================================

    /// Get the latest and initial masterchain block ids.
    pub async fn masterchain_info(&self) -> Result<MasterchainInfo, Error> {
        self.call_get("getMasterchainInfo", Query::new(), "MasterchainInfo")
            .await
    }

    /// Find a block by seqno, logical time or unixtime.
    pub async fn lookup_block(&self, request: &LookupBlockRequest) -> Result<BlockIdExt, Error> {
        self.call_get("lookupBlock", request.to_query(), "BlockIdExt")
            .await
    }

    /// List the shard blocks referenced by a masterchain block.
    pub async fn shards(&self, seqno: u32) -> Result<Shards, Error> {
        let mut query = Query::new();
        codec::push(&mut query, "seqno", seqno);
        self.call_get("shards", query, "Shards").await
    }

    /// Get a block's full header metadata.
    pub async fn block_header(&self, id: &BlockId) -> Result<BlockHeader, Error> {
        let mut query = Query::new();
        codec::push(&mut query, "workchain", id.workchain);
        codec::push(&mut query, "shard", id.shard);
        codec::push(&mut query, "seqno", id.seqno);
        self.call_get("getBlockHeader", query, "BlockHeader").await
    }

    /// List transaction ids inside a block.
    pub async fn block_transactions(
        &self,
        request: &GetBlockTransactionsRequest,
    ) -> Result<BlockTransactions, Error> {
        self.call_get("getBlockTransactions", request.to_query(), "BlockTransactions")
            .await
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Get the raw state of an account.
    pub async fn address_information(
        &self,
        address: &Address,
    ) -> Result<AddressInformation, Error> {
        self.call_get(
            "getAddressInformation",
            address_query(address),
            "AddressInformation",
        )
        .await
    }

    /// Get an account's state parsed through the wallet-aware tonlib parser.
    pub async fn extended_address_information(
        &self,
        address: &Address,
    ) -> Result<ExtendedAddressInformation, Error> {
        self.call_get(
            "getExtendedAddressInformation",
            address_query(address),
            "ExtendedAddressInformation",
        )
        .await
    }

    /// Get wallet-specific account information (seqno, wallet id, type).
    pub async fn wallet_information(
        &self,
        address: &Address,
    ) -> Result<WalletInformation, Error> {
        self.call_get(
            "getWalletInformation",
            address_query(address),
            "WalletInformation",
        )
        .await
    }

    /// Get just an account's balance.
    pub async fn address_balance(&self, address: &Address) -> Result<Tokens, Error> {
        self.call_get("getAddressBalance", address_query(address), "Tokens")
            .await
    }

    /// Get an account's transaction history.
    pub async fn transactions(
        &self,
        request: &GetTransactionsRequest,
    ) -> Result<Vec<Transaction>, Error> {
        self.call_get("getTransactions", request.to_query(), "Vec<Transaction>")
            .await
    }

    // ========================================================================
    // Jettons
    // ========================================================================

    /// Get jetton master contract data (supply, admin, metadata).
    pub async fn token_data(&self, address: &Address) -> Result<TokenData, Error> {
        self.call_get("getTokenData", address_query(address), "TokenData")
            .await
    }

    // ========================================================================
    // Write operations (JSON body)
    // ========================================================================

    /// Execute a get-method on a contract inside the node's TVM emulator.
    pub async fn run_get_method(
        &self,
        request: &RunGetMethodRequest,
    ) -> Result<RunGetMethodResult, Error> {
        self.call_post("runGetMethod", request, "RunGetMethodResult")
            .await
    }

    /// Broadcast a serialized external message (base64 BOC).
    pub async fn send_boc(&self, boc: &str) -> Result<(), Error> {
        let body = serde_json::json!({ "boc": boc });
        let _: serde_json::Value = self.call_post("sendBoc", &body, "sendBoc ack").await?;
        Ok(())
    }

    /// Broadcast a serialized external message and return its hash.
    pub async fn send_boc_return_hash(&self, boc: &str) -> Result<CryptoHash, Error> {
        let body = serde_json::json!({ "boc": boc });
        let info: ExtMessageHash = self
            .call_post("sendBocReturnHash", &body, "ExtMessageHash")
            .await?;
        Ok(info.hash)
    }
}

impl std::fmt::Debug for V2Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V2Api").finish_non_exhaustive()
    }
}

fn address_query(address: &Address) -> Query {
    let mut query = Query::new();
    codec::push(&mut query, "address", address);
    query
}
