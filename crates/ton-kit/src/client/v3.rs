//! The v3 (REST) endpoint facade.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::codec::{self, Envelope, Query};
use crate::error::Error;
use crate::types::v3::{
    AdjacentTransactionsRequest, BlocksRequest, BlocksResponse, JettonMastersRequest,
    JettonMastersResponse, JettonWalletsRequest, JettonWalletsResponse, MasterchainInfo,
    MessagesRequest, MessagesResponse, TransactionsByMessageRequest, TransactionsRequest,
    TransactionsResponse,
};

use super::transport::Transport;

/// One method per v3 remote operation.
///
/// v3 responses decode directly — no envelope — and list endpoints carry an
/// address book beside the payload. Like the v2 facade, every method is one
/// HTTP round trip with no client-side state.
///
/// # Example
///
/// ```rust,no_run
/// use ton_kit::Ton;
/// use ton_kit::v3::TransactionsRequest;
///
/// # async fn example() -> Result<(), ton_kit::Error> {
/// let ton = Ton::mainnet().build()?;
///
/// let address = "0:3333333333333333333333333333333333333333333333333333333333333333"
///     .parse()?;
/// let page = ton.v3().transactions(&TransactionsRequest::for_account(address)).await?;
/// for tx in &page.transactions {
///     println!("{} at lt {}", tx.hash, tx.lt);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct V3Api {
    transport: Arc<dyn Transport>,
}

impl V3Api {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn call_get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Query,
        what: &'static str,
    ) -> Result<T, Error> {
        let path = format!("/api/v3/{endpoint}");
        let body = self.transport.get(&path, &query).await?;
        codec::decode(&body, Envelope::None, what)
    }

    /// Get the first and last indexed masterchain blocks.
    pub async fn masterchain_info(&self) -> Result<MasterchainInfo, Error> {
        self.call_get("masterchainInfo", Query::new(), "MasterchainInfo")
            .await
    }

    /// List indexed blocks matching the filters.
    pub async fn blocks(&self, request: &BlocksRequest) -> Result<BlocksResponse, Error> {
        self.call_get("blocks", request.to_query(), "BlocksResponse")
            .await
    }

    /// List indexed transactions matching the filters.
    pub async fn transactions(
        &self,
        request: &TransactionsRequest,
    ) -> Result<TransactionsResponse, Error> {
        self.call_get("transactions", request.to_query(), "TransactionsResponse")
            .await
    }

    /// Find the transactions that sent or received a given message.
    pub async fn transactions_by_message(
        &self,
        request: &TransactionsByMessageRequest,
    ) -> Result<TransactionsResponse, Error> {
        self.call_get(
            "transactionsByMessage",
            request.to_query(),
            "TransactionsResponse",
        )
        .await
    }

    /// Find the transactions adjacent to a given one in the message graph.
    pub async fn adjacent_transactions(
        &self,
        request: &AdjacentTransactionsRequest,
    ) -> Result<TransactionsResponse, Error> {
        self.call_get(
            "adjacentTransactions",
            request.to_query(),
            "TransactionsResponse",
        )
        .await
    }

    /// List indexed messages matching the filters.
    pub async fn messages(&self, request: &MessagesRequest) -> Result<MessagesResponse, Error> {
        self.call_get("messages", request.to_query(), "MessagesResponse")
            .await
    }

    /// List jetton master contracts.
    pub async fn jetton_masters(
        &self,
        request: &JettonMastersRequest,
    ) -> Result<JettonMastersResponse, Error> {
        self.call_get("jetton/masters", request.to_query(), "JettonMastersResponse")
            .await
    }

    /// List jetton wallet contracts.
    pub async fn jetton_wallets(
        &self,
        request: &JettonWalletsRequest,
    ) -> Result<JettonWalletsResponse, Error> {
        self.call_get("jetton/wallets", request.to_query(), "JettonWalletsResponse")
            .await
    }
}

impl std::fmt::Debug for V3Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V3Api").finish_non_exhaustive()
    }
}
