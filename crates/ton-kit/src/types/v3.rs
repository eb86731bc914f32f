//! Schema for the v3 (REST) interface.
//!
//! v3 payloads are plain snake_case JSON. Tagged unions dispatch on a
//! `type` field ([`TxDescription`], [`BouncePhase`], [`DecodedContent`])
//! except the compute phase, whose wire discriminator is the `skipped`
//! boolean. List responses carry an [`AddressBook`] beside the payload.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::codec::{self, Query};
use crate::types::{Address, BlockId, CryptoHash, Tokens};

// ============================================================================
// Sorting and direction options
// ============================================================================

/// Result ordering for list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message direction relative to a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageDirection {
    In,
    Out,
}

impl fmt::Display for MessageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MessageDirection::In => "in",
            MessageDirection::Out => "out",
        })
    }
}

// ============================================================================
// Blocks
// ============================================================================

/// Result of `/masterchainInfo`.
#[derive(Clone, Debug, Deserialize)]
pub struct MasterchainInfo {
    /// The earliest masterchain block the indexer knows about.
    pub first: Block,
    /// The latest indexed masterchain block.
    pub last: Block,
}

/// A fully indexed block.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct Block {
    pub workchain: i32,
    #[serde_as(as = "DisplayFromStr")]
    pub shard: i64,
    pub seqno: u32,
    pub root_hash: CryptoHash,
    pub file_hash: CryptoHash,
    pub global_id: i32,
    pub version: u32,
    pub flags: i32,
    pub after_merge: bool,
    pub after_split: bool,
    pub before_split: bool,
    pub want_merge: bool,
    pub want_split: bool,
    pub key_block: bool,
    pub vert_seqno_incr: bool,
    pub validator_list_hash_short: i64,
    pub catchain_seqno: u32,
    pub min_ref_mc_seqno: u32,
    pub prev_key_block_seqno: u32,
    pub vert_seqno: u32,
    #[serde_as(as = "DisplayFromStr")]
    pub gen_utime: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub start_lt: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub end_lt: u64,
    /// Number of transactions indexed in this block.
    pub tx_count: u64,
    /// The masterchain block that references this one; absent on
    /// masterchain blocks themselves.
    #[serde(default)]
    pub masterchain_block_ref: Option<BlockId>,
    #[serde(default)]
    pub prev_blocks: Vec<BlockId>,
}

/// Result of `/blocks`.
#[derive(Clone, Debug, Deserialize)]
pub struct BlocksResponse {
    pub blocks: Vec<Block>,
}

// ============================================================================
// Address book
// ============================================================================

/// Auxiliary context for addresses appearing in a list payload.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AddressBook(pub BTreeMap<String, AddressBookEntry>);

impl AddressBook {
    pub fn get(&self, raw: &str) -> Option<&AddressBookEntry> {
        self.0.get(raw)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One address book entry.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AddressBookEntry {
    /// User-friendly (base64) rendition of the raw address.
    #[serde(default)]
    pub user_friendly: Option<String>,
    /// DNS domain resolving to this address, if any.
    #[serde(default)]
    pub domain: Option<String>,
}

// ============================================================================
// Transactions
// ============================================================================

/// Account status before/after a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Uninit,
    Frozen,
    Active,
    Nonexist,
}

/// Result of `/transactions` and friends: the list plus address context.
#[derive(Clone, Debug, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub address_book: AddressBook,
}

/// A fully indexed transaction.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct Transaction {
    pub account: Address,
    pub hash: CryptoHash,
    #[serde_as(as = "DisplayFromStr")]
    pub lt: u64,
    /// Wall-clock time (unix seconds).
    pub now: u64,
    /// Seqno of the masterchain block this transaction was committed under.
    #[serde(default)]
    pub mc_block_seqno: Option<u32>,
    /// Trace this transaction belongs to.
    #[serde(default)]
    pub trace_id: Option<CryptoHash>,
    #[serde(default)]
    pub prev_trans_hash: Option<CryptoHash>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub prev_trans_lt: Option<u64>,
    pub orig_status: AccountStatus,
    pub end_status: AccountStatus,
    pub total_fees: Tokens,
    pub description: TxDescription,
    #[serde(default)]
    pub block_ref: Option<BlockId>,
    #[serde(default)]
    pub in_msg: Option<Message>,
    #[serde(default)]
    pub out_msgs: Vec<Message>,
    #[serde(default)]
    pub account_state_before: Option<AccountStateBrief>,
    #[serde(default)]
    pub account_state_after: Option<AccountStateBrief>,
}

/// Brief account state snapshot attached to a transaction.
#[derive(Clone, Debug, Deserialize)]
pub struct AccountStateBrief {
    #[serde(default)]
    pub hash: Option<CryptoHash>,
    #[serde(default)]
    pub balance: Option<Tokens>,
    #[serde(default)]
    pub account_status: Option<AccountStatus>,
    #[serde(default)]
    pub frozen_hash: Option<CryptoHash>,
    #[serde(default)]
    pub code_hash: Option<CryptoHash>,
    #[serde(default)]
    pub data_hash: Option<CryptoHash>,
}

/// How a transaction executed, by kind.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum TxDescription {
    /// A regular message-driven transaction.
    #[serde(rename = "ord")]
    Ordinary {
        aborted: bool,
        destroyed: bool,
        credit_first: bool,
        #[serde(default)]
        storage_ph: Option<StoragePhase>,
        #[serde(default)]
        credit_ph: Option<CreditPhase>,
        #[serde(default)]
        compute_ph: Option<ComputePhase>,
        #[serde(default)]
        action: Option<ActionPhase>,
        #[serde(default)]
        bounce: Option<BouncePhase>,
    },

    /// A system tick/tock transaction on a special account.
    #[serde(rename = "tick_tock")]
    TickTock {
        aborted: bool,
        destroyed: bool,
        is_tock: bool,
        #[serde(default)]
        storage_ph: Option<StoragePhase>,
        #[serde(default)]
        compute_ph: Option<ComputePhase>,
        #[serde(default)]
        action: Option<ActionPhase>,
    },
}

/// Storage fee collection phase.
#[derive(Clone, Debug, Deserialize)]
pub struct StoragePhase {
    pub storage_fees_collected: Tokens,
    #[serde(default)]
    pub storage_fees_due: Option<Tokens>,
    pub status_change: String,
}

/// Balance credit phase.
#[derive(Clone, Debug, Deserialize)]
pub struct CreditPhase {
    #[serde(default)]
    pub due_fees_collected: Option<Tokens>,
    pub credit: Tokens,
}

/// TVM compute phase: either skipped outright or actually executed.
///
/// The wire discriminates on the `skipped` boolean rather than a `type`
/// string, so this decodes through a custom visitor.
#[derive(Clone, Debug)]
pub enum ComputePhase {
    Skipped { reason: ComputeSkipReason },
    Executed(ExecutedComputePhase),
}

/// Why a compute phase was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputeSkipReason {
    NoState,
    BadState,
    NoGas,
    Suspended,
}

/// An actually-executed compute phase.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct ExecutedComputePhase {
    pub success: bool,
    #[serde(default)]
    pub msg_state_used: bool,
    #[serde(default)]
    pub account_activated: bool,
    pub gas_fees: Tokens,
    #[serde_as(as = "DisplayFromStr")]
    pub gas_used: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub gas_limit: u64,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub gas_credit: Option<u64>,
    pub mode: i32,
    pub exit_code: i32,
    pub vm_steps: u64,
    #[serde(default)]
    pub vm_init_state_hash: Option<CryptoHash>,
    #[serde(default)]
    pub vm_final_state_hash: Option<CryptoHash>,
}

impl<'de> Deserialize<'de> for ComputePhase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value.get("skipped").and_then(serde_json::Value::as_bool) {
            Some(true) => {
                let reason = value
                    .get("reason")
                    .cloned()
                    .ok_or_else(|| de::Error::missing_field("reason"))?;
                let reason =
                    serde_json::from_value(reason).map_err(de::Error::custom)?;
                Ok(ComputePhase::Skipped { reason })
            }
            Some(false) => serde_json::from_value(value)
                .map(ComputePhase::Executed)
                .map_err(de::Error::custom),
            None => Err(de::Error::missing_field("skipped")),
        }
    }
}

/// Action phase: outbound message dispatch bookkeeping.
#[derive(Clone, Debug, Deserialize)]
pub struct ActionPhase {
    pub success: bool,
    pub valid: bool,
    pub no_funds: bool,
    #[serde(default)]
    pub total_fwd_fees: Option<Tokens>,
    #[serde(default)]
    pub total_action_fees: Option<Tokens>,
    pub result_code: i32,
    pub tot_actions: u32,
    pub spec_actions: u32,
    pub skipped_actions: u32,
    pub msgs_created: u32,
    #[serde(default)]
    pub action_list_hash: Option<CryptoHash>,
}

/// Bounce phase outcome for bounceable messages.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BouncePhase {
    /// Not enough funds to even compose the bounce message.
    #[serde(rename = "negfunds")]
    NegFunds,

    /// Funds insufficient for the bounce message's forward fees.
    #[serde(rename = "nofunds")]
    NoFunds {
        #[serde(default)]
        req_fwd_fees: Option<Tokens>,
    },

    /// The bounce message was sent.
    #[serde(rename = "ok")]
    Ok {
        #[serde(default)]
        msg_fees: Option<Tokens>,
        #[serde(default)]
        fwd_fees: Option<Tokens>,
    },
}

// ============================================================================
// Messages
// ============================================================================

/// Result of `/messages`.
#[derive(Clone, Debug, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
    #[serde(default)]
    pub address_book: AddressBook,
}

/// An indexed message.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct Message {
    pub hash: CryptoHash,
    /// Absent for external-in messages.
    #[serde(default)]
    pub source: Option<Address>,
    /// Absent for external-out (log) messages.
    #[serde(default)]
    pub destination: Option<Address>,
    #[serde(default)]
    pub value: Option<Tokens>,
    #[serde(default)]
    pub fwd_fee: Option<Tokens>,
    #[serde(default)]
    pub ihr_fee: Option<Tokens>,
    #[serde(default)]
    pub import_fee: Option<Tokens>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub created_lt: Option<u64>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub created_at: Option<u64>,
    /// First 32 bits of the body, as `0x`-hex.
    #[serde(default)]
    pub opcode: Option<String>,
    #[serde(default)]
    pub ihr_disabled: Option<bool>,
    #[serde(default)]
    pub bounce: Option<bool>,
    #[serde(default)]
    pub bounced: Option<bool>,
    #[serde(default)]
    pub message_content: Option<MessageContent>,
    #[serde(default)]
    pub init_state: Option<MessageContent>,
}

/// Raw message body plus the indexer's decoding of it, when recognized.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageContent {
    pub hash: CryptoHash,
    /// Body as opaque base64 BOC.
    pub body: String,
    #[serde(default)]
    pub decoded: Option<DecodedContent>,
}

/// What the indexer made of a message body.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum DecodedContent {
    /// A plain text comment.
    #[serde(rename = "text_comment")]
    Text { comment: String },

    /// A standard jetton transfer notification.
    #[serde(rename = "jetton_transfer")]
    JettonTransfer {
        #[serde(deserialize_with = "u64_from_str")]
        query_id: u64,
        amount: Tokens,
        #[serde(default)]
        destination: Option<Address>,
        #[serde(default)]
        response_destination: Option<Address>,
        #[serde(default)]
        forward_amount: Option<Tokens>,
        #[serde(default)]
        comment: Option<String>,
    },
}

fn u64_from_str<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(de::Error::custom)
}

// ============================================================================
// Jettons
// ============================================================================

/// Result of `/jetton/masters`.
#[derive(Clone, Debug, Deserialize)]
pub struct JettonMastersResponse {
    pub jetton_masters: Vec<JettonMaster>,
    #[serde(default)]
    pub address_book: AddressBook,
}

/// An indexed jetton master contract.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct JettonMaster {
    pub address: Address,
    pub total_supply: Tokens,
    pub mintable: bool,
    #[serde(default)]
    pub admin_address: Option<Address>,
    /// Token metadata as the indexer stored it; shape varies per token, so
    /// it stays opaque structured JSON here.
    #[serde(default)]
    pub jetton_content: Option<serde_json::Value>,
    pub jetton_wallet_code_hash: CryptoHash,
    pub code_hash: CryptoHash,
    pub data_hash: CryptoHash,
    #[serde_as(as = "DisplayFromStr")]
    pub last_transaction_lt: u64,
}

/// Result of `/jetton/wallets`.
#[derive(Clone, Debug, Deserialize)]
pub struct JettonWalletsResponse {
    pub jetton_wallets: Vec<JettonWallet>,
    #[serde(default)]
    pub address_book: AddressBook,
}

/// An indexed per-owner jetton wallet contract.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct JettonWallet {
    pub address: Address,
    pub balance: Tokens,
    pub owner: Address,
    /// The master contract this wallet belongs to.
    pub jetton: Address,
    #[serde_as(as = "DisplayFromStr")]
    pub last_transaction_lt: u64,
    #[serde(default)]
    pub code_hash: Option<CryptoHash>,
    #[serde(default)]
    pub data_hash: Option<CryptoHash>,
}

// ============================================================================
// Request parameters
// ============================================================================

/// Parameters for `/blocks`.
#[derive(Clone, Debug)]
pub struct BlocksRequest {
    pub workchain: Option<i32>,
    pub shard: Option<i64>,
    pub seqno: Option<u32>,
    pub start_utime: Option<u64>,
    pub end_utime: Option<u64>,
    pub start_lt: Option<u64>,
    pub end_lt: Option<u64>,
    pub limit: u32,
    pub offset: u32,
    pub sort: SortOrder,
}

impl Default for BlocksRequest {
    fn default() -> Self {
        Self {
            workchain: None,
            shard: None,
            seqno: None,
            start_utime: None,
            end_utime: None,
            start_lt: None,
            end_lt: None,
            limit: 10,
            offset: 0,
            sort: SortOrder::Desc,
        }
    }
}

impl BlocksRequest {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        codec::push_opt(&mut query, "workchain", self.workchain);
        codec::push_opt(&mut query, "shard", self.shard);
        codec::push_opt(&mut query, "seqno", self.seqno);
        codec::push_opt(&mut query, "start_utime", self.start_utime);
        codec::push_opt(&mut query, "end_utime", self.end_utime);
        codec::push_opt(&mut query, "start_lt", self.start_lt);
        codec::push_opt(&mut query, "end_lt", self.end_lt);
        codec::push(&mut query, "limit", self.limit);
        codec::push(&mut query, "offset", self.offset);
        codec::push(&mut query, "sort", self.sort);
        query
    }
}

/// Parameters for `/transactions`.
#[derive(Clone, Debug)]
pub struct TransactionsRequest {
    pub workchain: Option<i32>,
    pub shard: Option<i64>,
    pub seqno: Option<u32>,
    /// Restrict to these accounts (comma-joined on the wire).
    pub account: Vec<Address>,
    /// Exclude these accounts.
    pub exclude_account: Vec<Address>,
    pub hash: Option<CryptoHash>,
    pub lt: Option<u64>,
    pub start_utime: Option<u64>,
    pub end_utime: Option<u64>,
    pub start_lt: Option<u64>,
    pub end_lt: Option<u64>,
    pub limit: u32,
    pub offset: u32,
    pub sort: SortOrder,
}

impl Default for TransactionsRequest {
    fn default() -> Self {
        Self {
            workchain: None,
            shard: None,
            seqno: None,
            account: Vec::new(),
            exclude_account: Vec::new(),
            hash: None,
            lt: None,
            start_utime: None,
            end_utime: None,
            start_lt: None,
            end_lt: None,
            limit: 10,
            offset: 0,
            sort: SortOrder::Desc,
        }
    }
}

impl TransactionsRequest {
    /// Restrict to a single account.
    pub fn for_account(address: Address) -> Self {
        Self {
            account: vec![address],
            ..Self::default()
        }
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        codec::push_opt(&mut query, "workchain", self.workchain);
        codec::push_opt(&mut query, "shard", self.shard);
        codec::push_opt(&mut query, "seqno", self.seqno);
        codec::push_list(&mut query, "account", &self.account);
        codec::push_list(&mut query, "exclude_account", &self.exclude_account);
        codec::push_opt(&mut query, "hash", self.hash.as_ref());
        codec::push_opt(&mut query, "lt", self.lt);
        codec::push_opt(&mut query, "start_utime", self.start_utime);
        codec::push_opt(&mut query, "end_utime", self.end_utime);
        codec::push_opt(&mut query, "start_lt", self.start_lt);
        codec::push_opt(&mut query, "end_lt", self.end_lt);
        codec::push(&mut query, "limit", self.limit);
        codec::push(&mut query, "offset", self.offset);
        codec::push(&mut query, "sort", self.sort);
        query
    }
}

/// Parameters for `/transactionsByMessage`.
#[derive(Clone, Debug)]
pub struct TransactionsByMessageRequest {
    pub msg_hash: CryptoHash,
    pub direction: Option<MessageDirection>,
    pub limit: u32,
    pub offset: u32,
}

impl TransactionsByMessageRequest {
    pub fn new(msg_hash: CryptoHash) -> Self {
        Self {
            msg_hash,
            direction: None,
            limit: 10,
            offset: 0,
        }
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        codec::push(&mut query, "msg_hash", &self.msg_hash);
        codec::push_opt(&mut query, "direction", self.direction);
        codec::push(&mut query, "limit", self.limit);
        codec::push(&mut query, "offset", self.offset);
        query
    }
}

/// Parameters for `/adjacentTransactions`.
#[derive(Clone, Debug)]
pub struct AdjacentTransactionsRequest {
    pub hash: CryptoHash,
    /// Restrict to parents (`in`) or children (`out`); both when unset.
    pub direction: Option<MessageDirection>,
    pub limit: u32,
    pub offset: u32,
    pub sort: SortOrder,
}

impl AdjacentTransactionsRequest {
    pub fn new(hash: CryptoHash) -> Self {
        Self {
            hash,
            direction: None,
            limit: 10,
            offset: 0,
            sort: SortOrder::Desc,
        }
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        codec::push(&mut query, "hash", &self.hash);
        codec::push_opt(&mut query, "direction", self.direction);
        codec::push(&mut query, "limit", self.limit);
        codec::push(&mut query, "offset", self.offset);
        codec::push(&mut query, "sort", self.sort);
        query
    }
}

/// Parameters for `/messages`.
#[derive(Clone, Debug)]
pub struct MessagesRequest {
    pub hash: Option<CryptoHash>,
    pub source: Option<Address>,
    pub destination: Option<Address>,
    pub body_hash: Option<CryptoHash>,
    pub limit: u32,
    pub offset: u32,
    pub sort: SortOrder,
}

impl Default for MessagesRequest {
    fn default() -> Self {
        Self {
            hash: None,
            source: None,
            destination: None,
            body_hash: None,
            limit: 10,
            offset: 0,
            sort: SortOrder::Desc,
        }
    }
}

impl MessagesRequest {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        codec::push_opt(&mut query, "hash", self.hash.as_ref());
        codec::push_opt(&mut query, "source", self.source.as_ref());
        codec::push_opt(&mut query, "destination", self.destination.as_ref());
        codec::push_opt(&mut query, "body_hash", self.body_hash.as_ref());
        codec::push(&mut query, "limit", self.limit);
        codec::push(&mut query, "offset", self.offset);
        codec::push(&mut query, "sort", self.sort);
        query
    }
}

/// Parameters for `/jetton/masters`.
#[derive(Clone, Debug)]
pub struct JettonMastersRequest {
    pub address: Vec<Address>,
    pub admin_address: Vec<Address>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for JettonMastersRequest {
    fn default() -> Self {
        Self {
            address: Vec::new(),
            admin_address: Vec::new(),
            limit: 10,
            offset: 0,
        }
    }
}

impl JettonMastersRequest {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        codec::push_list(&mut query, "address", &self.address);
        codec::push_list(&mut query, "admin_address", &self.admin_address);
        codec::push(&mut query, "limit", self.limit);
        codec::push(&mut query, "offset", self.offset);
        query
    }
}

/// Parameters for `/jetton/wallets`.
#[derive(Clone, Debug)]
pub struct JettonWalletsRequest {
    pub address: Vec<Address>,
    pub owner_address: Vec<Address>,
    pub jetton_address: Option<Address>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for JettonWalletsRequest {
    fn default() -> Self {
        Self {
            address: Vec::new(),
            owner_address: Vec::new(),
            jetton_address: None,
            limit: 10,
            offset: 0,
        }
    }
}

impl JettonWalletsRequest {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        codec::push_list(&mut query, "address", &self.address);
        codec::push_list(&mut query, "owner_address", &self.owner_address);
        codec::push_opt(&mut query, "jetton_address", self.jetton_address.as_ref());
        codec::push(&mut query, "limit", self.limit);
        codec::push(&mut query, "offset", self.offset);
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AA: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const BB: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
    const ADDR1: &str = "0:1111111111111111111111111111111111111111111111111111111111111111";
    const ADDR2: &str = "0:2222222222222222222222222222222222222222222222222222222222222222";

    fn block_json(seqno: u32) -> String {
        format!(
            r#"{{
                "workchain": -1, "shard": "-9223372036854775808", "seqno": {seqno},
                "root_hash": "{AA}", "file_hash": "{BB}",
                "global_id": -239, "version": 0, "flags": 1,
                "after_merge": false, "after_split": false, "before_split": false,
                "want_merge": true, "want_split": false,
                "key_block": false, "vert_seqno_incr": false,
                "validator_list_hash_short": 387905694,
                "catchain_seqno": 471226, "min_ref_mc_seqno": {seqno},
                "prev_key_block_seqno": 34199844, "vert_seqno": 1,
                "gen_utime": "1698670580", "start_lt": "41731000000000",
                "end_lt": "41731000000004", "tx_count": 5,
                "masterchain_block_ref": null,
                "prev_blocks": [{{"workchain": -1, "shard": "-9223372036854775808", "seqno": {}}}]
            }}"#,
            seqno - 1
        )
    }

    fn ordinary_description() -> &'static str {
        r#"{
            "type": "ord",
            "aborted": false,
            "destroyed": false,
            "credit_first": true,
            "storage_ph": {"storage_fees_collected": "4", "status_change": "unchanged"},
            "credit_ph": {"credit": "1000000000"},
            "compute_ph": {
                "skipped": false, "success": true, "msg_state_used": false,
                "account_activated": false, "gas_fees": "3308000",
                "gas_used": "3308", "gas_limit": "1000000", "gas_credit": "10000",
                "mode": 0, "exit_code": 0, "vm_steps": 68
            },
            "action": {
                "success": true, "valid": true, "no_funds": false,
                "total_fwd_fees": "1000000", "total_action_fees": "333328",
                "result_code": 0, "tot_actions": 1, "spec_actions": 0,
                "skipped_actions": 0, "msgs_created": 1
            }
        }"#
    }

    #[test]
    fn masterchain_info_decodes() {
        let json = format!(
            r#"{{"first": {}, "last": {}}}"#,
            block_json(3),
            block_json(34945086)
        );
        let info: MasterchainInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info.last.seqno, 34945086);
        assert_eq!(info.last.gen_utime, 1698670580);
        assert_eq!(info.last.prev_blocks[0].seqno, 34945085);
        assert!(info.last.masterchain_block_ref.is_none());
    }

    #[test]
    fn tx_description_ord_variant() {
        let descr: TxDescription = serde_json::from_str(ordinary_description()).unwrap();
        match descr {
            TxDescription::Ordinary {
                aborted,
                credit_first,
                storage_ph,
                compute_ph,
                action,
                bounce,
                ..
            } => {
                assert!(!aborted);
                assert!(credit_first);
                assert_eq!(
                    storage_ph.unwrap().storage_fees_collected,
                    Tokens::from(4u64)
                );
                match compute_ph.unwrap() {
                    ComputePhase::Executed(vm) => {
                        assert!(vm.success);
                        assert_eq!(vm.gas_used, 3308);
                        assert_eq!(vm.gas_credit, Some(10000));
                    }
                    other => panic!("expected Executed, got {other:?}"),
                }
                assert_eq!(action.unwrap().msgs_created, 1);
                assert!(bounce.is_none());
            }
            other => panic!("expected Ordinary, got {other:?}"),
        }
    }

    #[test]
    fn tx_description_tick_tock_variant() {
        let json = r#"{
            "type": "tick_tock", "aborted": false, "destroyed": false, "is_tock": true,
            "compute_ph": {"skipped": true, "reason": "no_gas"}
        }"#;
        let descr: TxDescription = serde_json::from_str(json).unwrap();
        match descr {
            TxDescription::TickTock {
                is_tock, compute_ph, ..
            } => {
                assert!(is_tock);
                assert!(matches!(
                    compute_ph.unwrap(),
                    ComputePhase::Skipped {
                        reason: ComputeSkipReason::NoGas
                    }
                ));
            }
            other => panic!("expected TickTock, got {other:?}"),
        }
    }

    #[test]
    fn unknown_description_discriminator_fails() {
        let err = serde_json::from_str::<TxDescription>(
            r#"{"type": "split_prepare", "aborted": false}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn compute_phase_requires_skipped_field() {
        assert!(serde_json::from_str::<ComputePhase>(r#"{"success": true}"#).is_err());
        assert!(
            serde_json::from_str::<ComputePhase>(r#"{"skipped": true, "reason": "later"}"#)
                .is_err()
        );
    }

    #[test]
    fn bounce_phase_variants() {
        let ok: BouncePhase =
            serde_json::from_str(r#"{"type": "ok", "msg_fees": "333328", "fwd_fees": "666672"}"#)
                .unwrap();
        assert!(matches!(ok, BouncePhase::Ok { .. }));

        let negfunds: BouncePhase = serde_json::from_str(r#"{"type": "negfunds"}"#).unwrap();
        assert!(matches!(negfunds, BouncePhase::NegFunds));

        assert!(serde_json::from_str::<BouncePhase>(r#"{"type": "maybe"}"#).is_err());
    }

    #[test]
    fn transaction_decodes_end_to_end() {
        let json = format!(
            r#"{{
                "account": "{ADDR1}",
                "hash": "{AA}",
                "lt": "41731000000001",
                "now": 1698670580,
                "mc_block_seqno": 34945086,
                "trace_id": "{BB}",
                "prev_trans_hash": "{BB}",
                "prev_trans_lt": "41730000000001",
                "orig_status": "active",
                "end_status": "active",
                "total_fees": "5820004",
                "description": {},
                "block_ref": {{"workchain": 0, "shard": "2305843009213693952", "seqno": 40000000}},
                "in_msg": {{
                    "hash": "{BB}",
                    "source": "{ADDR2}",
                    "destination": "{ADDR1}",
                    "value": "1000000000",
                    "fwd_fee": "666672",
                    "ihr_fee": "0",
                    "created_lt": "41730999999999",
                    "created_at": "1698670570",
                    "opcode": "0x00000000",
                    "ihr_disabled": true,
                    "bounce": false,
                    "bounced": false,
                    "message_content": {{
                        "hash": "{AA}",
                        "body": "te6ccbody",
                        "decoded": {{"type": "text_comment", "comment": "hi"}}
                    }}
                }},
                "out_msgs": [],
                "account_state_before": {{"balance": "9000000000", "account_status": "active"}},
                "account_state_after": {{"balance": "9994179996", "account_status": "active"}}
            }}"#,
            ordinary_description()
        );
        let tx: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx.lt, 41731000000001);
        assert_eq!(tx.mc_block_seqno, Some(34945086));
        assert_eq!(tx.orig_status, AccountStatus::Active);
        assert_eq!(tx.total_fees, Tokens::from(5820004u64));

        let in_msg = tx.in_msg.unwrap();
        assert_eq!(in_msg.value, Some(Tokens::from(1_000_000_000u64)));
        let content = in_msg.message_content.unwrap();
        assert!(matches!(
            content.decoded,
            Some(DecodedContent::Text { ref comment }) if comment == "hi"
        ));

        let before = tx.account_state_before.unwrap();
        let after = tx.account_state_after.unwrap();
        assert!(after.balance.unwrap() > before.balance.unwrap());
    }

    #[test]
    fn decoded_jetton_transfer() {
        let json = format!(
            r#"{{
                "type": "jetton_transfer",
                "query_id": "18446744073709551615",
                "amount": "1000000",
                "destination": "{ADDR1}",
                "response_destination": "{ADDR2}",
                "forward_amount": "1",
                "comment": "payment"
            }}"#
        );
        let decoded: DecodedContent = serde_json::from_str(&json).unwrap();
        match decoded {
            DecodedContent::JettonTransfer {
                query_id, amount, ..
            } => {
                assert_eq!(query_id, u64::MAX);
                assert_eq!(amount, Tokens::from(1_000_000u64));
            }
            other => panic!("expected JettonTransfer, got {other:?}"),
        }

        assert!(
            serde_json::from_str::<DecodedContent>(r#"{"type": "nft_transfer"}"#).is_err()
        );
    }

    #[test]
    fn transactions_response_with_address_book() {
        let json = format!(
            r#"{{
                "transactions": [],
                "address_book": {{
                    "{ADDR1}": {{"user_friendly": "EQARULUYsmJq1RiZ-YiH-IJLcAZUVkVff-KBPwEmmaQGH6aC"}}
                }}
            }}"#
        );
        let resp: TransactionsResponse = serde_json::from_str(&json).unwrap();
        assert!(resp.transactions.is_empty());
        assert_eq!(
            resp.address_book.get(ADDR1).unwrap().user_friendly.as_deref(),
            Some("EQARULUYsmJq1RiZ-YiH-IJLcAZUVkVff-KBPwEmmaQGH6aC")
        );

        // address_book is optional on the wire.
        let resp: TransactionsResponse =
            serde_json::from_str(r#"{"transactions": []}"#).unwrap();
        assert!(resp.address_book.is_empty());
    }

    #[test]
    fn jetton_wallets_decode() {
        let json = format!(
            r#"{{
                "jetton_wallets": [{{
                    "address": "{ADDR1}",
                    "balance": "123456789012345678901234567890",
                    "owner": "{ADDR2}",
                    "jetton": "{ADDR2}",
                    "last_transaction_lt": "41731000000001",
                    "code_hash": "{AA}",
                    "data_hash": "{BB}"
                }}]
            }}"#
        );
        let resp: JettonWalletsResponse = serde_json::from_str(&json).unwrap();
        let wallet = &resp.jetton_wallets[0];
        assert_eq!(wallet.balance.to_string(), "123456789012345678901234567890");
        assert_eq!(wallet.last_transaction_lt, 41731000000001);
    }

    #[test]
    fn blocks_query_always_emits_defaults() {
        let query = BlocksRequest::default().to_query();
        assert_eq!(
            query,
            vec![
                ("limit", "10".to_string()),
                ("offset", "0".to_string()),
                ("sort", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn transactions_query_joins_accounts_in_order() {
        let mut req = TransactionsRequest::default();
        req.account = vec![ADDR2.parse().unwrap(), ADDR1.parse().unwrap()];
        req.sort = SortOrder::Asc;
        let query = req.to_query();
        assert_eq!(
            query,
            vec![
                ("account", format!("{ADDR2},{ADDR1}")),
                ("limit", "10".to_string()),
                ("offset", "0".to_string()),
                ("sort", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn empty_account_list_is_omitted() {
        let query = TransactionsRequest::default().to_query();
        assert!(query.iter().all(|(key, _)| *key != "account"));
        assert!(query.iter().all(|(key, _)| *key != "exclude_account"));
    }

    #[test]
    fn transactions_by_message_query() {
        let mut req = TransactionsByMessageRequest::new(AA.parse().unwrap());
        req.direction = Some(MessageDirection::In);
        assert_eq!(
            req.to_query(),
            vec![
                ("msg_hash", AA.to_string()),
                ("direction", "in".to_string()),
                ("limit", "10".to_string()),
                ("offset", "0".to_string()),
            ]
        );
    }

    #[test]
    fn jetton_wallets_query() {
        let mut req = JettonWalletsRequest::default();
        req.owner_address = vec![ADDR1.parse().unwrap()];
        req.jetton_address = Some(ADDR2.parse().unwrap());
        assert_eq!(
            req.to_query(),
            vec![
                ("owner_address", ADDR1.to_string()),
                ("jetton_address", ADDR2.to_string()),
                ("limit", "10".to_string()),
                ("offset", "0".to_string()),
            ]
        );
    }
}
