//! Schema for the legacy v2 (tonlib-style) interface.
//!
//! v2 payloads carry tonlib `@type` annotations. Plain records ignore them;
//! tagged unions ([`ParsedAccountState`], [`MessageData`], [`JettonContent`])
//! dispatch on them, and an unrecognized discriminator is a decode failure.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use serde_with::{DisplayFromStr, serde_as};

use crate::codec::{self, Query};
use crate::types::{Address, BlockIdExt, CryptoHash, Tokens};

// ============================================================================
// Chain-level responses
// ============================================================================

/// Result of `getMasterchainInfo`.
#[derive(Clone, Debug, Deserialize)]
pub struct MasterchainInfo {
    /// The latest known masterchain block.
    pub last: BlockIdExt,
    pub state_root_hash: CryptoHash,
    /// The initial (genesis) masterchain block.
    pub init: BlockIdExt,
}

/// Result of `getBlockHeader`: full block metadata.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct BlockHeader {
    pub id: BlockIdExt,
    pub global_id: i32,
    pub version: u32,
    pub flags: i32,
    pub after_merge: bool,
    pub after_split: bool,
    pub before_split: bool,
    pub want_merge: bool,
    pub want_split: bool,
    pub is_key_block: bool,
    pub validator_list_hash_short: i64,
    pub catchain_seqno: u32,
    pub min_ref_mc_seqno: u32,
    pub prev_key_block_seqno: u32,
    #[serde_as(as = "DisplayFromStr")]
    pub start_lt: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub end_lt: u64,
    pub gen_utime: u64,
    pub vert_seqno: u32,
    #[serde(default)]
    pub prev_blocks: Vec<BlockIdExt>,
}

/// Result of `shards`: the shard blocks referenced by a masterchain block.
#[derive(Clone, Debug, Deserialize)]
pub struct Shards {
    pub shards: Vec<BlockIdExt>,
}

/// Result of `getBlockTransactions`.
#[derive(Clone, Debug, Deserialize)]
pub struct BlockTransactions {
    pub id: BlockIdExt,
    pub req_count: u32,
    /// True when the listing was cut short and more transactions exist.
    pub incomplete: bool,
    #[serde(default)]
    pub transactions: Vec<ShortTxId>,
}

/// A transaction reference inside a block listing.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct ShortTxId {
    pub mode: i32,
    pub account: Address,
    #[serde_as(as = "DisplayFromStr")]
    pub lt: u64,
    pub hash: CryptoHash,
}

// ============================================================================
// Account state
// ============================================================================

/// Coarse tonlib account status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Uninitialized,
    Frozen,
    Active,
}

/// A (logical time, hash) pointer to a transaction.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct InternalTransactionId {
    #[serde_as(as = "DisplayFromStr")]
    pub lt: u64,
    pub hash: CryptoHash,
}

/// Result of `getAddressInformation`: the raw account state.
#[derive(Clone, Debug, Deserialize)]
pub struct AddressInformation {
    pub balance: Tokens,
    /// Contract code as opaque base64 BOC, absent for uninitialized accounts.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub code: Option<String>,
    /// Contract data as opaque base64 BOC.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub data: Option<String>,
    pub last_transaction_id: InternalTransactionId,
    pub block_id: BlockIdExt,
    #[serde(default)]
    pub frozen_hash: Option<CryptoHash>,
    pub sync_utime: u64,
    pub state: AccountStatus,
}

/// Parsed account state, keyed by the wallet-aware tonlib parser.
///
/// This models a different state space than [`AccountStatus`]: the remote
/// service returns each from a different endpoint and they do not unify.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "@type")]
pub enum ParsedAccountState {
    /// The account has no code or data yet.
    #[serde(rename = "uninited.accountState")]
    Uninit {
        #[serde(default)]
        frozen_hash: Option<CryptoHash>,
    },

    /// An active account the parser couldn't attribute to a known wallet.
    #[serde(rename = "raw.accountState")]
    Raw {
        #[serde(default, deserialize_with = "empty_as_none")]
        code: Option<String>,
        #[serde(default, deserialize_with = "empty_as_none")]
        data: Option<String>,
        #[serde(default)]
        frozen_hash: Option<CryptoHash>,
    },

    /// A v3 wallet contract.
    #[serde(rename = "wallet.v3.accountState")]
    WalletV3 {
        #[serde_as(as = "DisplayFromStr")]
        wallet_id: u64,
        seqno: u32,
        #[serde(default)]
        public_key: Option<String>,
    },

    /// A v4 wallet contract.
    #[serde(rename = "wallet.v4.accountState")]
    WalletV4 {
        #[serde_as(as = "DisplayFromStr")]
        wallet_id: u64,
        seqno: u32,
        #[serde(default)]
        public_key: Option<String>,
    },
}

/// An address as tonlib nests it.
#[derive(Clone, Debug, Deserialize)]
pub struct AccountAddress {
    pub account_address: Address,
}

/// Result of `getExtendedAddressInformation`.
#[derive(Clone, Debug, Deserialize)]
pub struct ExtendedAddressInformation {
    pub address: AccountAddress,
    pub balance: Tokens,
    pub last_transaction_id: InternalTransactionId,
    pub block_id: BlockIdExt,
    pub sync_utime: u64,
    pub account_state: ParsedAccountState,
}

/// Result of `getWalletInformation`.
#[derive(Clone, Debug, Deserialize)]
pub struct WalletInformation {
    /// Whether the account looks like a known wallet contract at all.
    pub wallet: bool,
    pub balance: Tokens,
    pub account_state: AccountStatus,
    #[serde(default)]
    pub wallet_type: Option<String>,
    #[serde(default)]
    pub seqno: Option<u32>,
    #[serde(default)]
    pub wallet_id: Option<u64>,
    #[serde(default)]
    pub last_transaction_id: Option<InternalTransactionId>,
}

// ============================================================================
// Transactions and messages
// ============================================================================

/// Result element of `getTransactions`: a raw transaction.
#[derive(Clone, Debug, Deserialize)]
pub struct Transaction {
    pub address: AccountAddress,
    pub utime: u64,
    /// The whole transaction as opaque base64 BOC.
    pub data: String,
    pub transaction_id: InternalTransactionId,
    pub fee: Tokens,
    pub storage_fee: Tokens,
    pub other_fee: Tokens,
    #[serde(default)]
    pub in_msg: Option<RawMessage>,
    #[serde(default)]
    pub out_msgs: Vec<RawMessage>,
}

/// A raw message attached to a v2 transaction.
///
/// External messages have no on-chain counterparty; tonlib encodes that as
/// an empty source/destination string, which maps to `None` here.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct RawMessage {
    #[serde(default, deserialize_with = "empty_address_as_none")]
    pub source: Option<Address>,
    #[serde(default, deserialize_with = "empty_address_as_none")]
    pub destination: Option<Address>,
    pub value: Tokens,
    pub fwd_fee: Tokens,
    pub ihr_fee: Tokens,
    #[serde_as(as = "DisplayFromStr")]
    pub created_lt: u64,
    pub body_hash: CryptoHash,
    pub msg_data: MessageData,
}

/// Message payload in one of tonlib's representations.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "@type")]
pub enum MessageData {
    /// Undecoded body as base64 BOC, plus optional init state.
    #[serde(rename = "msg.dataRaw")]
    Raw {
        body: String,
        #[serde(default, deserialize_with = "empty_as_none")]
        init_state: Option<String>,
    },

    /// A plain-text comment.
    #[serde(rename = "msg.dataText")]
    Text { text: String },
}

// ============================================================================
// Jettons
// ============================================================================

/// Result of `getTokenData` for a jetton master contract.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenData {
    pub total_supply: Tokens,
    pub mintable: bool,
    #[serde(default, deserialize_with = "empty_address_as_none")]
    pub admin_address: Option<Address>,
    pub jetton_content: JettonContent,
    /// Wallet code as opaque base64 BOC.
    pub jetton_wallet_code: String,
    #[serde(default)]
    pub contract_type: Option<String>,
}

/// Jetton metadata, stored either on chain or behind a URI.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum JettonContent {
    /// Key-value metadata stored directly in the contract.
    Onchain(BTreeMap<String, String>),
    /// A URI pointing at off-chain JSON metadata.
    Offchain(String),
}

// ============================================================================
// VM stack items (runGetMethod)
// ============================================================================

/// A stack value passed into `runGetMethod`.
///
/// Wire form is a two-element array: `["num", "0x1"]`, `["cell", "te6cc…"]`,
/// `["slice", "te6cc…"]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackEntry {
    /// A 257-bit integer, decimal or 0x-hex as a string.
    Num(String),
    /// A cell as base64 BOC.
    Cell(String),
    /// A slice as base64 BOC.
    Slice(String),
}

impl Serialize for StackEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (tag, value) = match self {
            StackEntry::Num(v) => ("num", v),
            StackEntry::Cell(v) => ("cell", v),
            StackEntry::Slice(v) => ("slice", v),
        };
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(tag)?;
        seq.serialize_element(value)?;
        seq.end()
    }
}

/// A stack value returned by `runGetMethod`.
///
/// Same wire form as [`StackEntry`], with two recursive variants on top:
/// `["list", [...]]` and `["tuple", [...]]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackItem {
    Num(String),
    Cell(String),
    Slice(String),
    List(Vec<StackItem>),
    Tuple(Vec<StackItem>),
}

impl<'de> Deserialize<'de> for StackItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (tag, value): (String, serde_json::Value) = Deserialize::deserialize(deserializer)?;

        fn expect_str<E: de::Error>(value: serde_json::Value, tag: &str) -> Result<String, E> {
            match value {
                serde_json::Value::String(s) => Ok(s),
                other => Err(E::custom(format!(
                    "stack item '{tag}' expects a string value, got {other}"
                ))),
            }
        }

        fn expect_items<E: de::Error>(
            value: serde_json::Value,
            tag: &str,
        ) -> Result<Vec<StackItem>, E> {
            serde_json::from_value(value)
                .map_err(|e| E::custom(format!("stack item '{tag}' elements: {e}")))
        }

        match tag.as_str() {
            "num" => Ok(StackItem::Num(expect_str(value, "num")?)),
            "cell" => Ok(StackItem::Cell(expect_str(value, "cell")?)),
            "slice" => Ok(StackItem::Slice(expect_str(value, "slice")?)),
            "list" => Ok(StackItem::List(expect_items(value, "list")?)),
            "tuple" => Ok(StackItem::Tuple(expect_items(value, "tuple")?)),
            other => Err(de::Error::unknown_variant(
                other,
                &["num", "cell", "slice", "list", "tuple"],
            )),
        }
    }
}

/// Parameters for `runGetMethod`, sent as a JSON body.
#[derive(Clone, Debug, Serialize)]
pub struct RunGetMethodRequest {
    pub address: Address,
    pub method: String,
    pub stack: Vec<StackEntry>,
}

impl RunGetMethodRequest {
    pub fn new(address: Address, method: impl Into<String>) -> Self {
        Self {
            address,
            method: method.into(),
            stack: Vec::new(),
        }
    }
}

/// Result of `runGetMethod`.
#[derive(Clone, Debug, Deserialize)]
pub struct RunGetMethodResult {
    pub gas_used: u64,
    #[serde(default)]
    pub stack: Vec<StackItem>,
    /// TVM exit code; `0` and `1` mean success, everything else is a
    /// contract-level failure the caller interprets.
    pub exit_code: i32,
}

/// Result of `sendBocReturnHash`.
#[derive(Clone, Debug, Deserialize)]
pub struct ExtMessageHash {
    pub hash: CryptoHash,
}

// ============================================================================
// Request parameters
// ============================================================================

/// Parameters for `getTransactions`.
#[derive(Clone, Debug)]
pub struct GetTransactionsRequest {
    pub address: Address,
    /// Maximum number of transactions to return.
    pub limit: u32,
    /// Start from this logical time (requires `hash`).
    pub lt: Option<u64>,
    /// Start from the transaction with this hash.
    pub hash: Option<CryptoHash>,
    /// Stop before this logical time.
    pub to_lt: Option<u64>,
    /// Force the archival backend.
    pub archival: Option<bool>,
}

impl GetTransactionsRequest {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            limit: 10,
            lt: None,
            hash: None,
            to_lt: None,
            archival: None,
        }
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        codec::push(&mut query, "address", &self.address);
        codec::push(&mut query, "limit", self.limit);
        codec::push_opt(&mut query, "lt", self.lt);
        codec::push_opt(&mut query, "hash", self.hash.as_ref());
        codec::push_opt(&mut query, "to_lt", self.to_lt);
        codec::push_opt(&mut query, "archival", self.archival);
        query
    }
}

/// Parameters for `lookupBlock`: find a block by seqno, lt or unixtime.
#[derive(Clone, Debug)]
pub struct LookupBlockRequest {
    pub workchain: i32,
    pub shard: i64,
    pub seqno: Option<u32>,
    pub lt: Option<u64>,
    pub unixtime: Option<u64>,
}

impl LookupBlockRequest {
    pub fn new(workchain: i32, shard: i64) -> Self {
        Self {
            workchain,
            shard,
            seqno: None,
            lt: None,
            unixtime: None,
        }
    }

    /// Look up by sequence number.
    pub fn seqno(mut self, seqno: u32) -> Self {
        self.seqno = Some(seqno);
        self
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        codec::push(&mut query, "workchain", self.workchain);
        codec::push(&mut query, "shard", self.shard);
        codec::push_opt(&mut query, "seqno", self.seqno);
        codec::push_opt(&mut query, "lt", self.lt);
        codec::push_opt(&mut query, "unixtime", self.unixtime);
        query
    }
}

/// Parameters for `getBlockTransactions`.
#[derive(Clone, Debug)]
pub struct GetBlockTransactionsRequest {
    pub workchain: i32,
    pub shard: i64,
    pub seqno: u32,
    pub root_hash: Option<CryptoHash>,
    pub file_hash: Option<CryptoHash>,
    /// Resume a cut-short listing after this logical time.
    pub after_lt: Option<u64>,
    /// Resume after this transaction hash.
    pub after_hash: Option<CryptoHash>,
    pub count: u32,
}

impl GetBlockTransactionsRequest {
    pub fn new(workchain: i32, shard: i64, seqno: u32) -> Self {
        Self {
            workchain,
            shard,
            seqno,
            root_hash: None,
            file_hash: None,
            after_lt: None,
            after_hash: None,
            count: 10,
        }
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        codec::push(&mut query, "workchain", self.workchain);
        codec::push(&mut query, "shard", self.shard);
        codec::push(&mut query, "seqno", self.seqno);
        codec::push_opt(&mut query, "root_hash", self.root_hash.as_ref());
        codec::push_opt(&mut query, "file_hash", self.file_hash.as_ref());
        codec::push_opt(&mut query, "after_lt", self.after_lt);
        codec::push_opt(&mut query, "after_hash", self.after_hash.as_ref());
        codec::push(&mut query, "count", self.count);
        query
    }
}

// ============================================================================
// Deserialization helpers
// ============================================================================

/// tonlib encodes "absent" string fields as `""`.
fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Same convention for address fields (external messages have no source).
fn empty_address_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Address>, D::Error> {
    struct Visitor;

    impl<'de> de::Visitor<'de> for Visitor {
        type Value = Option<Address>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an address string, empty string, or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            let s = String::deserialize(d)?;
            if s.is_empty() {
                return Ok(None);
            }
            s.parse().map(Some).map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_option(Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AA: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const BB: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
    const CC: &str = "cccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccc";
    const ADDR: &str = "0:3333333333333333333333333333333333333333333333333333333333333333";

    fn block_id_json(seqno: u32) -> String {
        format!(
            r#"{{"@type":"ton.blockIdExt","workchain":-1,"shard":"-9223372036854775808","seqno":{seqno},"root_hash":"{AA}","file_hash":"{BB}"}}"#
        )
    }

    #[test]
    fn masterchain_info_decodes() {
        let json = format!(
            r#"{{
                "@type": "blocks.masterchainInfo",
                "last": {},
                "state_root_hash": "{CC}",
                "init": {}
            }}"#,
            block_id_json(34945086),
            block_id_json(1)
        );
        let info: MasterchainInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info.last.seqno, 34945086);
        assert_eq!(info.init.seqno, 1);
        assert_eq!(info.last.shard, i64::MIN);
    }

    #[test]
    fn parsed_account_state_variants() {
        let v3: ParsedAccountState = serde_json::from_str(
            r#"{"@type": "wallet.v3.accountState", "wallet_id": "698983191", "seqno": 42}"#,
        )
        .unwrap();
        match v3 {
            ParsedAccountState::WalletV3 {
                wallet_id,
                seqno,
                public_key,
            } => {
                assert_eq!(wallet_id, 698983191);
                assert_eq!(seqno, 42);
                assert_eq!(public_key, None);
            }
            other => panic!("expected WalletV3, got {other:?}"),
        }

        let raw: ParsedAccountState = serde_json::from_str(
            r#"{"@type": "raw.accountState", "code": "te6cc", "data": "", "frozen_hash": null}"#,
        )
        .unwrap();
        match raw {
            ParsedAccountState::Raw { code, data, .. } => {
                assert_eq!(code.as_deref(), Some("te6cc"));
                assert_eq!(data, None);
            }
            other => panic!("expected Raw, got {other:?}"),
        }

        let uninit: ParsedAccountState =
            serde_json::from_str(r#"{"@type": "uninited.accountState"}"#).unwrap();
        assert!(matches!(uninit, ParsedAccountState::Uninit { .. }));
    }

    #[test]
    fn unknown_account_state_discriminator_fails() {
        let err = serde_json::from_str::<ParsedAccountState>(
            r#"{"@type": "wallet.v99.accountState", "seqno": 1}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn transaction_decodes_with_messages() {
        let json = format!(
            r#"{{
                "@type": "raw.transaction",
                "address": {{"account_address": "{ADDR}"}},
                "utime": 1698670000,
                "data": "te6ccdata",
                "transaction_id": {{"lt": "41731000000001", "hash": "{AA}"}},
                "fee": "5820004",
                "storage_fee": "4",
                "other_fee": "5820000",
                "in_msg": {{
                    "source": "",
                    "destination": "{ADDR}",
                    "value": "0",
                    "fwd_fee": "0",
                    "ihr_fee": "0",
                    "created_lt": "0",
                    "body_hash": "{BB}",
                    "msg_data": {{"@type": "msg.dataRaw", "body": "te6ccbody", "init_state": ""}}
                }},
                "out_msgs": [{{
                    "source": "{ADDR}",
                    "destination": "{ADDR}",
                    "value": "1000000000",
                    "fwd_fee": "666672",
                    "ihr_fee": "0",
                    "created_lt": "41731000000002",
                    "body_hash": "{CC}",
                    "msg_data": {{"@type": "msg.dataText", "text": "aGk="}}
                }}]
            }}"#
        );
        let tx: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx.transaction_id.lt, 41731000000001);
        assert_eq!(tx.fee, Tokens::from(5820004u64));

        let in_msg = tx.in_msg.unwrap();
        assert_eq!(in_msg.source, None);
        assert!(in_msg.destination.is_some());
        assert!(matches!(
            in_msg.msg_data,
            MessageData::Raw { ref body, init_state: None } if body == "te6ccbody"
        ));

        assert_eq!(tx.out_msgs.len(), 1);
        assert!(matches!(tx.out_msgs[0].msg_data, MessageData::Text { .. }));
    }

    #[test]
    fn unknown_msg_data_discriminator_fails() {
        let err = serde_json::from_str::<MessageData>(
            r#"{"@type": "msg.dataEncrypted", "body": "x"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn jetton_content_variants() {
        let onchain: JettonContent = serde_json::from_str(
            r#"{"type": "onchain", "data": {"name": "Proxy TON", "decimals": "9"}}"#,
        )
        .unwrap();
        match onchain {
            JettonContent::Onchain(data) => assert_eq!(data["decimals"], "9"),
            other => panic!("expected Onchain, got {other:?}"),
        }

        let offchain: JettonContent =
            serde_json::from_str(r#"{"type": "offchain", "data": "https://x.ton/meta.json"}"#)
                .unwrap();
        assert_eq!(
            offchain,
            JettonContent::Offchain("https://x.ton/meta.json".to_string())
        );

        assert!(serde_json::from_str::<JettonContent>(r#"{"type": "ipfs", "data": "q"}"#).is_err());
    }

    #[test]
    fn stack_entry_serializes_as_pair() {
        let stack = vec![
            StackEntry::Num("0x1".to_string()),
            StackEntry::Slice("te6cc".to_string()),
        ];
        let json = serde_json::to_value(&stack).unwrap();
        assert_eq!(
            json,
            serde_json::json!([["num", "0x1"], ["slice", "te6cc"]])
        );
    }

    #[test]
    fn stack_item_decodes_recursively() {
        let json = r#"[
            ["num", "0x2a"],
            ["cell", "te6cc"],
            ["tuple", [["num", "1"], ["list", [["slice", "te6cc"]]]]]
        ]"#;
        let stack: Vec<StackItem> = serde_json::from_str(json).unwrap();
        assert_eq!(stack[0], StackItem::Num("0x2a".to_string()));
        assert_eq!(stack[1], StackItem::Cell("te6cc".to_string()));
        assert_eq!(
            stack[2],
            StackItem::Tuple(vec![
                StackItem::Num("1".to_string()),
                StackItem::List(vec![StackItem::Slice("te6cc".to_string())]),
            ])
        );
    }

    #[test]
    fn unknown_stack_tag_fails() {
        assert!(serde_json::from_str::<StackItem>(r#"["builder", "x"]"#).is_err());
        assert!(serde_json::from_str::<StackItem>(r#"["num", 42]"#).is_err());
    }

    #[test]
    fn get_transactions_query_defaults() {
        let address: Address = ADDR.parse().unwrap();
        let query = GetTransactionsRequest::new(address).to_query();
        assert_eq!(
            query,
            vec![
                ("address", ADDR.to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }

    #[test]
    fn get_transactions_query_with_filters() {
        let mut req = GetTransactionsRequest::new(ADDR.parse().unwrap());
        req.limit = 50;
        req.lt = Some(41731000000001);
        req.hash = Some(AA.parse().unwrap());
        let query = req.to_query();
        assert_eq!(
            query,
            vec![
                ("address", ADDR.to_string()),
                ("limit", "50".to_string()),
                ("lt", "41731000000001".to_string()),
                ("hash", AA.to_string()),
            ]
        );
    }

    #[test]
    fn lookup_block_query() {
        let query = LookupBlockRequest::new(-1, i64::MIN).seqno(12345).to_query();
        assert_eq!(
            query,
            vec![
                ("workchain", "-1".to_string()),
                ("shard", "-9223372036854775808".to_string()),
                ("seqno", "12345".to_string()),
            ]
        );
    }

    #[test]
    fn block_transactions_query_always_sends_count() {
        let query = GetBlockTransactionsRequest::new(0, 1 << 61, 40000000).to_query();
        assert!(query.contains(&("count", "10".to_string())));
        assert!(query.contains(&("shard", (1i64 << 61).to_string())));
    }

    #[test]
    fn run_get_method_body() {
        let mut req = RunGetMethodRequest::new(ADDR.parse().unwrap(), "seqno");
        req.stack.push(StackEntry::Num("3".to_string()));
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "address": ADDR,
                "method": "seqno",
                "stack": [["num", "3"]],
            })
        );
    }
}
