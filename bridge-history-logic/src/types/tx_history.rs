use super::{claim_info::UserClaimInfo, concat_layer_hashes};
use bridge_history_entity::{cross_message, relayed_msg};
use chrono::NaiveDateTime;
use serde::Serialize;

/// A single bridge message as seen by a user: where it was initiated,
/// what it transferred, whether it was finalized and how to claim it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TxHistoryInfo {
    pub hash: String,
    pub msg_hash: String,
    pub amount: String,
    pub to: String,
    /// `true` for messages initiated on layer 1 (deposits),
    /// `false` for messages initiated on layer 2 (withdrawals).
    pub is_l1: bool,
    pub l1_token: String,
    pub l2_token: String,
    pub block_number: u64,
    pub block_timestamp: Option<NaiveDateTime>,
    pub finalize_tx: Finalized,
    pub claim_info: Option<UserClaimInfo>,
    #[serde(rename = "createdTime")]
    pub created_at: Option<NaiveDateTime>,
}

impl TxHistoryInfo {
    /// Copies the transfer details of a cross message onto the record.
    pub fn apply_transfer(&mut self, cross_msg: &cross_message::Model) {
        self.amount = cross_msg.amount.clone();
        self.to = cross_msg.target.clone();
        self.block_timestamp = cross_msg.block_timestamp;
        self.created_at = Some(cross_msg.created_at);
        self.l1_token = cross_msg.layer1_token.clone();
        self.l2_token = cross_msg.layer2_token.clone();
    }
}

impl From<cross_message::Model> for TxHistoryInfo {
    fn from(v: cross_message::Model) -> Self {
        Self {
            hash: concat_layer_hashes(&v.layer1_hash, &v.layer2_hash),
            is_l1: v.msg_type.is_layer1(),
            block_number: v.validated_height(),
            block_timestamp: v.block_timestamp,
            created_at: Some(v.created_at),
            finalize_tx: Finalized::pending(),
            claim_info: None,
            msg_hash: v.msg_hash,
            amount: v.amount,
            to: v.target,
            l1_token: v.layer1_token,
            l2_token: v.layer2_token,
        }
    }
}

/// Finalization state of a message on the counter layer.
///
/// `block_number` stays `None` until a relayed message is known, which
/// separates "not finalized yet" from a finalization at any height.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finalized {
    pub hash: String,
    pub block_number: Option<u64>,
}

impl Finalized {
    pub fn pending() -> Self {
        Self {
            hash: String::new(),
            block_number: None,
        }
    }

    pub fn relayed(relayed_msg: &relayed_msg::Model) -> Self {
        Self {
            hash: concat_layer_hashes(&relayed_msg.layer1_hash, &relayed_msg.layer2_hash),
            block_number: Some(relayed_msg.validated_height()),
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.block_number.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClaimableTxs {
    pub results: Vec<TxHistoryInfo>,
    /// Number of claimable sent messages found for the address.
    pub total: u64,
}
