use bridge_history_entity::{l2_sent_msg, rollup_batch};
use serde::Serialize;

/// Everything a user needs to submit a claim of a layer 2 message on layer 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserClaimInfo {
    pub from: String,
    pub to: String,
    pub value: String,
    pub nonce: String,
    pub message: String,
    pub proof: String,
    pub batch_hash: String,
    pub batch_index: String,
}

impl UserClaimInfo {
    pub fn new(sent_msg: &l2_sent_msg::Model, batch: &rollup_batch::Model) -> Self {
        Self {
            from: sent_msg.sender.clone(),
            to: sent_msg.target.clone(),
            value: sent_msg.value.clone(),
            nonce: sent_msg.validated_nonce().to_string(),
            message: sent_msg.msg_data.clone(),
            proof: format!("0x{}", sent_msg.msg_proof),
            batch_hash: batch.batch_hash.clone(),
            batch_index: sent_msg.validated_batch_index().to_string(),
        }
    }
}
