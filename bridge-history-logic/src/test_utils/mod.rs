use crate::{store::HistoryStore, types::tx_history::TxHistoryInfo};
use alloy_primitives::Address;
use async_trait::async_trait;
use bridge_history_entity::{
    cross_message, l2_sent_msg, relayed_msg, rollup_batch, sea_orm_active_enums::MsgType,
};
use chrono::{DateTime, NaiveDateTime};
use sea_orm::DbErr;

/// Checksummed sender of every [`sent_msg`].
pub const SENDER: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

pub fn sender_address() -> Address {
    SENDER.parse().unwrap()
}

pub fn ts(secs: i64) -> NaiveDateTime {
    DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
}

pub fn cross_msg(
    msg_hash: &str,
    layer1_hash: &str,
    layer2_hash: &str,
    msg_type: MsgType,
) -> cross_message::Model {
    cross_message::Model {
        id: 0,
        msg_hash: msg_hash.to_string(),
        height: 100,
        sender: "0xsender".to_string(),
        target: "0xtarget".to_string(),
        amount: "1000".to_string(),
        layer1_hash: layer1_hash.to_string(),
        layer2_hash: layer2_hash.to_string(),
        layer1_token: "0xl1token".to_string(),
        layer2_token: "0xl2token".to_string(),
        token_ids: String::new(),
        msg_type,
        block_timestamp: Some(ts(1_690_000_000)),
        created_at: ts(1_690_000_100),
        updated_at: ts(1_690_000_100),
        deleted_at: None,
    }
}

pub fn relayed_msg(
    msg_hash: &str,
    layer1_hash: &str,
    layer2_hash: &str,
    height: i64,
) -> relayed_msg::Model {
    relayed_msg::Model {
        id: 0,
        msg_hash: msg_hash.to_string(),
        height,
        layer1_hash: layer1_hash.to_string(),
        layer2_hash: layer2_hash.to_string(),
        created_at: ts(1_690_000_200),
        updated_at: ts(1_690_000_200),
        deleted_at: None,
    }
}

/// Claimable message sent by [`SENDER`] and committed in batch `batch_index`.
pub fn sent_msg(msg_hash: &str, batch_index: i64) -> l2_sent_msg::Model {
    l2_sent_msg::Model {
        id: 0,
        original_sender: SENDER.to_string(),
        tx_hash: format!("0xtx-{msg_hash}"),
        sender: SENDER.to_string(),
        target: "0xtarget".to_string(),
        value: "1000".to_string(),
        msg_hash: msg_hash.to_string(),
        height: 200,
        nonce: 1,
        batch_index,
        msg_proof: format!("proof-{msg_hash}"),
        msg_data: "0xdata".to_string(),
        created_at: ts(1_690_000_300),
        updated_at: ts(1_690_000_300),
        deleted_at: None,
    }
}

pub fn rollup_batch(batch_index: i64, batch_hash: &str) -> rollup_batch::Model {
    rollup_batch::Model {
        id: 0,
        commit_height: 300,
        batch_index,
        batch_hash: batch_hash.to_string(),
        start_block_number: 0,
        end_block_number: 0,
        created_at: ts(1_690_000_400),
        updated_at: ts(1_690_000_400),
        deleted_at: None,
    }
}

pub fn tx_history(msg_hash: &str, is_l1: bool) -> TxHistoryInfo {
    TxHistoryInfo {
        hash: format!("0xtx-{msg_hash}"),
        msg_hash: msg_hash.to_string(),
        is_l1,
        ..Default::default()
    }
}

/// Store over plain vectors, filtered the same way the database queries are.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    pub cross_msgs: Vec<cross_message::Model>,
    pub l2_sent_msgs: Vec<l2_sent_msg::Model>,
    pub relayed_msgs: Vec<relayed_msg::Model>,
    pub rollup_batches: Vec<rollup_batch::Model>,
}

fn contains(keys: &[String], key: &str) -> bool {
    keys.iter().any(|k| k == key)
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn claimable_l2_sent_msgs_by_address(
        &self,
        address: &str,
    ) -> Result<Vec<l2_sent_msg::Model>, DbErr> {
        let mut msgs = self
            .l2_sent_msgs
            .iter()
            .filter(|msg| msg.deleted_at.is_none())
            .filter(|msg| msg.sender == address || msg.original_sender == address)
            .filter(|msg| !msg.msg_proof.is_empty())
            .filter(|msg| {
                !self
                    .relayed_msgs
                    .iter()
                    .any(|relayed| relayed.deleted_at.is_none() && relayed.msg_hash == msg.msg_hash)
            })
            .cloned()
            .collect::<Vec<_>>();
        msgs.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(msgs)
    }

    async fn l2_sent_msgs_by_hashes(
        &self,
        msg_hashes: &[String],
    ) -> Result<Vec<l2_sent_msg::Model>, DbErr> {
        Ok(self
            .l2_sent_msgs
            .iter()
            .filter(|msg| msg.deleted_at.is_none() && contains(msg_hashes, &msg.msg_hash))
            .cloned()
            .collect())
    }

    async fn rollup_batches_by_indexes(
        &self,
        batch_indexes: &[i64],
    ) -> Result<Vec<rollup_batch::Model>, DbErr> {
        Ok(self
            .rollup_batches
            .iter()
            .filter(|batch| batch.deleted_at.is_none() && batch_indexes.contains(&batch.batch_index))
            .cloned()
            .collect())
    }

    async fn relayed_msgs_by_hashes(
        &self,
        msg_hashes: &[String],
    ) -> Result<Vec<relayed_msg::Model>, DbErr> {
        Ok(self
            .relayed_msgs
            .iter()
            .filter(|msg| msg.deleted_at.is_none() && contains(msg_hashes, &msg.msg_hash))
            .cloned()
            .collect())
    }

    async fn cross_msgs_by_hashes(
        &self,
        tx_hashes: &[String],
    ) -> Result<Vec<cross_message::Model>, DbErr> {
        Ok(self
            .cross_msgs
            .iter()
            .filter(|msg| msg.deleted_at.is_none())
            .filter(|msg| {
                contains(tx_hashes, &msg.layer1_hash) || contains(tx_hashes, &msg.layer2_hash)
            })
            .cloned()
            .collect())
    }

    async fn l2_cross_msgs_by_msg_hashes(
        &self,
        msg_hashes: &[String],
    ) -> Result<Vec<cross_message::Model>, DbErr> {
        Ok(self
            .cross_msgs
            .iter()
            .filter(|msg| msg.deleted_at.is_none() && msg.msg_type == MsgType::Layer2)
            .filter(|msg| contains(msg_hashes, &msg.msg_hash))
            .cloned()
            .collect())
    }
}
