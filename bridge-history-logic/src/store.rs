use crate::repository;
use async_trait::async_trait;
use bridge_history_entity::{cross_message, l2_sent_msg, relayed_msg, rollup_batch};
#[cfg(test)]
use mockall::automock;
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;

/// Batch lookups over the indexed bridge events.
///
/// Every method takes a whole key set and returns the matching rows in no
/// particular order. Keys without a match are simply absent from the result.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn claimable_l2_sent_msgs_by_address(
        &self,
        address: &str,
    ) -> Result<Vec<l2_sent_msg::Model>, DbErr>;

    async fn l2_sent_msgs_by_hashes(
        &self,
        msg_hashes: &[String],
    ) -> Result<Vec<l2_sent_msg::Model>, DbErr>;

    async fn rollup_batches_by_indexes(
        &self,
        batch_indexes: &[i64],
    ) -> Result<Vec<rollup_batch::Model>, DbErr>;

    async fn relayed_msgs_by_hashes(
        &self,
        msg_hashes: &[String],
    ) -> Result<Vec<relayed_msg::Model>, DbErr>;

    /// Cross messages whose layer 1 or layer 2 transaction hash is in `tx_hashes`.
    async fn cross_msgs_by_hashes(
        &self,
        tx_hashes: &[String],
    ) -> Result<Vec<cross_message::Model>, DbErr>;

    /// Layer 2 cross messages with the given message hashes.
    async fn l2_cross_msgs_by_msg_hashes(
        &self,
        msg_hashes: &[String],
    ) -> Result<Vec<cross_message::Model>, DbErr>;
}

#[derive(Clone)]
pub struct HistoryDatabase {
    pub db: Arc<DatabaseConnection>,
}

impl HistoryDatabase {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HistoryStore for HistoryDatabase {
    async fn claimable_l2_sent_msgs_by_address(
        &self,
        address: &str,
    ) -> Result<Vec<l2_sent_msg::Model>, DbErr> {
        repository::l2_sent_msg::find_claimable_by_address(self.db.as_ref(), address).await
    }

    async fn l2_sent_msgs_by_hashes(
        &self,
        msg_hashes: &[String],
    ) -> Result<Vec<l2_sent_msg::Model>, DbErr> {
        repository::l2_sent_msg::find_by_msg_hashes(self.db.as_ref(), msg_hashes).await
    }

    async fn rollup_batches_by_indexes(
        &self,
        batch_indexes: &[i64],
    ) -> Result<Vec<rollup_batch::Model>, DbErr> {
        repository::rollup_batch::find_by_batch_indexes(self.db.as_ref(), batch_indexes).await
    }

    async fn relayed_msgs_by_hashes(
        &self,
        msg_hashes: &[String],
    ) -> Result<Vec<relayed_msg::Model>, DbErr> {
        repository::relayed_msg::find_by_msg_hashes(self.db.as_ref(), msg_hashes).await
    }

    async fn cross_msgs_by_hashes(
        &self,
        tx_hashes: &[String],
    ) -> Result<Vec<cross_message::Model>, DbErr> {
        repository::cross_message::find_by_tx_hashes(self.db.as_ref(), tx_hashes).await
    }

    async fn l2_cross_msgs_by_msg_hashes(
        &self,
        msg_hashes: &[String],
    ) -> Result<Vec<cross_message::Model>, DbErr> {
        repository::cross_message::find_l2_by_msg_hashes(self.db.as_ref(), msg_hashes).await
    }
}
