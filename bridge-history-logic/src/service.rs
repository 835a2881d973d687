use crate::{
    enrich,
    error::ServiceError,
    history,
    settings::HistorySettings,
    store::HistoryStore,
    types::tx_history::{ClaimableTxs, TxHistoryInfo},
};
use alloy_primitives::Address;
use itertools::Itertools;
use tracing::instrument;

/// Read-only queries over bridge message histories.
pub struct HistoryLogic<S> {
    store: S,
    settings: HistorySettings,
}

impl<S: HistoryStore> HistoryLogic<S> {
    pub fn new(store: S, settings: HistorySettings) -> Self {
        Self { store, settings }
    }

    /// Layer 2 withdrawals of `address` that can be claimed on layer 1.
    ///
    /// `total` is the number of claimable messages found, regardless of how
    /// many of them could be enriched with claim info.
    #[instrument(skip_all, level = "info", fields(address = %address), err)]
    pub async fn claimable_txs_by_address(
        &self,
        address: Address,
    ) -> Result<ClaimableTxs, ServiceError> {
        // senders are indexed in their checksummed form
        let address = address.to_checksum(None);
        let sent_msgs = self
            .store
            .claimable_l2_sent_msgs_by_address(&address)
            .await
            .inspect_err(|err| {
                tracing::error!(err = ?err, address = %address, "failed to fetch claimable l2 sent messages");
            })?;
        if sent_msgs.is_empty() {
            return Ok(ClaimableTxs::default());
        }

        let msg_hashes = sent_msgs
            .iter()
            .map(|msg| msg.msg_hash.clone())
            .collect::<Vec<_>>();
        let cross_msgs = self
            .store
            .l2_cross_msgs_by_msg_hashes(&msg_hashes)
            .await
            .inspect_err(|err| {
                tracing::error!(err = ?err, address = %address, "failed to fetch l2 cross messages");
            })?;

        let mut results = history::claimable_tx_histories(&sent_msgs, cross_msgs);
        let claim_info = enrich::update_l2_tx_claim_info(&self.store, &mut results).await;
        tracing::debug!(
            records = results.len(),
            claim_info = ?claim_info,
            "claimable transactions assembled"
        );

        Ok(ClaimableTxs {
            results,
            total: sent_msgs.len() as u64,
        })
    }

    /// Histories of messages initiated or finalized by any of `tx_hashes`.
    #[instrument(skip_all, level = "info", fields(hashes = tx_hashes.len()), err)]
    pub async fn txs_by_hashes(
        &self,
        tx_hashes: &[String],
    ) -> Result<Vec<TxHistoryInfo>, ServiceError> {
        let tx_hashes = tx_hashes.iter().unique().cloned().collect::<Vec<_>>();
        if tx_hashes.len() > self.settings.max_hashes_per_request {
            return Err(ServiceError::InvalidArgument(format!(
                "too many hashes: {} > {}",
                tx_hashes.len(),
                self.settings.max_hashes_per_request
            )));
        }
        if tx_hashes.is_empty() {
            return Ok(vec![]);
        }

        let cross_msgs = self
            .store
            .cross_msgs_by_hashes(&tx_hashes)
            .await
            .inspect_err(|err| {
                tracing::error!(err = ?err, hashes = ?tx_hashes, "failed to fetch cross messages");
            })?;

        let mut results = history::tx_histories_from_cross_msgs(cross_msgs);
        let report = history::apply_finalization_and_claim_info(&self.store, &mut results).await;
        tracing::debug!(records = results.len(), report = ?report, "transactions assembled");

        Ok(results)
    }
}
