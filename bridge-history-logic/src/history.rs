//! Assembles transaction histories out of raw bridge events.

use crate::{
    enrich::{self, Enrichment},
    store::HistoryStore,
    types::tx_history::{Finalized, TxHistoryInfo},
};
use bridge_history_entity::{cross_message, l2_sent_msg};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentReport {
    pub finalization: Enrichment,
    pub claim_info: Enrichment,
}

/// One record per claimable sent message, in the order the messages were
/// given. Transfer details are taken from the matching cross message, if any.
pub fn claimable_tx_histories(
    sent_msgs: &[l2_sent_msg::Model],
    cross_msgs: Vec<cross_message::Model>,
) -> Vec<TxHistoryInfo> {
    let cross_msgs = cross_msgs
        .into_iter()
        .map(|msg| (msg.msg_hash.clone(), msg))
        .collect::<HashMap<_, _>>();

    sent_msgs
        .iter()
        .map(|sent_msg| {
            let mut tx = TxHistoryInfo {
                hash: sent_msg.tx_hash.clone(),
                msg_hash: sent_msg.msg_hash.clone(),
                is_l1: false,
                block_number: sent_msg.validated_height(),
                finalize_tx: Finalized::pending(),
                ..Default::default()
            };
            if let Some(cross_msg) = cross_msgs.get(&sent_msg.msg_hash) {
                tx.apply_transfer(cross_msg);
            }
            tx
        })
        .collect()
}

pub fn tx_histories_from_cross_msgs(cross_msgs: Vec<cross_message::Model>) -> Vec<TxHistoryInfo> {
    cross_msgs.into_iter().map(TxHistoryInfo::from).collect()
}

/// Runs finalization and then claim info enrichment over `tx_histories`.
pub async fn apply_finalization_and_claim_info<S>(
    store: &S,
    tx_histories: &mut [TxHistoryInfo],
) -> EnrichmentReport
where
    S: HistoryStore + ?Sized,
{
    let finalization = enrich::update_cross_tx_hashes(store, tx_histories).await;
    let claim_info = enrich::update_l2_tx_claim_info(store, tx_histories).await;
    EnrichmentReport {
        finalization,
        claim_info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        store::MockHistoryStore,
        test_utils::{cross_msg, relayed_msg, rollup_batch, sent_msg, tx_history, InMemoryHistoryStore},
    };
    use bridge_history_entity::sea_orm_active_enums::MsgType;
    use mockall::Sequence;
    use pretty_assertions::assert_eq;

    #[test]
    fn claimable_records_keep_sent_message_order_and_overlay_transfers() {
        let sent_msgs = vec![sent_msg("h2", 9), sent_msg("h1", 5)];
        let mut transfer = cross_msg("h1", "", "0xl2tx", MsgType::Layer2);
        transfer.amount = "42".to_string();
        transfer.target = "0xreceiver".to_string();

        let txs = claimable_tx_histories(&sent_msgs, vec![transfer.clone()]);

        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].msg_hash, "h2");
        assert_eq!(txs[0].hash, "0xtx-h2");
        assert_eq!(txs[0].amount, "");
        assert_eq!(txs[0].created_at, None);
        assert_eq!(txs[1].msg_hash, "h1");
        assert_eq!(txs[1].amount, "42");
        assert_eq!(txs[1].to, "0xreceiver");
        assert_eq!(txs[1].l1_token, transfer.layer1_token);
        assert_eq!(txs[1].created_at, Some(transfer.created_at));
        assert!(txs.iter().all(|tx| !tx.is_l1));
        assert!(txs.iter().all(|tx| tx.block_number == 200));
        assert!(txs.iter().all(|tx| tx.finalize_tx == Finalized::pending()));
    }

    #[test]
    fn records_from_cross_messages_derive_side_from_message_type() {
        let txs = tx_histories_from_cross_msgs(vec![
            cross_msg("h1", "0xAA", "", MsgType::Layer1),
            cross_msg("h2", "", "0xBB", MsgType::Layer2),
        ]);

        assert_eq!(txs[0].hash, "0xAA");
        assert!(txs[0].is_l1);
        assert_eq!(txs[1].hash, "0xBB");
        assert!(!txs[1].is_l1);
    }

    #[tokio::test]
    async fn finalization_runs_before_claim_info() {
        let mut seq = Sequence::new();
        let mut store = MockHistoryStore::new();
        store
            .expect_relayed_msgs_by_hashes()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![]));
        store
            .expect_l2_sent_msgs_by_hashes()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![]));
        let mut txs = vec![tx_history("h1", false)];

        let report = apply_finalization_and_claim_info(&store, &mut txs).await;

        assert_eq!(report.finalization, Enrichment::Skipped(enrich::SkipReason::NotFound));
        assert_eq!(report.claim_info, Enrichment::Skipped(enrich::SkipReason::NotFound));
    }

    #[tokio::test]
    async fn combined_enrichment_fills_disjoint_fields() {
        let store = InMemoryHistoryStore {
            relayed_msgs: vec![relayed_msg("h2", "0xL1", "", 500)],
            l2_sent_msgs: vec![sent_msg("h2", 5)],
            rollup_batches: vec![rollup_batch(5, "0xbatch5")],
            ..Default::default()
        };
        let mut txs = vec![tx_history("h1", true), tx_history("h2", false)];

        let report = apply_finalization_and_claim_info(&store, &mut txs).await;

        assert_eq!(report.finalization.enriched(), 1);
        assert_eq!(report.claim_info.enriched(), 1);
        assert_eq!(txs[0].finalize_tx, Finalized::pending());
        assert_eq!(txs[0].claim_info, None);
        assert_eq!(txs[1].finalize_tx.hash, "0xL1");
        assert_eq!(txs[1].finalize_tx.block_number, Some(500));
        assert_eq!(
            txs[1].claim_info.as_ref().map(|c| c.batch_index.as_str()),
            Some("5")
        );
    }
}
