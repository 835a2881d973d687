use super::{Enrichment, SkipReason};
use crate::{
    store::HistoryStore,
    types::{claim_info::UserClaimInfo, tx_history::TxHistoryInfo},
};
use itertools::Itertools;
use std::collections::HashMap;

/// Attaches claim info to layer 2 initiated records.
///
/// A record gets claim info only when both its sent message and the rollup
/// batch the message was committed in are known.
pub async fn update_l2_tx_claim_info<S>(
    store: &S,
    tx_histories: &mut [TxHistoryInfo],
) -> Enrichment
where
    S: HistoryStore + ?Sized,
{
    let l2_msg_hashes = tx_histories
        .iter()
        .filter(|tx| !tx.is_l1)
        .map(|tx| tx.msg_hash.clone())
        .unique()
        .collect::<Vec<_>>();
    if l2_msg_hashes.is_empty() {
        return Enrichment::Skipped(SkipReason::NothingToEnrich);
    }

    let sent_msgs = match store.l2_sent_msgs_by_hashes(&l2_msg_hashes).await {
        Ok(sent_msgs) if sent_msgs.is_empty() => {
            tracing::debug!(msg_hashes = ?l2_msg_hashes, "no l2 sent messages found");
            return Enrichment::Skipped(SkipReason::NotFound);
        }
        Ok(sent_msgs) => sent_msgs,
        Err(err) => {
            tracing::warn!(err = ?err, msg_hashes = ?l2_msg_hashes, "failed to fetch l2 sent messages");
            return Enrichment::Skipped(SkipReason::LookupFailed);
        }
    };

    let batch_indexes = sent_msgs
        .iter()
        .map(|msg| msg.batch_index)
        .unique()
        .collect::<Vec<_>>();
    let batches = match store.rollup_batches_by_indexes(&batch_indexes).await {
        Ok(batches) => batches,
        Err(err) => {
            tracing::warn!(err = ?err, batch_indexes = ?batch_indexes, "failed to fetch rollup batches");
            return Enrichment::Skipped(SkipReason::LookupFailed);
        }
    };

    let sent_msgs = sent_msgs
        .into_iter()
        .map(|msg| (msg.msg_hash.clone(), msg))
        .collect::<HashMap<_, _>>();
    let batches = batches
        .into_iter()
        .map(|batch| (batch.batch_index, batch))
        .collect::<HashMap<_, _>>();

    let mut enriched = 0;
    for tx in tx_histories.iter_mut().filter(|tx| !tx.is_l1) {
        let Some(sent_msg) = sent_msgs.get(&tx.msg_hash) else {
            continue;
        };
        let Some(batch) = batches.get(&sent_msg.batch_index) else {
            tracing::debug!(
                msg_hash = %tx.msg_hash,
                batch_index = sent_msg.batch_index,
                "rollup batch is not committed yet"
            );
            continue;
        };
        tx.claim_info = Some(UserClaimInfo::new(sent_msg, batch));
        enriched += 1;
    }

    Enrichment::Applied { enriched }
}
