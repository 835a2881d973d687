use super::{Enrichment, SkipReason};
use crate::{
    store::HistoryStore,
    types::tx_history::{Finalized, TxHistoryInfo},
};
use itertools::Itertools;
use std::collections::HashMap;

/// Marks records whose message was relayed on the counter layer as finalized.
pub async fn update_cross_tx_hashes<S>(store: &S, tx_histories: &mut [TxHistoryInfo]) -> Enrichment
where
    S: HistoryStore + ?Sized,
{
    let msg_hashes = tx_histories
        .iter()
        .map(|tx| tx.msg_hash.clone())
        .unique()
        .collect::<Vec<_>>();
    if msg_hashes.is_empty() {
        return Enrichment::Skipped(SkipReason::NothingToEnrich);
    }

    let relayed_msgs = match store.relayed_msgs_by_hashes(&msg_hashes).await {
        Ok(relayed_msgs) if relayed_msgs.is_empty() => {
            tracing::debug!(msg_hashes = ?msg_hashes, "no relayed messages found");
            return Enrichment::Skipped(SkipReason::NotFound);
        }
        Ok(relayed_msgs) => relayed_msgs,
        Err(err) => {
            tracing::warn!(err = ?err, msg_hashes = ?msg_hashes, "failed to fetch relayed messages");
            return Enrichment::Skipped(SkipReason::LookupFailed);
        }
    };

    let relayed_msgs = relayed_msgs
        .into_iter()
        .map(|msg| (msg.msg_hash.clone(), msg))
        .collect::<HashMap<_, _>>();

    let mut enriched = 0;
    for tx in tx_histories.iter_mut() {
        if let Some(relayed_msg) = relayed_msgs.get(&tx.msg_hash) {
            tx.finalize_tx = Finalized::relayed(relayed_msg);
            enriched += 1;
        }
    }

    Enrichment::Applied { enriched }
}
