//! Best-effort enrichment of transaction histories with facts that arrive
//! independently of the message itself.
//!
//! Enrichers never fail. A lookup error or a missing row leaves the
//! corresponding field untouched, and the returned [`Enrichment`] tells why.

mod claim_info;
mod finalization;

pub use claim_info::update_l2_tx_claim_info;
pub use finalization::update_cross_tx_hashes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrichment {
    /// Lookups succeeded; `enriched` records got the field populated.
    Applied { enriched: usize },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No record qualifies for this enrichment.
    NothingToEnrich,
    /// The store returned an error.
    LookupFailed,
    /// The store has no rows for any of the records.
    NotFound,
}

impl Enrichment {
    pub fn enriched(&self) -> usize {
        match self {
            Enrichment::Applied { enriched } => *enriched,
            Enrichment::Skipped(_) => 0,
        }
    }
}
