pub mod enrich;
pub mod error;
pub mod history;
pub mod repository;
mod service;
pub mod settings;
mod store;
#[cfg(test)]
mod test_utils;
pub mod types;

pub use error::ServiceError;
pub use service::HistoryLogic;
pub use settings::{HistorySettings, Settings};
pub use store::{HistoryDatabase, HistoryStore};
pub use types::{
    claim_info::UserClaimInfo,
    tx_history::{ClaimableTxs, Finalized, TxHistoryInfo},
};
