use blockscout_service_launcher::{
    database::DatabaseSettings,
    launcher::ConfigSettings,
    tracing::{JaegerSettings, TracingSettings},
};
use serde::{Deserialize, Serialize};

/// Settings of the query binary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub database: DatabaseSettings,
    #[serde(default)]
    pub tracing: TracingSettings,
    #[serde(default)]
    pub jaeger: JaegerSettings,
    #[serde(default)]
    pub history: HistorySettings,
}

impl ConfigSettings for Settings {
    const SERVICE_NAME: &'static str = "BRIDGE_HISTORY";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HistorySettings {
    /// Upper bound on distinct hashes accepted by a single
    /// transactions-by-hashes request.
    #[serde(default = "default_max_hashes_per_request")]
    pub max_hashes_per_request: usize,
}

fn default_max_hashes_per_request() -> usize {
    100
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_hashes_per_request: default_max_hashes_per_request(),
        }
    }
}
