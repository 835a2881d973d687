pub mod claim_info;
pub mod tx_history;

/// Combines the layer 1 and layer 2 transaction hashes of a message into
/// a single value. The layer 1 segment always comes first.
pub fn concat_layer_hashes(layer1_hash: &str, layer2_hash: &str) -> String {
    format!("{layer1_hash}{layer2_hash}")
}
