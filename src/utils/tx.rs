/// Fabricated placeholder transaction hash. Nothing is signed or broadcast;
/// each action uses a distinct marker character so the fake hashes are
/// telling in logs and demos.
pub fn placeholder_tx_hash(marker: char) -> String {
    format!("0x{}", marker.to_string().repeat(64))
}
