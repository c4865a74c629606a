/// Source of the random 12-digit EAN-13 payload, in `[10^11, 10^12)`.
/// A port so tests can script the draws.
pub trait BarcodePayloadSource: Send + Sync {
    fn next_payload(&self) -> u64;
}
