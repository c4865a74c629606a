use crate::application::ports::random::BarcodePayloadSource;
use rand::Rng;

/// Uniform draw over the full 12-digit range `[10^11, 10^12)`.
#[derive(Default, Clone)]
pub struct ThreadRngBarcodeSource;

impl BarcodePayloadSource for ThreadRngBarcodeSource {
    fn next_payload(&self) -> u64 {
        rand::thread_rng().gen_range(100_000_000_000..1_000_000_000_000)
    }
}
