//! Host-provided stream descriptors.

use crate::types::StreamId;
use serde::{Deserialize, Serialize};

/// Describes one upstream data stream for a single block-processing call.
///
/// Produced by the host per block; read-only to the engine. The sample rate
/// and per-block sample count can change between calls (the decay
/// coefficient is recomputed from them every block).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamInfo {
    /// Stream identifier within the host graph.
    pub id: StreamId,
    /// Sample rate in Hz. Always positive for an enabled stream.
    pub sample_rate_hz: f64,
    /// Number of valid samples in this block, per channel.
    pub samples_per_block: usize,
    /// Disabled streams are skipped entirely (their channels pass through).
    pub enabled: bool,
}

impl StreamInfo {
    pub fn new(id: StreamId, sample_rate_hz: f64, samples_per_block: usize) -> Self {
        Self {
            id,
            sample_rate_hz,
            samples_per_block,
            enabled: true,
        }
    }

    /// Builder-style toggle for the enabled flag.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
