//! Engine configuration: statistic choice, smoothing window, channel selection.
//!
//! The configuration is mutated by the host boundary (parameter updates or
//! control commands) and only read during block processing. The time
//! constant is clamped here, at the boundary — the hot loop assumes a valid
//! value and derives a finite decay coefficient from it.

use crate::types::{Statistic, StreamId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Smallest allowed smoothing window, in milliseconds.
pub const TIME_CONSTANT_MIN_MS: f64 = 10.0;
/// Largest allowed smoothing window, in milliseconds.
pub const TIME_CONSTANT_MAX_MS: f64 = 5000.0;
/// Default smoothing window, in milliseconds.
pub const TIME_CONSTANT_DEFAULT_MS: f64 = 1000.0;

/// Current engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which statistic is currently being calculated
    pub statistic: Statistic,

    /// Smoothing time constant in milliseconds, always in
    /// [`TIME_CONSTANT_MIN_MS`, `TIME_CONSTANT_MAX_MS`]
    time_constant_ms: f64,

    /// Selected channels per stream, as flattened channel indices
    selected: BTreeMap<StreamId, Vec<usize>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            statistic: Statistic::Mean,
            time_constant_ms: TIME_CONSTANT_DEFAULT_MS,
            selected: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active statistic. Running per-channel state is untouched.
    pub fn set_statistic(&mut self, statistic: Statistic) {
        self.statistic = statistic;
    }

    /// Set the smoothing window, clamped to the allowed range. Takes effect
    /// on the next block; no retroactive recomputation.
    pub fn set_time_constant_ms(&mut self, value: f64) {
        self.time_constant_ms = value.clamp(TIME_CONSTANT_MIN_MS, TIME_CONSTANT_MAX_MS);
    }

    pub fn time_constant_ms(&self) -> f64 {
        self.time_constant_ms
    }

    /// Replace the selected channel set for one stream.
    pub fn set_selected_channels(&mut self, stream: StreamId, channels: Vec<usize>) {
        if channels.is_empty() {
            self.selected.remove(&stream);
        } else {
            self.selected.insert(stream, channels);
        }
    }

    /// Selected channels for a stream; empty when none are selected.
    pub fn selected_channels(&self, stream: StreamId) -> &[usize] {
        self.selected.get(&stream).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.statistic, Statistic::Mean);
        assert_eq!(config.time_constant_ms(), TIME_CONSTANT_DEFAULT_MS);
        assert!(config.selected_channels(StreamId(0)).is_empty());
    }

    #[test]
    fn test_time_constant_clamped() {
        let mut config = EngineConfig::new();
        config.set_time_constant_ms(3.0);
        assert_eq!(config.time_constant_ms(), TIME_CONSTANT_MIN_MS);
        config.set_time_constant_ms(90_000.0);
        assert_eq!(config.time_constant_ms(), TIME_CONSTANT_MAX_MS);
        config.set_time_constant_ms(250.0);
        assert_eq!(config.time_constant_ms(), 250.0);
    }

    #[test]
    fn test_channel_selection_replaced_per_stream() {
        let mut config = EngineConfig::new();
        config.set_selected_channels(StreamId(0), vec![0, 2, 5]);
        config.set_selected_channels(StreamId(1), vec![7]);
        assert_eq!(config.selected_channels(StreamId(0)), &[0, 2, 5]);
        assert_eq!(config.selected_channels(StreamId(1)), &[7]);

        config.set_selected_channels(StreamId(0), vec![1]);
        assert_eq!(config.selected_channels(StreamId(0)), &[1]);

        config.set_selected_channels(StreamId(0), Vec::new());
        assert!(config.selected_channels(StreamId(0)).is_empty());
    }
}
