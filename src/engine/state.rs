//! Per-channel running state and its lifecycle.
//!
//! One [`ChannelState`] exists per input channel known to the engine,
//! indexed by flattened channel index. The bank is resized only between
//! blocks, by the settings refresh — never during block processing.

/// Running statistics for one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelState {
    pub mean: f64,
    pub variance: f64,
    /// True until the channel's first sample is observed. The first sample
    /// seeds the mean directly instead of decaying from zero.
    pub cold_start: bool,
}

impl Default for ChannelState {
    fn default() -> Self {
        Self {
            mean: 0.0,
            variance: 0.0,
            cold_start: true,
        }
    }
}

/// Owned, indexable bank of per-channel state.
#[derive(Debug, Default)]
pub struct ChannelBank {
    channels: Vec<ChannelState>,
}

impl ChannelBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of channels currently tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&ChannelState> {
        self.channels.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut ChannelState> {
        self.channels.get_mut(index)
    }

    /// Resize to the host-reported channel count. Growth appends cold
    /// entries; shrinkage truncates from the tail (removed channels are
    /// assumed to be the highest-indexed ones). Existing entries are never
    /// disturbed. Returns the signed delta applied.
    pub fn sync_to(&mut self, num_inputs: usize) -> isize {
        let delta = num_inputs as isize - self.channels.len() as isize;
        if delta != 0 {
            self.channels.resize(num_inputs, ChannelState::default());
            tracing::debug!(
                num_inputs,
                delta,
                "channel state bank resized"
            );
        }
        delta
    }
}
