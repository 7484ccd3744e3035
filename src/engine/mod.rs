//! The streaming statistics engine: configuration sync + block dispatch.
//!
//! [`StatsEngine`] owns the configuration and the per-channel running
//! state. The host calls [`StatsEngine::update_settings`] whenever upstream
//! topology is finalized, and [`StatsEngine::process_block`] once per
//! arriving block, on the same thread, with no overlap between blocks.
//! Configuration changes from a control thread travel over a
//! [`crate::link::ControlLink`] and are drained between blocks.

pub mod ewma;
pub mod state;

use crate::block::BlockBuffer;
use crate::config::EngineConfig;
use crate::link::ControlCommand;
use crate::params::{ParamChange, ParamUpdate};
use crate::stream::StreamInfo;
use crate::types::{Statistic, StreamId};
use crossbeam_channel::Receiver;
use state::{ChannelBank, ChannelState};

/// Streaming channel statistics engine.
pub struct StatsEngine {
    config: EngineConfig,
    channels: ChannelBank,
}

impl StatsEngine {
    /// Create an engine with default configuration (Mean, 1000 ms window)
    /// and no tracked channels.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            channels: ChannelBank::new(),
        }
    }

    /// Current configuration (read-only).
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of channels the engine currently tracks state for.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Running state of one channel, if tracked.
    pub fn channel_state(&self, index: usize) -> Option<&ChannelState> {
        self.channels.get(index)
    }

    // ── Configuration manager ──

    /// Select the emitted statistic. Running state is untouched — the
    /// recursion is identical for both statistics.
    pub fn set_statistic(&mut self, statistic: Statistic) {
        self.config.set_statistic(statistic);
        tracing::debug!(statistic = statistic.display_name(), "statistic changed");
    }

    /// Set the smoothing window (clamped). Effective from the next block.
    pub fn set_time_constant_ms(&mut self, value: f64) {
        self.config.set_time_constant_ms(value);
        tracing::debug!(
            window_ms = self.config.time_constant_ms(),
            "time constant changed"
        );
    }

    /// Replace the selected channel set for one stream.
    pub fn set_selected_channels(&mut self, stream: StreamId, channels: Vec<usize>) {
        self.config.set_selected_channels(stream, channels);
    }

    /// Apply a decoded host parameter notification.
    pub fn apply_param(&mut self, update: &ParamUpdate) -> crate::Result<()> {
        match ParamChange::decode(update)? {
            ParamChange::Statistic(stat) => self.set_statistic(stat),
            ParamChange::WindowMs(ms) => self.set_time_constant_ms(ms),
        }
        Ok(())
    }

    /// Settings-refresh entry point: sync per-channel state to the
    /// host-reported input channel count. Must run before the next block
    /// after any topology change. Growth appends cold channels; shrinkage
    /// drops state from the tail.
    pub fn update_settings(&mut self, num_inputs: usize) {
        let delta = self.channels.sync_to(num_inputs);
        if delta != 0 {
            tracing::info!(num_inputs, delta, "topology synced");
        }
    }

    // ── Control-thread boundary ──

    /// Drain queued control commands. Called by the processing thread
    /// between blocks, so every command is either fully visible or not yet
    /// visible at the start of a block. Returns the number applied.
    pub fn drain_control(&mut self, rx: &Receiver<ControlCommand>) -> usize {
        let mut applied = 0;
        while let Ok(cmd) = rx.try_recv() {
            match cmd {
                ControlCommand::SetStatistic(stat) => self.set_statistic(stat),
                ControlCommand::SetTimeConstantMs(ms) => self.set_time_constant_ms(ms),
                ControlCommand::SetSelectedChannels { stream, channels } => {
                    self.set_selected_channels(stream, channels)
                }
                ControlCommand::TopologyChanged { num_inputs } => {
                    self.update_settings(num_inputs)
                }
                ControlCommand::Param(update) => {
                    if let Err(e) = self.apply_param(&update) {
                        tracing::warn!(name = %update.name, error = %e, "parameter rejected");
                        continue;
                    }
                }
            }
            applied += 1;
        }
        applied
    }

    // ── Block dispatch loop ──

    /// Process one block: for each enabled stream, for each selected
    /// channel, run the streaming update over that stream's samples in
    /// place. Unselected channels and disabled streams are left untouched.
    ///
    /// Precondition: `update_settings` has run since the last topology
    /// change, so every selected channel index has a state entry.
    pub fn process_block(&mut self, streams: &[StreamInfo], buffer: &mut BlockBuffer) {
        let Self { config, channels } = self;

        for stream in streams {
            if !stream.enabled {
                continue;
            }

            let n = stream.samples_per_block;
            let alpha = ewma::decay_coefficient(config.time_constant_ms(), stream.sample_rate_hz);

            for &chan in config.selected_channels(stream.id) {
                debug_assert!(
                    chan < channels.len(),
                    "channel {chan} selected but only {} states tracked; \
                     settings refresh must precede processing after a topology change",
                    channels.len()
                );
                let Some(state) = channels.get_mut(chan) else {
                    continue;
                };
                ewma::process_channel(
                    state,
                    config.statistic,
                    alpha,
                    &mut buffer.channel_mut(chan)[..n],
                );
            }
        }
    }
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new()
    }
}
