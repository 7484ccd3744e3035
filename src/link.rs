//! Thread boundary between the control side (host UI / parameter widgets)
//! and the block-processing side.
//!
//! Commands are queued on a bounded channel and drained by the processing
//! thread between blocks ([`crate::StatsEngine::drain_control`]), so a
//! configuration change is either fully visible or not yet visible at the
//! start of a given block — never torn mid-block.

use crate::params::ParamUpdate;
use crate::types::{Statistic, StreamId};
use crossbeam_channel::{bounded, Receiver, Sender};

/// Commands sent from the control thread to the engine.
#[derive(Debug, Clone)]
pub enum ControlCommand {
    /// Switch the emitted statistic.
    SetStatistic(Statistic),
    /// Set the smoothing window in milliseconds (clamped by the engine).
    SetTimeConstantMs(f64),
    /// Replace the selected channels for one stream (flattened indices).
    SetSelectedChannels {
        stream: StreamId,
        channels: Vec<usize>,
    },
    /// Upstream channel count changed; the engine must resync its state
    /// bank before the next block.
    TopologyChanged { num_inputs: usize },
    /// Raw host parameter notification, decoded by the engine boundary.
    Param(ParamUpdate),
}

/// Create a bounded control link. The sender side goes to the control
/// thread; the receiver stays with the processing thread.
pub fn control_link(capacity: usize) -> (Sender<ControlCommand>, Receiver<ControlCommand>) {
    bounded(capacity)
}
