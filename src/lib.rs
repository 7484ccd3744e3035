//! # chanstats: Streaming Channel Statistics
//!
//! A signal-conditioning stage for blockwise multichannel sample pipelines:
//! computes a streaming exponentially-weighted moving mean or standard
//! deviation per channel and rewrites each block's samples in place with
//! the running statistic.
//!
//! ## Architecture
//!
//! - **Engine**: [`StatsEngine`] holds the configuration and per-channel
//!   running state, and processes one block per call on the host's data
//!   thread
//! - **Boundary**: [`params`] decodes host parameter notifications;
//!   [`link`] carries control-thread commands over a crossbeam channel,
//!   drained between blocks
//! - **Buffers**: [`BlockBuffer`] is a borrowed channel-major view over the
//!   host's sample storage — the engine never owns or retains it
//!
//! ## Example
//!
//! ```
//! use chanstats::{BlockBuffer, StatsEngine, Statistic, StreamId, StreamInfo};
//!
//! let mut engine = StatsEngine::new();
//! engine.set_statistic(Statistic::Mean);
//! engine.set_time_constant_ms(1000.0);
//!
//! // Host reports 2 input channels, and we analyze channel 0 of stream 0.
//! engine.update_settings(2);
//! engine.set_selected_channels(StreamId(0), vec![0]);
//!
//! // One block arrives: 2 channels x 3 samples, channel-major.
//! let mut samples = vec![10.0f32, 10.0, 10.0, 1.0, 2.0, 3.0];
//! let mut buffer = BlockBuffer::new(&mut samples, 2, 3)?;
//! let streams = [StreamInfo::new(StreamId(0), 1000.0, 3)];
//! engine.process_block(&streams, &mut buffer);
//!
//! // Constant input converges to itself; channel 1 passes through.
//! assert_eq!(samples, vec![10.0, 10.0, 10.0, 1.0, 2.0, 3.0]);
//! # Ok::<(), chanstats::ChanStatsError>(())
//! ```

pub mod block;
pub mod config;
pub mod engine;
pub mod error;
pub mod link;
pub mod params;
pub mod stream;
pub mod types;

// Re-export commonly used types
pub use block::BlockBuffer;
pub use config::EngineConfig;
pub use engine::state::ChannelState;
pub use engine::StatsEngine;
pub use error::{ChanStatsError, Result};
pub use link::{control_link, ControlCommand};
pub use params::{ParamChange, ParamUpdate, ParamValue};
pub use stream::StreamInfo;
pub use types::{Statistic, StreamId};
