//! Mutable channel-major view over one block of samples.
//!
//! `BlockBuffer` borrows the host's sample storage for the duration of a
//! single processing call. The engine mutates samples in place through it
//! and never retains it across calls. Layout is channel-major: channel `c`
//! occupies samples `[c * capacity, (c + 1) * capacity)`.

use crate::error::{ChanStatsError, Result};

/// Borrowed view of one block of multichannel samples.
pub struct BlockBuffer<'a> {
    data: &'a mut [f32],
    num_channels: usize,
    /// Samples available per channel row. Streams may process fewer
    /// samples than this in a given block, never more.
    capacity: usize,
}

impl<'a> BlockBuffer<'a> {
    /// Wrap a channel-major sample slice. Fails if the slice length does
    /// not match `num_channels * capacity`.
    pub fn new(data: &'a mut [f32], num_channels: usize, capacity: usize) -> Result<Self> {
        let expected = num_channels * capacity;
        if data.len() != expected {
            return Err(ChanStatsError::BlockGeometry {
                channels: num_channels,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            num_channels,
            capacity,
        })
    }

    /// Number of channel rows in this block.
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    /// Samples per channel row.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read one sample.
    #[inline]
    pub fn sample(&self, channel: usize, index: usize) -> f32 {
        self.data[channel * self.capacity + index]
    }

    /// Write one sample.
    #[inline]
    pub fn set_sample(&mut self, channel: usize, index: usize, value: f32) {
        self.data[channel * self.capacity + index] = value;
    }

    /// Borrow one channel's row.
    #[inline]
    pub fn channel(&self, channel: usize) -> &[f32] {
        let start = channel * self.capacity;
        &self.data[start..start + self.capacity]
    }

    /// Mutably borrow one channel's row.
    #[inline]
    pub fn channel_mut(&mut self, channel: usize) -> &mut [f32] {
        let start = channel * self.capacity;
        &mut self.data[start..start + self.capacity]
    }
}

impl std::fmt::Debug for BlockBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockBuffer")
            .field("num_channels", &self.num_channels)
            .field("capacity", &self.capacity)
            .finish()
    }
}
