//! Exponentially-weighted streaming mean/variance update.
//!
//! Single-pass, O(1)-memory recursion: an order-1 IIR filter on the mean
//! and a multiplicatively-weighted second-moment recursion for the
//! variance. Accumulation is f64 regardless of sample storage precision;
//! values are cast to f32 only at write-back.

use super::state::ChannelState;
use crate::types::Statistic;

/// Per-sample weight of the newest sample, derived from the smoothing time
/// constant and the stream's sample rate.
///
/// `alpha = -expm1(-1 / (time_constant_ms * samples_per_ms))`, strictly in
/// (0, 1) for any positive time constant and sample rate. Recomputed every
/// block so a time-constant or sample-rate change lands within one block.
#[inline]
pub fn decay_coefficient(time_constant_ms: f64, sample_rate_hz: f64) -> f64 {
    let time_const_samples = time_constant_ms * sample_rate_hz / 1000.0;
    -(-1.0 / time_const_samples).exp_m1()
}

/// Run the recursion over one channel's samples, overwriting each sample
/// with the running statistic and updating `state` for the next block.
///
/// On a cold channel the first sample seeds the mean (variance 0) and is
/// emitted as-is under Mean, as 0 under StdDev.
pub fn process_channel(
    state: &mut ChannelState,
    statistic: Statistic,
    alpha: f64,
    samples: &mut [f32],
) {
    let mut mean;
    let mut var;
    let mut start = 0;

    if state.cold_start {
        let Some(first) = samples.first_mut() else {
            return;
        };
        mean = f64::from(*first);
        var = 0.0;
        *first = emit(statistic, mean, var);
        state.cold_start = false;
        start = 1;
    } else {
        mean = state.mean;
        var = state.variance;
    }

    for sample in &mut samples[start..] {
        let delta = f64::from(*sample) - mean;
        mean += alpha * delta;
        var = (1.0 - alpha) * (var + alpha * delta * delta);
        *sample = emit(statistic, mean, var);
    }

    state.mean = mean;
    state.variance = var;
    debug_assert!(state.mean.is_finite());
    debug_assert!(state.variance >= 0.0);
}

#[inline]
fn emit(statistic: Statistic, mean: f64, var: f64) -> f32 {
    match statistic {
        Statistic::Mean => mean as f32,
        Statistic::StdDev => var.sqrt() as f32,
    }
}
