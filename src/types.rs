//! Core identifier and statistic types shared across the crate.

use crate::error::{ChanStatsError, Result};
use serde::{Deserialize, Serialize};

/// Identifies one data stream within the host's processing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StreamId(pub u16);

impl std::fmt::Display for StreamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stream{}", self.0)
    }
}

/// Which running statistic the engine emits per sample.
///
/// The underlying mean/variance recursion is identical for both; only the
/// value written back differs (mean vs. sqrt of variance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Statistic {
    /// Exponentially-weighted moving average
    #[default]
    Mean,
    /// Exponentially-weighted moving standard deviation
    StdDev,
}

impl Statistic {
    /// Decode the host's integer parameter code (0 = Mean, 1 = StdDev).
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Statistic::Mean),
            1 => Ok(Statistic::StdDev),
            other => Err(ChanStatsError::Parameter(format!(
                "unknown statistic code {other}"
            ))),
        }
    }

    /// The host-facing integer code for this statistic.
    pub fn code(&self) -> i64 {
        match self {
            Statistic::Mean => 0,
            Statistic::StdDev => 1,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Statistic::Mean => "MEAN",
            Statistic::StdDev => "STDDEV",
        }
    }

    /// Get all statistic choices, in host code order
    pub fn all() -> &'static [Statistic] {
        &[Statistic::Mean, Statistic::StdDev]
    }
}
