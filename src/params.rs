//! Host parameter-change boundary.
//!
//! The host delivers untyped `{name, value}` notifications whenever a
//! parameter widget changes. This module decodes them once, at the
//! boundary, into typed [`ParamChange`]s: the statistic code becomes a
//! [`Statistic`] and the window is clamped to its allowed range. The engine
//! itself never sees a raw code or an out-of-range window.

use crate::config::{TIME_CONSTANT_MAX_MS, TIME_CONSTANT_MIN_MS};
use crate::error::{ChanStatsError, Result};
use crate::types::Statistic;
use serde::{Deserialize, Serialize};

/// Untyped parameter value as carried by the host notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl ParamValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// One parameter-change notification from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamUpdate {
    pub name: String,
    pub value: ParamValue,
}

impl ParamUpdate {
    pub fn new(name: impl Into<String>, value: ParamValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A decoded, validated parameter change ready to apply to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamChange {
    Statistic(Statistic),
    /// Window already clamped to [`TIME_CONSTANT_MIN_MS`, `TIME_CONSTANT_MAX_MS`].
    WindowMs(f64),
}

impl ParamChange {
    /// Decode a host notification. Unknown names and statistic codes are
    /// rejected; the window value is clamped rather than rejected, matching
    /// the host widget's bounded range.
    pub fn decode(update: &ParamUpdate) -> Result<Self> {
        match update.name.as_str() {
            "stat" => {
                let code = update.value.as_int().ok_or_else(|| {
                    ChanStatsError::Parameter(format!(
                        "'stat' expects an integer code, got {:?}",
                        update.value
                    ))
                })?;
                Ok(ParamChange::Statistic(Statistic::from_code(code)?))
            }
            "window_ms" => {
                let ms = update.value.as_float().ok_or_else(|| {
                    ChanStatsError::Parameter(format!(
                        "'window_ms' expects a numeric value, got {:?}",
                        update.value
                    ))
                })?;
                if !ms.is_finite() {
                    return Err(ChanStatsError::Parameter(
                        "'window_ms' must be finite".to_string(),
                    ));
                }
                Ok(ParamChange::WindowMs(
                    ms.clamp(TIME_CONSTANT_MIN_MS, TIME_CONSTANT_MAX_MS),
                ))
            }
            other => Err(ChanStatsError::Parameter(format!(
                "unknown parameter '{other}'"
            ))),
        }
    }
}
