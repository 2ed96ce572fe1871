//! Axis-level tick options read from an effective-config JSON value.

use crate::error::{Error, Result};
use crate::numeric::{TickRange, snap};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn json_f64(v: &Value) -> Option<f64> {
    v.as_f64()
        .or_else(|| v.as_i64().map(|n| n as f64))
        .or_else(|| v.as_u64().map(|n| n as f64))
}

/// `Ok(None)` when the key is missing or null, an error when it holds the wrong type.
fn config_f64(cfg: &Value, key: &str) -> Result<Option<f64>> {
    match cfg.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => json_f64(v)
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| Error::InvalidConfig {
                key: key.to_string(),
                expected: "a number",
            }),
    }
}

fn config_count(cfg: &Value, key: &str) -> Result<Option<u32>> {
    match cfg.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| Error::InvalidConfig {
                key: key.to_string(),
                expected: "a non-negative integer",
            }),
    }
}

fn config_bool(cfg: &Value, key: &str) -> Result<Option<bool>> {
    match cfg.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_bool().map(Some).ok_or_else(|| Error::InvalidConfig {
            key: key.to_string(),
            expected: "a boolean",
        }),
    }
}

/// Numeric axis tick options.
///
/// JSON keys are camelCase: `steps`, `majorTickSteps`, `minimum`, `maximum`,
/// `adjustMinimumByMajorUnit`, `adjustMaximumByMajorUnit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisTickConfig {
    /// Tick budget used when `major_tick_steps` is not set.
    pub steps: u32,
    pub major_tick_steps: Option<u32>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub adjust_minimum_by_major_unit: bool,
    pub adjust_maximum_by_major_unit: bool,
}

impl Default for AxisTickConfig {
    fn default() -> Self {
        Self {
            steps: 10,
            major_tick_steps: None,
            minimum: None,
            maximum: None,
            adjust_minimum_by_major_unit: false,
            adjust_maximum_by_major_unit: false,
        }
    }
}

impl AxisTickConfig {
    /// Reads the options out of an axis config object; missing keys keep their defaults.
    pub fn from_config(cfg: &Value) -> Result<Self> {
        if !cfg.is_object() {
            return Err(Error::InvalidConfig {
                key: "<root>".to_string(),
                expected: "an object",
            });
        }
        let defaults = Self::default();
        Ok(Self {
            steps: config_count(cfg, "steps")?.unwrap_or(defaults.steps),
            major_tick_steps: config_count(cfg, "majorTickSteps")?,
            minimum: config_f64(cfg, "minimum")?,
            maximum: config_f64(cfg, "maximum")?,
            adjust_minimum_by_major_unit: config_bool(cfg, "adjustMinimumByMajorUnit")?
                .unwrap_or(defaults.adjust_minimum_by_major_unit),
            adjust_maximum_by_major_unit: config_bool(cfg, "adjustMaximumByMajorUnit")?
                .unwrap_or(defaults.adjust_maximum_by_major_unit),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Value = serde_json::from_str(json)?;
        Self::from_config(&cfg)
    }

    /// Whether ticks snap to round numbers. Fully pinned axes (both ends plus an explicit
    /// major tick count) keep their exact ends instead.
    pub fn pretty_numbers(&self) -> bool {
        !(self.minimum.is_some()
            && self.maximum.is_some()
            && self.major_tick_steps.is_some_and(|n| n > 0))
    }

    /// Tick range for data spanning `[min, max]`.
    ///
    /// Pinned ends replace the data range and are kept exactly; the major-unit adjustments then
    /// widen them to whole steps. Ends given in reverse order are swapped.
    pub fn tick_range(&self, min: f64, max: f64) -> TickRange {
        let budget = self.major_tick_steps.map_or(self.steps, |n| n.saturating_add(1));
        // Each end remembers whether it was pinned so a reversed pair keeps its pins after ordering.
        let mut ends = [
            (self.minimum.unwrap_or(min), self.minimum.is_some()),
            (self.maximum.unwrap_or(max), self.maximum.is_some()),
        ];
        if ends[0].0 > ends[1].0 {
            ends.swap(0, 1);
        }
        let [(lo, lo_pinned), (hi, hi_pinned)] = ends;
        let mut out = snap(lo, hi, budget, self.pretty_numbers());

        let mut changed = false;
        if hi_pinned {
            out.to = hi;
            changed = true;
        }
        if lo_pinned {
            out.from = lo;
            changed = true;
        }
        if out.step > 0.0 {
            if self.adjust_maximum_by_major_unit {
                out.to = (out.to / out.step).ceil() * out.step;
                changed = true;
            }
            if self.adjust_minimum_by_major_unit {
                out.from = (out.from / out.step).floor() * out.step;
                changed = true;
            }
            if changed {
                out.steps = ((out.to - out.from) / out.step).ceil().max(0.0) as u32;
            }
        }
        tracing::trace!(?out, changed, "axis tick range");
        out
    }
}
