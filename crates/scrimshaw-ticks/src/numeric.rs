//! "Nice" numeric tick selection.

use serde::{Deserialize, Serialize};

/// Leading two digits of a step and how strongly each is preferred: `(digits, weight)`.
const MANTISSAS: [(f64, f64); 6] = [
    (0.0, 15.0),
    (10.0, 1.0),
    (20.0, 4.0),
    (25.0, 2.0),
    (50.0, 9.0),
    (100.0, 15.0),
];

/// Evenly spaced ticks from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRange {
    pub from: f64,
    pub to: f64,
    pub step: f64,
    /// Number of intervals between `from` and `to`.
    pub steps: u32,
    /// Order of magnitude the step was picked at (`floor(log10(raw step)) + 1`).
    pub power: i32,
}

impl TickRange {
    fn empty(at: f64) -> Self {
        Self {
            from: at,
            to: at,
            step: 0.0,
            steps: 0,
            power: 0,
        }
    }

    /// Tick values, `from` first and `to` last. Empty when the range has no steps.
    pub fn ticks(&self) -> Vec<f64> {
        if self.steps == 0 {
            return Vec::new();
        }
        let mut out: Vec<f64> = (0..self.steps)
            .map(|i| round_decimals(self.from + f64::from(i) * self.step))
            .collect();
        out.push(self.to);
        out
    }
}

/// Rounds to 10 decimals the way a decimal formatter would, hiding accumulated float noise.
/// A result of negative zero comes back as `0.0`.
fn round_decimals(v: f64) -> f64 {
    format!("{v:.10}").parse::<f64>().map_or(v, |r| r + 0.0)
}

/// `v * 10^exp`; negative exponents divide, which keeps steps like `0.2` or `5e-10` correctly
/// rounded.
fn scale10(v: f64, exp: i32) -> f64 {
    if exp >= 0 {
        v * 10f64.powi(exp)
    } else {
        v / 10f64.powi(-exp)
    }
}

/// Picks tick ends and a step so that at most about `max_steps` intervals cover `[min, max]`.
///
/// With `pretty_numbers` the step is a round number (leading digits 1, 2, 2.5 or 5) and a range
/// that straddles zero always has a tick at 0. Without it, `from` is floored to the step's order
/// of magnitude and exactly `max_steps` equal intervals run up to `max`.
pub fn snap(min: f64, max: f64, max_steps: u32, pretty_numbers: bool) -> TickRange {
    if !min.is_finite() || !max.is_finite() {
        tracing::warn!(min, max, "non-finite tick range");
        return TickRange::empty(min);
    }
    let (min, mut max) = if min > max { (max, min) } else { (min, max) };
    let mut max_steps = max_steps.max(1);
    if min == max {
        max = min + 1.0;
        max_steps = 1;
    }

    let raw_step = (max - min) / f64::from(max_steps);
    let power = raw_step.log10().floor() as i32 + 1;
    let magnitude = scale10(1.0, power);
    let digits = scale10(raw_step % magnitude, 2 - power).round();

    let mut floor = (min / magnitude).floor() * magnitude;
    if min == floor && floor > 0.0 {
        floor = ((min - magnitude / 10.0) / magnitude).floor() * magnitude;
    }
    if floor > min {
        floor -= magnitude;
    }

    if !pretty_numbers {
        let step = (max - floor) / f64::from(max_steps);
        tracing::trace!(from = floor, to = max, step, "plain ticks");
        return TickRange {
            from: floor,
            to: max,
            step,
            steps: max_steps,
            power,
        };
    }

    let mut best = (MANTISSAS[0].0, f64::INFINITY);
    for (value, weight) in MANTISSAS {
        let score = if value < digits {
            1e6
        } else {
            (value - digits) / weight
        };
        if score < best.1 {
            best = (value, score);
        }
    }
    let step = (raw_step / magnitude).floor() * magnitude + scale10(best.0, power - 2);
    if step <= 0.0 || !step.is_finite() {
        tracing::warn!(min, max, step, "degenerate tick step");
        return TickRange::empty(min);
    }

    let (from, to, steps) = if min < 0.0 && max >= 0.0 {
        // Build outward from 0 so that 0 is always a tick.
        let down = steps_to_reach(0.0, -min, step);
        let up = steps_to_reach(0.0, max, step);
        (-f64::from(down) * step, f64::from(up) * step, down + up)
    } else {
        let n = steps_to_reach(floor, max, step);
        (floor, floor + f64::from(n) * step, n)
    };

    let range = TickRange {
        from: snap_end(from, |v| v <= min),
        to: snap_end(to, |v| v >= max),
        step,
        steps,
        power,
    };
    tracing::trace!(?range, "pretty ticks");
    range
}

/// Whole steps needed to get from `start` to at least `target`.
fn steps_to_reach(start: f64, target: f64, step: f64) -> u32 {
    let mut n = ((target - start) / step).ceil().max(0.0);
    while start + n * step < target {
        n += 1.0;
    }
    n as u32
}

/// Rounds an end to 10 decimals unless that would pull it inside the data.
fn snap_end(v: f64, still_covers: impl Fn(f64) -> bool) -> f64 {
    let rounded = round_decimals(v);
    if still_covers(rounded) { rounded } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mantissa_prefers_ten_then_twenty_five() {
        // digits 88 -> 100; digits 23 -> 25; digits 19 -> 20
        assert_eq!(snap(3.0, 47.0, 5, true).step, 10.0);
        assert_eq!(snap(10.0, 100.0, 4, true).step, 25.0);
        assert!((snap(0.013, 0.97, 5, true).step - 0.2).abs() < 1e-12);
    }

    #[test]
    fn steps_to_reach_never_falls_short() {
        assert_eq!(steps_to_reach(0.0, 1.0, 0.1), 10);
        assert_eq!(steps_to_reach(0.0, 0.0, 0.1), 0);
        assert_eq!(steps_to_reach(-10.0, 23.0, 10.0), 4);
    }
}
