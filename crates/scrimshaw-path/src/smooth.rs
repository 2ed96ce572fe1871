//! Polyline smoothing by anchor extrapolation.

use crate::command::{CubicSegment, CurvePath, CurveSegment};
use crate::config::{config_value, json_f64};
use crate::curve::to_curves;
use crate::geom::{Point, point};
use crate::parse::PathSource;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

pub const DEFAULT_DIVISOR: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothConfig {
    /// Horizontal neighbor distance is divided by this to get each control line's length.
    pub divisor: f64,
}

impl Default for SmoothConfig {
    fn default() -> Self {
        Self {
            divisor: DEFAULT_DIVISOR,
        }
    }
}

impl SmoothConfig {
    /// Reads a series-style `smooth` entry: `true` or a positive number enables smoothing, the
    /// number being the divisor. Anything else means "draw straight segments" (`None`).
    pub fn from_config(cfg: &serde_json::Value) -> Option<Self> {
        let v = config_value(cfg, &["smooth"])?;
        if let Some(enabled) = v.as_bool() {
            return enabled.then(Self::default);
        }
        let divisor = json_f64(v)?;
        (divisor.is_finite() && divisor > 0.0).then_some(Self { divisor })
    }

    fn effective_divisor(&self) -> f64 {
        if self.divisor.is_finite() && self.divisor > 0.0 {
            self.divisor
        } else {
            DEFAULT_DIVISOR
        }
    }
}

/// Control points either side of one polyline vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    /// Incoming control point (towards `prev`).
    pub ctrl1: Point,
    /// Outgoing control point (towards `next`).
    pub ctrl2: Point,
}

/// Derives the control points around `cur` from its neighbors.
///
/// Vertical turnarounds get horizontal handles, and no handle reaches past its neighbor's y.
pub fn anchors(prev: Point, cur: Point, next: Point, divisor: f64) -> Anchors {
    let divisor = SmoothConfig { divisor }.effective_divisor();
    let len1 = (cur.x - prev.x) / divisor;
    let len2 = (next.x - cur.x) / divisor;

    let (mut angle1, mut angle2);
    if (cur.y >= prev.y && cur.y >= next.y) || (cur.y <= prev.y && cur.y <= next.y) {
        angle1 = FRAC_PI_2;
        angle2 = FRAC_PI_2;
    } else {
        angle1 = ((cur.x - prev.x) / (cur.y - prev.y).abs()).atan();
        if prev.y < cur.y {
            angle1 = PI - angle1;
        }
        angle2 = ((next.x - cur.x) / (cur.y - next.y).abs()).atan();
        if next.y < cur.y {
            angle2 = PI - angle2;
        }
    }

    // Turn both handles by the same amount so they end up on one line through `cur`.
    let mut alpha = FRAC_PI_2 - ((angle1 + angle2) % (PI * 2.0)) / 2.0;
    if alpha > FRAC_PI_2 {
        alpha -= PI;
    }
    angle1 += alpha;
    angle2 += alpha;

    let mut c1 = point(cur.x - len1 * angle1.sin(), cur.y + len1 * angle1.cos());
    let mut c2 = point(cur.x + len2 * angle2.sin(), cur.y + len2 * angle2.cos());

    if (cur.y > prev.y && c1.y < prev.y) || (cur.y < prev.y && c1.y > prev.y) {
        c1.x += (prev.y - c1.y).abs() * (c1.x - cur.x) / (c1.y - cur.y);
        c1.y = prev.y;
    }
    if (cur.y > next.y && c2.y < next.y) || (cur.y < next.y && c2.y > next.y) {
        c2.x -= (next.y - c2.y).abs() * (c2.x - cur.x) / (c2.y - cur.y);
        c2.y = next.y;
    }

    Anchors {
        ctrl1: c1,
        ctrl2: c2,
    }
}

fn end_of(seg: &CurveSegment) -> Option<Point> {
    match seg {
        CurveSegment::MoveTo(p) => Some(*p),
        CurveSegment::CurveTo(c) => Some(c.to),
        CurveSegment::ClosePath => None,
    }
}

/// Redraws the vertices of `input` as a smooth cubic curve.
///
/// Only segment endpoints matter. A subpath that ends on its own start point is smoothed across
/// the seam.
pub fn smooth<'a>(input: impl Into<PathSource<'a>>, divisor: f64) -> CurvePath {
    let divisor = SmoothConfig { divisor }.effective_divisor();
    let curves = to_curves(input);
    let segs = &curves.segments;
    let Some(first) = segs.first().and_then(end_of) else {
        return CurvePath::default();
    };

    let mut out = vec![CurveSegment::MoveTo(first)];
    let mut handle = first;
    let mut origin = first;
    // Index in `out` of the current subpath's first cubic.
    let mut subpath_start = out.len();

    for i in 1..segs.len() {
        let Some(cur) = end_of(&segs[i]) else {
            continue;
        };
        if segs[i].is_move() {
            origin = cur;
            handle = cur;
            out.push(CurveSegment::MoveTo(cur));
            subpath_start = out.len();
            continue;
        }
        let prev = end_of(&segs[i - 1]).unwrap_or(origin);
        let next = segs.get(i + 1).filter(|s| !s.is_move()).and_then(end_of);

        let first_smoothed = match out.get(subpath_start) {
            Some(CurveSegment::CurveTo(c)) => Some(c.to),
            _ => None,
        };
        let closes = cur == origin && next.is_none();
        let ctrl = match (closes, first_smoothed, next) {
            (true, Some(after_seam), _) => {
                let a = anchors(prev, origin, after_seam, divisor);
                if let Some(CurveSegment::CurveTo(c)) = out.get_mut(subpath_start) {
                    c.ctrl1 = a.ctrl2;
                }
                a
            }
            (_, _, Some(next)) => anchors(prev, cur, next, divisor),
            _ => Anchors {
                ctrl1: cur,
                ctrl2: cur,
            },
        };
        out.push(CurveSegment::CurveTo(CubicSegment::new(handle, ctrl.ctrl1, cur)));
        handle = ctrl.ctrl2;
    }
    CurvePath::new(out)
}
