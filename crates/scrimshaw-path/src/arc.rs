//! Elliptical arc to cubic Bezier approximation (endpoint parameterization, SVG 1.1 F.6.5).

use crate::command::{CubicSegment, EllipticArc};
use crate::geom::{Point, point, rotate};
use std::f64::consts::PI;

/// Widest sub-arc a single cubic is asked to cover.
const MAX_SPAN: f64 = PI * 120.0 / 180.0;

/// Approximates the arc from `from` to `arc.to` with cubics, at most 120 degrees each.
///
/// Zero radii or coincident endpoints fall back to a single straight cubic.
pub fn arc_to_curves(from: Point, arc: &EllipticArc) -> Vec<CubicSegment> {
    let (mut rx, mut ry) = (arc.rx.abs(), arc.ry.abs());
    let degenerate = rx == 0.0
        || ry == 0.0
        || !rx.is_finite()
        || !ry.is_finite()
        || (from.x == arc.to.x && from.y == arc.to.y);
    if degenerate {
        tracing::trace!(?from, to = ?arc.to, rx, ry, "degenerate arc drawn as a line");
        return vec![CubicSegment::line(from, arc.to)];
    }

    let angle = arc.x_axis_rotation * PI / 180.0;
    let p1 = rotate(from, -angle);
    let p2 = rotate(arc.to, -angle);

    let x = (p1.x - p2.x) / 2.0;
    let y = (p1.y - p2.y) / 2.0;
    let h = (x * x) / (rx * rx) + (y * y) / (ry * ry);
    if h > 1.0 {
        let h = h.sqrt();
        rx *= h;
        ry *= h;
    }
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let sign = if arc.large_arc == arc.sweep { -1.0 } else { 1.0 };
    let k = sign * ((rx2 * ry2 - rx2 * y * y - ry2 * x * x) / (rx2 * y * y + ry2 * x * x)).abs().sqrt();
    let cx = k * rx * y / ry + (p1.x + p2.x) / 2.0;
    let cy = k * -ry * x / rx + (p1.y + p2.y) / 2.0;

    let mut f1 = start_angle(p1, cx, cy, ry);
    let mut f2 = start_angle(p2, cx, cy, ry);
    if arc.sweep && f1 > f2 {
        f1 -= PI * 2.0;
    }
    if !arc.sweep && f2 > f1 {
        f2 -= PI * 2.0;
    }

    let frame = Frame {
        cx,
        cy,
        rx,
        ry,
        sweep: arc.sweep,
    };
    let mut points = Vec::new();
    frame.subdivide(p1, p2, f1, f2, &mut points);

    let mut curves: Vec<CubicSegment> = points
        .chunks_exact(3)
        .map(|c| {
            CubicSegment::new(
                rotate(c[0], angle),
                rotate(c[1], angle),
                rotate(c[2], angle),
            )
        })
        .collect();
    // Rotating back leaves rounding noise on the endpoint; the next segment starts at `arc.to`.
    if let Some(last) = curves.last_mut() {
        last.to = arc.to;
    }
    curves
}

/// Angle of `p` around the centre, from its height on the ellipse, mapped onto `[0, 2π)`.
fn start_angle(p: Point, cx: f64, cy: f64, ry: f64) -> f64 {
    let ratio = ((p.y - cy) / ry * 1e7).round() / 1e7;
    let mut f = ratio.clamp(-1.0, 1.0).asin();
    if p.x < cx {
        f = PI - f;
    }
    if f < 0.0 {
        f += PI * 2.0;
    }
    f
}

/// The ellipse in its own unrotated frame.
struct Frame {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    sweep: bool,
}

impl Frame {
    /// Pushes control/end point triples for the span `f1..f2`, first sub-arc first.
    fn subdivide(&self, p1: Point, p2: Point, f1: f64, f2: f64, out: &mut Vec<Point>) {
        let (mut f2, mut p2) = (f2, p2);
        let mut rest = None;
        if (f2 - f1).abs() > MAX_SPAN {
            let split = f1 + MAX_SPAN * if self.sweep && f2 > f1 { 1.0 } else { -1.0 };
            let at = point(
                self.cx + self.rx * split.cos(),
                self.cy + self.ry * split.sin(),
            );
            rest = Some((at, p2, split, f2));
            f2 = split;
            p2 = at;
        }

        let df = f2 - f1;
        let t = (df / 4.0).tan();
        let hx = 4.0 / 3.0 * self.rx * t;
        let hy = 4.0 / 3.0 * self.ry * t;
        let m2 = point(p1.x + hx * f1.sin(), p1.y - hy * f1.cos());
        let m3 = point(p2.x + hx * f2.sin(), p2.y - hy * f2.cos());
        // The first handle points backwards from the start, so mirror it through p1.
        out.push(point(2.0 * p1.x - m2.x, 2.0 * p1.y - m2.y));
        out.push(m3);
        out.push(p2);

        if let Some((start, end, s1, s2)) = rest {
            self.subdivide(start, end, s1, s2, out);
        }
    }
}
