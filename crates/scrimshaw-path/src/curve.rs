//! Canonical cubic conversion.

use crate::absolute::to_absolute;
use crate::arc::arc_to_curves;
use crate::command::{CubicSegment, CurvePath, CurveSegment, Segment};
use crate::geom::{Point, Transform, point};
use crate::parse::PathSource;

/// Pen state carried from one command to the next while converting to cubics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ConversionState {
    pub(crate) current: Point,
    /// Second control point of the last emitted cubic, reflected by `S`.
    reflect: Point,
    /// Control point of the last quadratic, reflected by `T`.
    quad: Option<Point>,
    origin: Point,
}

impl Default for ConversionState {
    fn default() -> Self {
        let zero = point(0.0, 0.0);
        Self {
            current: zero,
            reflect: zero,
            quad: None,
            origin: zero,
        }
    }
}

/// What one absolute command turned into.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Converted {
    MoveTo(Point),
    Curves(Vec<CubicSegment>),
}

impl ConversionState {
    /// Converts one absolute segment and advances the pen.
    pub(crate) fn step(&mut self, segment: &Segment) -> Converted {
        if !matches!(segment, Segment::QuadTo { .. } | Segment::SmoothQuadTo(_)) {
            self.quad = None;
        }
        let from = self.current;
        let curves = match *segment {
            Segment::MoveTo(p) => {
                self.move_in_place(p);
                self.origin = p;
                return Converted::MoveTo(p);
            }
            Segment::LineTo(to) => vec![CubicSegment::line(from, to)],
            Segment::HLineTo(x) => vec![CubicSegment::line(from, point(x, from.y))],
            Segment::VLineTo(y) => vec![CubicSegment::line(from, point(from.x, y))],
            Segment::CurveTo { ctrl1, ctrl2, to } => vec![CubicSegment::new(ctrl1, ctrl2, to)],
            Segment::SmoothCurveTo { ctrl2, to } => {
                let ctrl1 = from + (from - self.reflect);
                vec![CubicSegment::new(ctrl1, ctrl2, to)]
            }
            Segment::QuadTo { ctrl, to } => {
                self.quad = Some(ctrl);
                vec![quadratic_to_cubic(from, ctrl, to)]
            }
            Segment::SmoothQuadTo(to) => {
                let ctrl = match self.quad {
                    Some(q) => from + (from - q),
                    None => from,
                };
                self.quad = Some(ctrl);
                vec![quadratic_to_cubic(from, ctrl, to)]
            }
            Segment::ArcTo(arc) => arc_to_curves(from, &arc),
            Segment::ClosePath => vec![CubicSegment::line(from, self.origin)],
        };
        if let Some(last) = curves.last() {
            self.current = last.to;
            self.reflect = last.ctrl2;
        }
        Converted::Curves(curves)
    }

    /// Moves the pen without drawing; the next `S` reflects through the new point itself.
    pub(crate) fn move_in_place(&mut self, p: Point) {
        self.current = p;
        self.reflect = p;
    }

    /// A zero-length cubic at the pen, used to keep two walks in lockstep.
    pub(crate) fn pad(&mut self) -> CubicSegment {
        self.quad = None;
        self.reflect = self.current;
        CubicSegment::degenerate(self.current)
    }
}

/// Elevates the quadratic `from -> ctrl -> to` to the equivalent cubic.
pub fn quadratic_to_cubic(from: Point, ctrl: Point, to: Point) -> CubicSegment {
    const ONE_THIRD: f64 = 1.0 / 3.0;
    const TWO_THIRDS: f64 = 2.0 / 3.0;
    CubicSegment::new(
        point(
            ONE_THIRD * from.x + TWO_THIRDS * ctrl.x,
            ONE_THIRD * from.y + TWO_THIRDS * ctrl.y,
        ),
        point(
            ONE_THIRD * to.x + TWO_THIRDS * ctrl.x,
            ONE_THIRD * to.y + TWO_THIRDS * ctrl.y,
        ),
        to,
    )
}

/// Rewrites any path into moves and cubics only.
///
/// Lines become cubics whose control points sit on the endpoints, a close becomes a cubic back to
/// the subpath start, and arcs may expand into several cubics.
pub fn to_curves<'a>(input: impl Into<PathSource<'a>>) -> CurvePath {
    let path = to_absolute(input);
    let mut state = ConversionState::default();
    let mut out = Vec::with_capacity(path.len());
    for cmd in path.iter() {
        match state.step(&cmd.segment) {
            Converted::MoveTo(p) => out.push(CurveSegment::MoveTo(p)),
            Converted::Curves(curves) => out.extend(curves.into_iter().map(CurveSegment::CurveTo)),
        }
    }
    CurvePath::new(out)
}

/// Converts to cubics, then maps every point through `transform`.
pub fn map_path<'a>(input: impl Into<PathSource<'a>>, transform: &Transform) -> CurvePath {
    let apply = |p: Point| transform.transform_point(p);
    to_curves(input)
        .iter()
        .map(|seg| match *seg {
            CurveSegment::MoveTo(p) => CurveSegment::MoveTo(apply(p)),
            CurveSegment::CurveTo(c) => {
                CurveSegment::CurveTo(CubicSegment::new(apply(c.ctrl1), apply(c.ctrl2), apply(c.to)))
            }
            CurveSegment::ClosePath => CurveSegment::ClosePath,
        })
        .collect()
}
