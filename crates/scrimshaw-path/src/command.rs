//! Path data model: raw commands, absolute paths and canonical cubic paths.

use crate::geom::{Point, Vector, point};
use serde::{Deserialize, Serialize};

/// Elliptical arc parameters, SVG style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipticArc {
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse's x axis, in degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub to: Point,
}

/// One drawing instruction. Each variant carries exactly the coordinates its letter requires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    HLineTo(f64),
    VLineTo(f64),
    CurveTo { ctrl1: Point, ctrl2: Point, to: Point },
    SmoothCurveTo { ctrl2: Point, to: Point },
    QuadTo { ctrl: Point, to: Point },
    SmoothQuadTo(Point),
    ArcTo(EllipticArc),
    ClosePath,
}

impl Segment {
    /// Number of numeric arguments the command letter takes (`None` for unknown letters).
    pub fn arity(letter: char) -> Option<usize> {
        match letter.to_ascii_uppercase() {
            'M' | 'L' | 'T' => Some(2),
            'H' | 'V' => Some(1),
            'C' => Some(6),
            'S' | 'Q' => Some(4),
            'A' => Some(7),
            'Z' => Some(0),
            _ => None,
        }
    }

    /// Builds a segment from a letter and exactly `arity(letter)` arguments.
    pub(crate) fn from_args(letter: char, args: &[f64]) -> Option<Self> {
        if Self::arity(letter) != Some(args.len()) {
            return None;
        }
        let p = |i: usize| point(args[i], args[i + 1]);
        Some(match letter.to_ascii_uppercase() {
            'M' => Segment::MoveTo(p(0)),
            'L' => Segment::LineTo(p(0)),
            'H' => Segment::HLineTo(args[0]),
            'V' => Segment::VLineTo(args[0]),
            'C' => Segment::CurveTo {
                ctrl1: p(0),
                ctrl2: p(2),
                to: p(4),
            },
            'S' => Segment::SmoothCurveTo {
                ctrl2: p(0),
                to: p(2),
            },
            'Q' => Segment::QuadTo {
                ctrl: p(0),
                to: p(2),
            },
            'T' => Segment::SmoothQuadTo(p(0)),
            'A' => Segment::ArcTo(EllipticArc {
                rx: args[0],
                ry: args[1],
                x_axis_rotation: args[2],
                large_arc: args[3] != 0.0,
                sweep: args[4] != 0.0,
                to: p(5),
            }),
            'Z' => Segment::ClosePath,
            _ => return None,
        })
    }

    /// Upper-case command letter.
    pub fn letter(&self) -> char {
        match self {
            Segment::MoveTo(_) => 'M',
            Segment::LineTo(_) => 'L',
            Segment::HLineTo(_) => 'H',
            Segment::VLineTo(_) => 'V',
            Segment::CurveTo { .. } => 'C',
            Segment::SmoothCurveTo { .. } => 'S',
            Segment::QuadTo { .. } => 'Q',
            Segment::SmoothQuadTo(_) => 'T',
            Segment::ArcTo(_) => 'A',
            Segment::ClosePath => 'Z',
        }
    }

    /// Flat argument list in path-data order (arc flags as `0`/`1`).
    pub fn args(&self) -> Vec<f64> {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) | Segment::SmoothQuadTo(p) => vec![p.x, p.y],
            Segment::HLineTo(v) | Segment::VLineTo(v) => vec![v],
            Segment::CurveTo { ctrl1, ctrl2, to } => {
                vec![ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y]
            }
            Segment::SmoothCurveTo { ctrl2: a, to: b } | Segment::QuadTo { ctrl: a, to: b } => {
                vec![a.x, a.y, b.x, b.y]
            }
            Segment::ArcTo(arc) => vec![
                arc.rx,
                arc.ry,
                arc.x_axis_rotation,
                if arc.large_arc { 1.0 } else { 0.0 },
                if arc.sweep { 1.0 } else { 0.0 },
                arc.to.x,
                arc.to.y,
            ],
            Segment::ClosePath => Vec::new(),
        }
    }

    /// Shifts the coordinates a relative command is measured in.
    ///
    /// `H` only moves along x, `V` only along y, an arc only moves its endpoint; every other
    /// point moves by the full offset.
    pub(crate) fn offset(self, by: Vector) -> Self {
        match self {
            Segment::MoveTo(p) => Segment::MoveTo(p + by),
            Segment::LineTo(p) => Segment::LineTo(p + by),
            Segment::HLineTo(x) => Segment::HLineTo(x + by.x),
            Segment::VLineTo(y) => Segment::VLineTo(y + by.y),
            Segment::CurveTo { ctrl1, ctrl2, to } => Segment::CurveTo {
                ctrl1: ctrl1 + by,
                ctrl2: ctrl2 + by,
                to: to + by,
            },
            Segment::SmoothCurveTo { ctrl2, to } => Segment::SmoothCurveTo {
                ctrl2: ctrl2 + by,
                to: to + by,
            },
            Segment::QuadTo { ctrl, to } => Segment::QuadTo {
                ctrl: ctrl + by,
                to: to + by,
            },
            Segment::SmoothQuadTo(p) => Segment::SmoothQuadTo(p + by),
            Segment::ArcTo(arc) => Segment::ArcTo(EllipticArc {
                to: arc.to + by,
                ..arc
            }),
            Segment::ClosePath => Segment::ClosePath,
        }
    }

    /// Where the pen ends after drawing this (absolute) segment.
    pub(crate) fn end_point(&self, current: Point, subpath_origin: Point) -> Point {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) | Segment::SmoothQuadTo(p) => p,
            Segment::HLineTo(x) => point(x, current.y),
            Segment::VLineTo(y) => point(current.x, y),
            Segment::CurveTo { to, .. }
            | Segment::SmoothCurveTo { to, .. }
            | Segment::QuadTo { to, .. } => to,
            Segment::ArcTo(arc) => arc.to,
            Segment::ClosePath => subpath_origin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathCommand {
    pub segment: Segment,
    /// Lower-case letter in path data: coordinates are measured from the current point.
    pub relative: bool,
}

impl PathCommand {
    pub fn absolute(segment: Segment) -> Self {
        Self {
            segment,
            relative: false,
        }
    }

    pub fn relative(segment: Segment) -> Self {
        Self {
            segment,
            relative: true,
        }
    }

    /// Command letter as it appears in path data (lower case when relative).
    pub fn letter(&self) -> char {
        let letter = self.segment.letter();
        if self.relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }
}

/// An ordered list of drawing commands; parsed paths always start with a MoveTo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

/// A cubic Bezier segment; its start point is the previous segment's endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicSegment {
    pub fn new(ctrl1: Point, ctrl2: Point, to: Point) -> Self {
        Self { ctrl1, ctrl2, to }
    }

    /// A straight line drawn as a cubic: control points sit on the endpoints.
    pub fn line(from: Point, to: Point) -> Self {
        Self::new(from, to, to)
    }

    /// A zero-length cubic parked at `at`.
    pub fn degenerate(at: Point) -> Self {
        Self::new(at, at, at)
    }

    /// Evaluates the segment (starting at `from`) at parameter `t`.
    pub fn point_at(&self, from: Point, t: f64) -> Point {
        point(
            bezier_1d(from.x, self.ctrl1.x, self.ctrl2.x, self.to.x, t),
            bezier_1d(from.y, self.ctrl1.y, self.ctrl2.y, self.to.y, t),
        )
    }
}

/// Point on `cubic` (drawn from `from`) at parameter `t`.
pub fn point_at(from: Point, cubic: &CubicSegment, t: f64) -> Point {
    cubic.point_at(from, t)
}

/// One-dimensional cubic Bezier polynomial at `t`.
pub fn bezier_1d(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    let t1 = 1.0 - t;
    t1 * t1 * t1 * a + 3.0 * t1 * t1 * t * b + 3.0 * t1 * t * t * c + t * t * t * d
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveSegment {
    MoveTo(Point),
    CurveTo(CubicSegment),
    ClosePath,
}

impl CurveSegment {
    pub fn is_move(&self) -> bool {
        matches!(self, CurveSegment::MoveTo(_))
    }
}

/// Canonical form consumed by bounds, interpolation and renderers: only moves and cubics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurvePath {
    pub segments: Vec<CurveSegment>,
}

impl CurvePath {
    pub fn new(segments: Vec<CurveSegment>) -> Self {
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurveSegment> {
        self.segments.iter()
    }

    /// Same kinds at every index, so the two paths can be blended point by point.
    pub fn is_aligned_with(&self, other: &CurvePath) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| std::mem::discriminant(a) == std::mem::discriminant(b))
    }
}

impl From<&CurvePath> for Path {
    fn from(curves: &CurvePath) -> Self {
        curves
            .iter()
            .map(|seg| {
                PathCommand::absolute(match *seg {
                    CurveSegment::MoveTo(p) => Segment::MoveTo(p),
                    CurveSegment::CurveTo(c) => Segment::CurveTo {
                        ctrl1: c.ctrl1,
                        ctrl2: c.ctrl2,
                        to: c.to,
                    },
                    CurveSegment::ClosePath => Segment::ClosePath,
                })
            })
            .collect()
    }
}

impl From<CurvePath> for Path {
    fn from(curves: CurvePath) -> Self {
        Path::from(&curves)
    }
}

impl FromIterator<CurveSegment> for CurvePath {
    fn from_iter<I: IntoIterator<Item = CurveSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}
