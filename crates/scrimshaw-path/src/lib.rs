#![forbid(unsafe_code)]

//! 2D path geometry for chart drawing (headless).
//!
//! Paths come in as path-data text, `(letter, args)` lists or [`Path`] values, and are normalized
//! into a cubic-only [`CurvePath`] that the rest of the crate works on: exact bounds, structural
//! alignment for animation, smoothing, plus polygon clipping and a few shape builders.
//!
//! Every operation is a pure function returning a fresh value.

pub mod absolute;
pub mod arc;
pub mod bounds;
pub mod clip;
pub mod command;
mod config;
pub mod curve;
mod format;
pub mod geom;
pub mod interpolate;
pub mod parse;
pub mod shapes;
pub mod smooth;

pub use absolute::{to_absolute, to_relative};
pub use arc::arc_to_curves;
pub use bounds::{BoundingBox, bounds, path_bounds};
pub use clip::{clip, polygon_contains};
pub use command::{
    CubicSegment, CurvePath, CurveSegment, EllipticArc, Path, PathCommand, Segment, bezier_1d,
    point_at,
};
pub use curve::{map_path, quadratic_to_cubic, to_curves};
pub use geom::{
    Point, Transform, Vector, degrees, normalize_degrees, normalize_radians, point, rad, rotate,
    rotate_point, vector,
};
pub use interpolate::{align, interpolate};
pub use parse::{
    Ignored, ParseOutput, PathIssue, PathSource, RawCommand, parse, parse_with_diagnostics,
};
pub use shapes::{ellipse_path, rect_path};
pub use smooth::{Anchors, SmoothConfig, anchors, smooth};
