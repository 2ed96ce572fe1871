//! Path builders for primitive sprites.

use crate::command::{EllipticArc, Path, PathCommand, Segment};
use crate::geom::{Point, point};

/// An ellipse as two half-turn arcs from its top point, closed.
pub fn ellipse_path(center: Point, rx: f64, ry: f64) -> Path {
    let top = point(center.x, center.y - ry);
    let bottom = point(center.x, center.y + ry);
    let half = |to: Point| {
        PathCommand::absolute(Segment::ArcTo(EllipticArc {
            rx,
            ry,
            x_axis_rotation: 0.0,
            large_arc: true,
            sweep: true,
            to,
        }))
    };
    Path::new(vec![
        PathCommand::absolute(Segment::MoveTo(top)),
        half(bottom),
        half(top),
        PathCommand::relative(Segment::ClosePath),
    ])
}

/// A rectangle, with quarter-circle corners when `radius` is non-zero.
///
/// The rounded outline starts after the top-left corner and runs clockwise in screen terms.
pub fn rect_path(x: f64, y: f64, width: f64, height: f64, radius: f64) -> Path {
    if radius == 0.0 {
        return Path::new(vec![
            PathCommand::absolute(Segment::MoveTo(point(x, y))),
            PathCommand::absolute(Segment::LineTo(point(x + width, y))),
            PathCommand::absolute(Segment::LineTo(point(x + width, y + height))),
            PathCommand::absolute(Segment::LineTo(point(x, y + height))),
            PathCommand::relative(Segment::ClosePath),
        ]);
    }

    let r = radius;
    let line = |dx: f64, dy: f64| PathCommand::relative(Segment::LineTo(point(dx, dy)));
    let corner = |dx: f64, dy: f64| {
        PathCommand::relative(Segment::ArcTo(EllipticArc {
            rx: r,
            ry: r,
            x_axis_rotation: 0.0,
            large_arc: false,
            sweep: true,
            to: point(dx, dy),
        }))
    };
    Path::new(vec![
        PathCommand::absolute(Segment::MoveTo(point(x + r, y))),
        line(width - r * 2.0, 0.0),
        corner(r, r),
        line(0.0, height - r * 2.0),
        corner(-r, r),
        line(r * 2.0 - width, 0.0),
        corner(-r, -r),
        line(0.0, r * 2.0 - height),
        corner(r, -r),
        PathCommand::relative(Segment::ClosePath),
    ])
}
