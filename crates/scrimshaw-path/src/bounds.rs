use crate::command::{CubicSegment, CurvePath, CurveSegment};
use crate::curve::to_curves;
use crate::geom::{Point, point};
use crate::parse::PathSource;
use serde::{Deserialize, Serialize};

/// Axis-aligned box; `(x, y)` is the minimum corner and both extents are non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn min(&self) -> Point {
        point(self.x, self.y)
    }

    pub fn max(&self) -> Point {
        point(self.x + self.width, self.y + self.height)
    }

    /// Snaps the corner to whole pixels and rounds each extent on its own.
    pub fn rounded(&self) -> BoundingBox {
        let round = |v: f64| (v + 0.5).floor();
        let (min, max) = (self.min(), self.max());
        BoundingBox {
            x: round(min.x),
            y: round(min.y),
            width: round(max.x - min.x),
            height: round(max.y - min.y),
        }
    }

    /// Inclusive on every edge.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy)]
struct Extent {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Extent {
    fn at(p: Point) -> Self {
        Self {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn include_cubic(&mut self, from: Point, c: &CubicSegment) {
        self.include(from.x, from.y);
        self.include(c.to.x, c.to.y);
        for t in axis_extrema(from.x, c.ctrl1.x, c.ctrl2.x, c.to.x)
            .into_iter()
            .chain(axis_extrema(from.y, c.ctrl1.y, c.ctrl2.y, c.to.y))
            .flatten()
        {
            let p = c.point_at(from, t);
            self.include(p.x, p.y);
        }
    }
}

fn cubic_coefficients(p0: f64, p1: f64, p2: f64, p3: f64) -> (f64, f64, f64) {
    let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
    let b = 3.0 * p0 - 6.0 * p1 + 3.0 * p2;
    let c = -3.0 * p0 + 3.0 * p1;
    (a, b, c)
}

/// Parameters in `(0, 1)` where the 1-D cubic has a stationary point.
fn axis_extrema(p0: f64, p1: f64, p2: f64, p3: f64) -> [Option<f64>; 2] {
    const EPS: f64 = 1e-12;
    let (a, b, c) = cubic_coefficients(p0, p1, p2, p3);
    // Derivative: 3a t^2 + 2b t + c.
    let (qa, qb, qc) = (3.0 * a, 2.0 * b, c);
    let inside = |t: f64| (t > 0.0 && t < 1.0).then_some(t);

    if qa.abs() <= EPS {
        if qb.abs() > EPS {
            return [inside(-qc / qb), None];
        }
        return [None, None];
    }
    let disc = qb * qb - 4.0 * qa * qc;
    let tol = 1e-12 * (qb * qb + (4.0 * qa * qc).abs() + 1.0);
    if disc < -tol {
        return [None, None];
    }
    let s = disc.max(0.0).sqrt();
    [inside((-qb + s) / (2.0 * qa)), inside((-qb - s) / (2.0 * qa))]
}

/// Exact bounding box of a cubic path, moveto points included.
///
/// An empty path has a zero box at the origin.
pub fn bounds(path: &CurvePath) -> BoundingBox {
    let mut extent: Option<Extent> = None;
    let mut current = point(0.0, 0.0);
    let mut origin = current;
    for seg in path.iter() {
        match seg {
            CurveSegment::MoveTo(p) => {
                extent.get_or_insert_with(|| Extent::at(*p)).include(p.x, p.y);
                current = *p;
                origin = *p;
            }
            CurveSegment::CurveTo(c) => {
                extent
                    .get_or_insert_with(|| Extent::at(current))
                    .include_cubic(current, c);
                current = c.to;
            }
            CurveSegment::ClosePath => current = origin,
        }
    }
    match extent {
        Some(e) => BoundingBox {
            x: e.min_x,
            y: e.min_y,
            width: e.max_x - e.min_x,
            height: e.max_y - e.min_y,
        },
        None => BoundingBox::default(),
    }
}

/// Bounding box of arbitrary path data.
pub fn path_bounds<'a>(input: impl Into<PathSource<'a>>) -> BoundingBox {
    bounds(&to_curves(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extrema_stay_inside_unit_interval() {
        assert_eq!(axis_extrema(0.0, 1.0, 2.0, 3.0), [None, None]);
        let [a, b] = axis_extrema(0.0, 100.0, 100.0, 0.0);
        assert_eq!(a.or(b), Some(0.5));
    }

    #[test]
    fn rounded_snaps_to_whole_pixels() {
        let b = BoundingBox {
            x: 0.4,
            y: 1.6,
            width: 10.2,
            height: 3.3,
        };
        assert_eq!(
            b.rounded(),
            BoundingBox {
                x: 0.0,
                y: 2.0,
                width: 10.0,
                height: 3.0,
            }
        );
    }
}
