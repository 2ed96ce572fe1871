//! Polygon clipping and containment.

use crate::geom::{Point, point};

/// `p` lies strictly left of the directed edge `c1 -> c2` (y-up orientation).
fn inside(p: Point, c1: Point, c2: Point) -> bool {
    (c2.x - c1.x) * (p.y - c1.y) > (c2.y - c1.y) * (p.x - c1.x)
}

/// Where the line through `s`,`e` crosses the line through `c1`,`c2`.
fn intersection(s: Point, e: Point, c1: Point, c2: Point) -> Point {
    let dc = c1 - c2;
    let dp = s - e;
    let n1 = c1.x * c2.y - c1.y * c2.x;
    let n2 = s.x * e.y - s.y * e.x;
    let n3 = 1.0 / (dc.x * dp.y - dc.y * dp.x);
    point((n1 * dp.x - n2 * dc.x) * n3, (n1 * dp.y - n2 * dc.y) * n3)
}

/// Sutherland-Hodgman clip of `subject` against the convex, counter-clockwise `clip_polygon`.
///
/// The result may be empty. An empty clip polygon leaves the subject untouched.
pub fn clip(subject: &[Point], clip_polygon: &[Point]) -> Vec<Point> {
    let Some(&last) = clip_polygon.last() else {
        return subject.to_vec();
    };
    let mut output = subject.to_vec();
    let mut c1 = last;
    for &c2 in clip_polygon {
        let input = std::mem::take(&mut output);
        let Some(&tail) = input.last() else {
            break;
        };
        let mut s = tail;
        for &e in &input {
            if inside(e, c1, c2) {
                if !inside(s, c1, c2) {
                    output.push(intersection(s, e, c1, c2));
                }
                output.push(e);
            } else if inside(s, c1, c2) {
                output.push(intersection(s, e, c1, c2));
            }
            s = e;
        }
        c1 = c2;
    }
    output
}

/// Even-odd point-in-polygon test.
pub fn polygon_contains(polygon: &[Point], p: Point) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };
    let mut contains = false;
    let mut prev = last;
    for &cur in polygon {
        if (cur.y > p.y) != (prev.y > p.y)
            && p.x < (prev.x - cur.x) * (p.y - cur.y) / (prev.y - cur.y) + cur.x
        {
            contains = !contains;
        }
        prev = cur;
    }
    contains
}
