use std::f64::consts::PI;

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Transform = euclid::Transform2D<f64, Unit, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Rotates `p` about the origin by `radians` (counter-clockwise in y-up terms).
pub fn rotate(p: Point, radians: f64) -> Point {
    let cos = radians.cos();
    let sin = radians.sin();
    point(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

/// Rotates `p` by `degrees` about `center`.
///
/// A zero angle returns `p` untouched, so repeated calls never accumulate rounding noise.
pub fn rotate_point(p: Point, degrees: f64, center: Point) -> Point {
    if degrees == 0.0 {
        return p;
    }
    let alpha = degrees * (PI / 180.0);
    let (x, y) = (p.x - center.x, p.y - center.y);
    let cos = alpha.cos();
    let sin = alpha.sin();
    point(x * cos - y * sin + center.x, x * sin + y * cos + center.y)
}

/// Degrees to radians, folding whole turns away first.
pub fn rad(degrees: f64) -> f64 {
    degrees % 360.0 * PI / 180.0
}

/// Radians to degrees, folding whole turns away.
pub fn degrees(radians: f64) -> f64 {
    radians * 180.0 / PI % 360.0
}

/// Maps any angle onto `[0, 2π)`.
pub fn normalize_radians(radians: f64) -> f64 {
    let two_pi = 2.0 * PI;
    if radians >= 0.0 {
        return radians % two_pi;
    }
    ((radians % two_pi) + two_pi) % two_pi
}

/// Maps any angle onto `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    if degrees >= 0.0 {
        return degrees % 360.0;
    }
    ((degrees % 360.0) + 360.0) % 360.0
}
