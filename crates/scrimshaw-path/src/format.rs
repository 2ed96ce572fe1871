//! Compact path-data serialization (`M10,20L30,40Z`).
//!
//! Numbers print the way JavaScript's `Number#toString` does, so strings match what browser-side
//! chart code would have produced for the same geometry.

use crate::command::{CurvePath, CurveSegment, Path};
use std::fmt;

fn js_number_to_string(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if !v.is_finite() {
        return "0";
    }
    if v == -0.0 {
        v = 0.0;
    }
    buf.format_finite(v)
}

fn write_command(
    f: &mut fmt::Formatter<'_>,
    buf: &mut ryu_js::Buffer,
    letter: char,
    args: &[f64],
) -> fmt::Result {
    write!(f, "{letter}")?;
    for (i, v) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        f.write_str(js_number_to_string(*v, buf))?;
    }
    Ok(())
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = ryu_js::Buffer::new();
        for cmd in self.iter() {
            write_command(f, &mut buf, cmd.letter(), &cmd.segment.args())?;
        }
        Ok(())
    }
}

impl fmt::Display for CurvePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = ryu_js::Buffer::new();
        for seg in self.iter() {
            match seg {
                CurveSegment::MoveTo(p) => write_command(f, &mut buf, 'M', &[p.x, p.y])?,
                CurveSegment::CurveTo(c) => write_command(
                    f,
                    &mut buf,
                    'C',
                    &[c.ctrl1.x, c.ctrl1.y, c.ctrl2.x, c.ctrl2.y, c.to.x, c.to.y],
                )?,
                CurveSegment::ClosePath => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}
