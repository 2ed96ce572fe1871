use crate::command::{Path, PathCommand, Segment};
use crate::geom::{Point, point};
use crate::parse::{PathSource, parse};

/// Tracks the pen while walking a path: current point plus the start of the current subpath.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    current: Point,
    origin: Point,
}

impl Cursor {
    fn new() -> Self {
        Self {
            current: point(0.0, 0.0),
            origin: point(0.0, 0.0),
        }
    }

    fn advance(&mut self, absolute: &Segment) {
        self.current = absolute.end_point(self.current, self.origin);
        if let Segment::MoveTo(p) = absolute {
            self.origin = *p;
        }
    }
}

/// Rewrites every relative command against the running cursor.
///
/// A relative moveto is measured from the current point (or the origin when it opens the path),
/// and `Z` returns the cursor to the subpath start.
pub fn to_absolute<'a>(input: impl Into<PathSource<'a>>) -> Path {
    let path = parse(input);
    let mut cursor = Cursor::new();
    path.iter()
        .map(|cmd| {
            let segment = if cmd.relative {
                cmd.segment.offset(cursor.current.to_vector())
            } else {
                cmd.segment
            };
            cursor.advance(&segment);
            PathCommand::absolute(segment)
        })
        .collect()
}

/// Inverse of [`to_absolute`]: everything after the leading moveto is measured from the pen.
pub fn to_relative<'a>(input: impl Into<PathSource<'a>>) -> Path {
    let path = to_absolute(input);
    let mut cursor = Cursor::new();
    path.iter()
        .enumerate()
        .map(|(i, cmd)| {
            let out = if i == 0 {
                *cmd
            } else {
                PathCommand::relative(cmd.segment.offset(-cursor.current.to_vector()))
            };
            cursor.advance(&cmd.segment);
            out
        })
        .collect()
}
