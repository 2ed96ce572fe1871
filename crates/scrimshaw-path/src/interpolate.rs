//! Structural alignment of two paths for point-by-point animation.
//!
//! Both paths are walked in lockstep so every index of the two outputs holds the same kind of
//! segment. Where the shapes disagree, the side with less to draw is padded with zero-length
//! cubics parked at its pen, so blending never invents geometry.
//!
//! Known gap: with more than two subpaths of differing shape the padding still lines indices up,
//! but the pairing of subpaths is positional rather than shape-aware.

use crate::absolute::to_absolute;
use crate::command::{CubicSegment, CurvePath, CurveSegment, Path, Segment};
use crate::curve::{ConversionState, Converted};
use crate::parse::PathSource;

/// One input's walk: its absolute commands plus the pen state.
struct Walk {
    commands: Path,
    next: usize,
    state: ConversionState,
    out: Vec<CurveSegment>,
}

impl Walk {
    fn new<'a>(input: impl Into<PathSource<'a>>) -> Self {
        let commands = to_absolute(input);
        Self {
            out: Vec::with_capacity(commands.len()),
            commands,
            next: 0,
            state: ConversionState::default(),
        }
    }

    fn peek(&self) -> Option<&Segment> {
        self.commands.commands.get(self.next).map(|c| &c.segment)
    }

    fn next_is_move(&self) -> bool {
        matches!(self.peek(), Some(Segment::MoveTo(_)))
    }

    fn is_done(&self) -> bool {
        self.next >= self.commands.len()
    }

    /// Converts the next command, or parks a zero-length cubic once the input is used up.
    fn advance(&mut self) -> Converted {
        match self.peek().copied() {
            Some(segment) => {
                self.next += 1;
                self.state.step(&segment)
            }
            None => Converted::Curves(vec![self.state.pad()]),
        }
    }

    /// Emits a moveto to where the pen already is, without consuming input.
    fn move_in_place(&mut self) {
        let at = self.state.current;
        self.state.move_in_place(at);
        self.out.push(CurveSegment::MoveTo(at));
    }

    fn push_curves(&mut self, curves: Vec<CubicSegment>, pad_to: usize) {
        let count = curves.len();
        self.out.extend(curves.into_iter().map(CurveSegment::CurveTo));
        for _ in count..pad_to {
            let pad = self.state.pad();
            self.out.push(CurveSegment::CurveTo(pad));
        }
    }
}

/// Converts both inputs to cubics with matching length and segment kinds at every index.
pub fn align<'a, 'b>(
    a: impl Into<PathSource<'a>>,
    b: impl Into<PathSource<'b>>,
) -> (CurvePath, CurvePath) {
    let mut a = Walk::new(a);
    let mut b = Walk::new(b);

    while !a.is_done() || !b.is_done() {
        match (a.next_is_move(), b.next_is_move()) {
            (true, false) => {
                if let Converted::MoveTo(p) = a.advance() {
                    a.out.push(CurveSegment::MoveTo(p));
                }
                b.move_in_place();
            }
            (false, true) => {
                if let Converted::MoveTo(p) = b.advance() {
                    b.out.push(CurveSegment::MoveTo(p));
                }
                a.move_in_place();
            }
            _ => match (a.advance(), b.advance()) {
                (Converted::MoveTo(pa), Converted::MoveTo(pb)) => {
                    a.out.push(CurveSegment::MoveTo(pa));
                    b.out.push(CurveSegment::MoveTo(pb));
                }
                (Converted::Curves(ca), Converted::Curves(cb)) => {
                    let width = ca.len().max(cb.len());
                    if ca.len() != cb.len() {
                        tracing::trace!(a = ca.len(), b = cb.len(), "padding shorter side");
                    }
                    a.push_curves(ca, width);
                    b.push_curves(cb, width);
                }
                // Both sides agreed on the command kind above, so a move never meets curves.
                _ => {}
            },
        }
    }

    (CurvePath::new(a.out), CurvePath::new(b.out))
}

/// Blends two paths, `t = 0` giving `a` and `t = 1` giving `b`.
///
/// Inputs that are not already aligned are aligned first.
pub fn interpolate(a: &CurvePath, b: &CurvePath, t: f64) -> CurvePath {
    if !a.is_aligned_with(b) {
        let (a, b) = align(&Path::from(a), &Path::from(b));
        return blend(&a, &b, t);
    }
    blend(a, b, t)
}

fn blend(a: &CurvePath, b: &CurvePath, t: f64) -> CurvePath {
    a.iter()
        .zip(b.iter())
        .map(|(sa, sb)| match (sa, sb) {
            (CurveSegment::MoveTo(pa), CurveSegment::MoveTo(pb)) => {
                CurveSegment::MoveTo(pa.lerp(*pb, t))
            }
            (CurveSegment::CurveTo(ca), CurveSegment::CurveTo(cb)) => {
                CurveSegment::CurveTo(CubicSegment::new(
                    ca.ctrl1.lerp(cb.ctrl1, t),
                    ca.ctrl2.lerp(cb.ctrl2, t),
                    ca.to.lerp(cb.to, t),
                ))
            }
            _ => *sa,
        })
        .collect()
}
