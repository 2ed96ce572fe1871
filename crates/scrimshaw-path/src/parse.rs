//! Lenient path-data parser.
//!
//! Rendering code wants *something* drawable out of sloppy input, so nothing here fails: pieces
//! that cannot be understood are skipped and reported as [`Ignored`] diagnostics instead.

use crate::command::{Path, PathCommand, Segment};
use std::ops::Range;

/// A command given as a letter plus its flat argument list, e.g. `('L', vec![10.0, 20.0])`.
///
/// Like path-data text, one entry may pack several argument groups (`('L', [x1, y1, x2, y2])`).
pub type RawCommand = (char, Vec<f64>);

/// Anything [`parse`] accepts.
#[derive(Debug, Clone, Copy)]
pub enum PathSource<'a> {
    Text(&'a str),
    Commands(&'a [RawCommand]),
    Path(&'a Path),
}

impl<'a> From<&'a str> for PathSource<'a> {
    fn from(value: &'a str) -> Self {
        PathSource::Text(value)
    }
}

impl<'a> From<&'a String> for PathSource<'a> {
    fn from(value: &'a String) -> Self {
        PathSource::Text(value.as_str())
    }
}

impl<'a> From<&'a [RawCommand]> for PathSource<'a> {
    fn from(value: &'a [RawCommand]) -> Self {
        PathSource::Commands(value)
    }
}

impl<'a> From<&'a Vec<RawCommand>> for PathSource<'a> {
    fn from(value: &'a Vec<RawCommand>) -> Self {
        PathSource::Commands(value.as_slice())
    }
}

impl<'a> From<&'a Path> for PathSource<'a> {
    fn from(value: &'a Path) -> Self {
        PathSource::Path(value)
    }
}

/// Why a piece of input was skipped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathIssue {
    #[error("unknown path command `{0}`")]
    UnknownCommand(char),
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    #[error("malformed number `{0}`")]
    InvalidNumber(String),
    #[error("number before the first command")]
    OrphanArgument,
    #[error("`{command}` takes {expected} arguments per group, {found} left over")]
    IncompleteArguments {
        command: char,
        expected: usize,
        found: usize,
    },
    #[error("`{0}` takes no arguments")]
    UnexpectedArguments(char),
    #[error("`{0}` before the first moveto")]
    MissingMoveTo(char),
}

/// A skipped piece of input.
///
/// `span` is a byte range for text input and an element index range for command-list input.
#[derive(Debug, Clone, PartialEq)]
pub struct Ignored {
    pub span: Range<usize>,
    pub issue: PathIssue,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutput {
    pub path: Path,
    pub ignored: Vec<Ignored>,
}

/// Parses path data, silently dropping anything malformed.
pub fn parse<'a>(input: impl Into<PathSource<'a>>) -> Path {
    parse_with_diagnostics(input).path
}

/// Parses path data and reports every dropped piece.
pub fn parse_with_diagnostics<'a>(input: impl Into<PathSource<'a>>) -> ParseOutput {
    let out = match input.into() {
        PathSource::Text(text) => parse_text(text),
        PathSource::Commands(commands) => parse_commands(commands),
        PathSource::Path(path) => ParseOutput {
            path: path.clone(),
            ignored: Vec::new(),
        },
    };
    for ignored in &out.ignored {
        tracing::debug!(span = ?ignored.span, issue = %ignored.issue, "dropped path data");
    }
    out
}

#[derive(Default)]
struct Builder {
    commands: Vec<PathCommand>,
    ignored: Vec<Ignored>,
}

impl Builder {
    fn skip(&mut self, span: Range<usize>, issue: PathIssue) {
        self.ignored.push(Ignored { span, issue });
    }

    /// Splits one letter's arguments into commands of the letter's arity.
    ///
    /// `arg_spans[i]` locates `args[i]`; `letter_span` locates the letter itself.
    fn push_run(
        &mut self,
        letter: char,
        letter_span: Range<usize>,
        args: &[f64],
        arg_spans: &[Range<usize>],
    ) {
        let Some(arity) = Segment::arity(letter) else {
            let end = arg_spans.last().map_or(letter_span.end, |s| s.end);
            self.skip(letter_span.start..end, PathIssue::UnknownCommand(letter));
            return;
        };
        let relative = letter.is_ascii_lowercase();

        if arity == 0 {
            self.push_segment(letter, letter_span.clone(), Segment::ClosePath, relative);
            if let (Some(first), Some(last)) = (arg_spans.first(), arg_spans.last()) {
                self.skip(first.start..last.end, PathIssue::UnexpectedArguments(letter));
            }
            return;
        }

        if args.is_empty() {
            self.skip(
                letter_span,
                PathIssue::IncompleteArguments {
                    command: letter,
                    expected: arity,
                    found: 0,
                },
            );
            return;
        }

        // Extra coordinate pairs after a moveto are implicit linetos of the same case.
        let mut current = letter;
        let mut i = 0usize;
        while args.len() - i >= arity {
            let span = if i == 0 {
                letter_span.start..arg_spans[i + arity - 1].end
            } else {
                arg_spans[i].start..arg_spans[i + arity - 1].end
            };
            if let Some(segment) = Segment::from_args(current, &args[i..i + arity]) {
                self.push_segment(current, span, segment, relative);
            }
            i += arity;
            if current.eq_ignore_ascii_case(&'m') {
                current = if relative { 'l' } else { 'L' };
            }
        }
        if i < args.len() {
            self.skip(
                arg_spans[i].start..arg_spans[args.len() - 1].end,
                PathIssue::IncompleteArguments {
                    command: current,
                    expected: arity,
                    found: args.len() - i,
                },
            );
        }
    }

    fn push_segment(&mut self, letter: char, span: Range<usize>, segment: Segment, relative: bool) {
        if self.commands.is_empty() && !matches!(segment, Segment::MoveTo(_)) {
            self.skip(span, PathIssue::MissingMoveTo(letter));
            return;
        }
        self.commands.push(PathCommand { segment, relative });
    }

    fn finish(self) -> ParseOutput {
        ParseOutput {
            path: Path::new(self.commands),
            ignored: self.ignored,
        }
    }
}

fn parse_commands(commands: &[RawCommand]) -> ParseOutput {
    let mut b = Builder::default();
    for (idx, (letter, args)) in commands.iter().enumerate() {
        let spans = vec![idx..idx + 1; args.len()];
        b.push_run(*letter, idx..idx + 1, args, &spans);
    }
    b.finish()
}

fn skip_sep(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() {
        match bytes[*i] {
            b' ' | b'\n' | b'\r' | b'\t' | b'\x0c' | b',' => *i += 1,
            _ => break,
        }
    }
}

/// Scans one number starting at `*i`; always consumes at least one byte.
///
/// A sign or a second decimal point ends the current number, so `10-20` and `0.5.5` each read
/// as two numbers. Overflowing literals such as `1e999` are rejected.
fn scan_number(d: &str, bytes: &[u8], i: &mut usize) -> Result<f64, Range<usize>> {
    let start = *i;
    if matches!(bytes[*i], b'+' | b'-') {
        *i += 1;
    }
    while *i < bytes.len() && bytes[*i].is_ascii_digit() {
        *i += 1;
    }
    if *i < bytes.len() && bytes[*i] == b'.' {
        *i += 1;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
    }
    // Only treat `e` as an exponent when digits follow; otherwise it belongs to the next token.
    if *i < bytes.len() && matches!(bytes[*i], b'e' | b'E') {
        let mut j = *i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            *i = j;
        }
    }
    match d[start..*i].parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(start..*i),
    }
}

struct Run {
    letter: char,
    letter_span: Range<usize>,
    args: Vec<f64>,
    arg_spans: Vec<Range<usize>>,
}

fn parse_text(d: &str) -> ParseOutput {
    let bytes = d.as_bytes();
    let mut b = Builder::default();
    let mut run: Option<Run> = None;
    let mut i = 0usize;

    let flush = |b: &mut Builder, run: &mut Option<Run>| {
        if let Some(r) = run.take() {
            b.push_run(r.letter, r.letter_span, &r.args, &r.arg_spans);
        }
    };

    while i < bytes.len() {
        skip_sep(bytes, &mut i);
        if i >= bytes.len() {
            break;
        }
        let ch = bytes[i];
        if ch.is_ascii_alphabetic() {
            flush(&mut b, &mut run);
            // Unknown letters still open a run so their arguments are dropped with them.
            run = Some(Run {
                letter: ch as char,
                letter_span: i..i + 1,
                args: Vec::new(),
                arg_spans: Vec::new(),
            });
            i += 1;
        } else if ch.is_ascii_digit() || matches!(ch, b'.' | b'+' | b'-') {
            let start = i;
            match scan_number(d, bytes, &mut i) {
                Ok(v) => match run.as_mut() {
                    Some(r) => {
                        r.args.push(v);
                        r.arg_spans.push(start..i);
                    }
                    None => b.skip(start..i, PathIssue::OrphanArgument),
                },
                Err(span) => {
                    let text = d[span.clone()].to_string();
                    b.skip(span, PathIssue::InvalidNumber(text));
                }
            }
        } else {
            let c = d[i..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            let len = c.len_utf8();
            b.skip(i..i + len, PathIssue::UnexpectedChar(c));
            i += len;
        }
    }
    flush(&mut b, &mut run);
    b.finish()
}
