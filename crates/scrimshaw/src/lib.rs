#![forbid(unsafe_code)]

//! `scrimshaw` is the headless drawing core behind a charting toolkit.
//!
//! It re-exports two crates:
//! - [`path`]: path data parsing, cubic normalization, bounds, morph alignment and smoothing
//! - [`ticks`]: round-number and calendar-aware axis tick selection
//!
//! # Features
//!
//! - `ticks` (default): enable [`ticks`] (pulls in `chrono`)

pub mod path {
    pub use scrimshaw_path::*;
}

#[cfg(feature = "ticks")]
pub mod ticks {
    pub use scrimshaw_ticks::*;
}

pub use scrimshaw_path::{BoundingBox, CurvePath, Path, Point, parse, to_curves};
