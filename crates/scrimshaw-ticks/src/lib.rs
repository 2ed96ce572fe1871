#![forbid(unsafe_code)]

//! Axis tick selection (headless).
//!
//! [`snap`] picks round-number steps for numeric axes; [`snap_dates`] picks calendar intervals
//! (milliseconds through years) for time axes. [`AxisTickConfig`] layers pinned ends and
//! major-unit adjustments on top of the numeric selector.

pub mod calendar;
pub mod config;
pub mod error;
pub mod numeric;

pub use calendar::{
    CalendarStep, CalendarSteps, CalendarTickRange, TimeUnit, snap_dates, snap_dates_with_step,
};
pub use config::AxisTickConfig;
pub use error::{Error, Result};
pub use numeric::{TickRange, snap};
