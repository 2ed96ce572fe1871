//! Calendar-aware tick selection over wall-clock instants.

use crate::error::{Error, Result};
use crate::numeric::snap;
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    /// Accepts full names, plurals and the short codes `ms s mi h d mo y`.
    fn from_str(s: &str) -> Result<Self> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "ms" | "milli" | "millisecond" | "milliseconds" => TimeUnit::Millisecond,
            "s" | "second" | "seconds" => TimeUnit::Second,
            "mi" | "minute" | "minutes" => TimeUnit::Minute,
            "h" | "hour" | "hours" => TimeUnit::Hour,
            "d" | "day" | "days" => TimeUnit::Day,
            "mo" | "month" | "months" => TimeUnit::Month,
            "y" | "year" | "years" => TimeUnit::Year,
            _ => {
                return Err(Error::UnknownUnit {
                    name: s.to_string(),
                });
            }
        };
        Ok(unit)
    }
}

/// Sub-month placements: ticks land on fixed days rather than evenly dividing the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MonthFraction {
    /// 1st and 15th.
    Half,
    /// 1st, 10th and 20th.
    Third,
    /// 1st, 8th, 15th and 22nd.
    Quarter,
}

impl MonthFraction {
    fn from_amount(amount: f64) -> Option<Self> {
        const EPS: f64 = 1e-9;
        if (amount - 0.5).abs() < EPS {
            Some(MonthFraction::Half)
        } else if (amount - 1.0 / 3.0).abs() < EPS {
            Some(MonthFraction::Third)
        } else if (amount - 0.25).abs() < EPS {
            Some(MonthFraction::Quarter)
        } else {
            None
        }
    }

    fn days(self) -> &'static [u32] {
        match self {
            MonthFraction::Half => &[1, 15],
            MonthFraction::Third => &[1, 10, 20],
            MonthFraction::Quarter => &[1, 8, 15, 22],
        }
    }

    /// The next fixed day after `at`, rolling into the following month after the last one.
    fn next(self, at: NaiveDateTime) -> Option<NaiveDateTime> {
        let day = at.day();
        match self.days().iter().find(|&&d| d > day) {
            Some(&d) => at.with_day(d),
            None => {
                let first = at.with_day(1)?;
                first.checked_add_months(Months::new(1))
            }
        }
    }
}

/// A validated tick interval: whole units, or a fixed fraction of a month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarStep {
    unit: TimeUnit,
    amount: f64,
}

impl CalendarStep {
    /// Fractional amounts are only meaningful for months (`1/2`, `1/3`, `1/4`).
    pub fn new(unit: TimeUnit, amount: f64) -> Result<Self> {
        let invalid = Error::InvalidStepAmount {
            unit: unit.as_str(),
            amount,
        };
        if !amount.is_finite() || amount <= 0.0 {
            return Err(invalid);
        }
        if amount.fract() != 0.0
            && !(unit == TimeUnit::Month && MonthFraction::from_amount(amount).is_some())
        {
            return Err(invalid);
        }
        Ok(Self { unit, amount })
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    fn fraction(&self) -> Option<MonthFraction> {
        if self.unit == TimeUnit::Month && self.amount < 1.0 {
            MonthFraction::from_amount(self.amount)
        } else {
            None
        }
    }

    fn whole(&self) -> i64 {
        self.amount as i64
    }
}

/// How the ticks between `from` and `to` are laid out.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarSteps {
    /// Fixed-duration units: `count` intervals of `step` each.
    Count { count: u32, step: TimeDelta },
    /// Months and years have uneven lengths, so every tick after `from` is listed.
    Instants(Vec<NaiveDateTime>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTickRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
    pub steps: CalendarSteps,
}

impl CalendarTickRange {
    /// Every tick instant, `from` first.
    pub fn ticks(&self) -> Vec<NaiveDateTime> {
        let mut out = vec![self.from];
        match &self.steps {
            CalendarSteps::Count { count, step } => {
                let count = i32::try_from(*count).unwrap_or(i32::MAX);
                out.extend((1..count).filter_map(|i| self.from.checked_add_signed(*step * i)));
                if count > 0 {
                    out.push(self.to);
                }
            }
            CalendarSteps::Instants(instants) => out.extend(instants.iter().copied()),
        }
        out
    }
}

/// Candidate intervals, finest first.
const SCALES: [(TimeUnit, &[i64]); 6] = [
    (
        TimeUnit::Millisecond,
        &[1, 2, 5, 10, 20, 50, 100, 200, 250, 500],
    ),
    (TimeUnit::Second, &[1, 2, 5, 10, 15, 30]),
    (TimeUnit::Minute, &[1, 2, 5, 10, 15, 30]),
    (TimeUnit::Hour, &[1, 2, 3, 4, 6, 12]),
    (TimeUnit::Day, &[1, 2, 7, 14]),
    (TimeUnit::Month, &[1, 2, 3, 6]),
];

/// Adds `n` whole units; month arithmetic clamps to the end of shorter months.
fn add_units(at: NaiveDateTime, unit: TimeUnit, n: i64) -> Option<NaiveDateTime> {
    let delta = match unit {
        TimeUnit::Millisecond => TimeDelta::try_milliseconds(n)?,
        TimeUnit::Second => TimeDelta::try_seconds(n)?,
        TimeUnit::Minute => TimeDelta::try_minutes(n)?,
        TimeUnit::Hour => TimeDelta::try_hours(n)?,
        TimeUnit::Day => TimeDelta::try_days(n)?,
        TimeUnit::Month => return at.checked_add_months(Months::new(u32::try_from(n).ok()?)),
        TimeUnit::Year => {
            let months = u32::try_from(n.checked_mul(12)?).ok()?;
            return at.checked_add_months(Months::new(months));
        }
    };
    at.checked_add_signed(delta)
}

/// Picks the finest interval for which `max_steps` ticks reach `to`, then lays the ticks out.
///
/// Beyond six-monthly steps the interval is a whole number of years chosen like a numeric axis.
pub fn snap_dates(
    from: NaiveDateTime,
    to: NaiveDateTime,
    max_steps: u32,
    lock_ends: bool,
) -> CalendarTickRange {
    let (from, to) = if from > to { (to, from) } else { (from, to) };
    let max_steps = i64::from(max_steps.max(1));

    let selected = SCALES.iter().find_map(|(unit, amounts)| {
        amounts.iter().find_map(|&amount| {
            let reaches = match add_units(from, *unit, amount * max_steps) {
                Some(end) => to <= end,
                None => true,
            };
            reaches.then_some((*unit, amount))
        })
    });

    let (unit, amount) = selected.unwrap_or_else(|| {
        let years = snap(
            f64::from(from.year()),
            f64::from(to.year() + 1),
            max_steps as u32,
            true,
        );
        (TimeUnit::Year, (years.step.round() as i64).max(1))
    });
    tracing::debug!(%unit, amount, "calendar tick interval");

    lay_out(
        from,
        to,
        CalendarStep {
            unit,
            amount: amount as f64,
        },
        lock_ends,
    )
}

/// Lays ticks out at a caller-chosen interval, given as `(unit, amount)`.
///
/// Unless `lock_ends`, `from` is pulled back to the start of the enclosing period aligned to the
/// amount (for example the start of the hour, or the 1st of an even month).
pub fn snap_dates_with_step(
    from: NaiveDateTime,
    to: NaiveDateTime,
    step: (TimeUnit, f64),
    lock_ends: bool,
) -> Result<CalendarTickRange> {
    let step = CalendarStep::new(step.0, step.1)?;
    let (from, to) = if from > to { (to, from) } else { (from, to) };
    Ok(lay_out(from, to, step, lock_ends))
}

fn floor_to(v: u32, amount: i64) -> u32 {
    let amount = u32::try_from(amount.max(1)).unwrap_or(u32::MAX);
    v / amount * amount
}

/// Start of the period containing `at`, aligned to the step amount.
fn anchor(at: NaiveDateTime, step: &CalendarStep) -> Option<NaiveDateTime> {
    let date = at.date();
    let n = step.whole();
    match step.unit {
        TimeUnit::Millisecond => {
            let ms = at.nanosecond() / 1_000_000 % 1000;
            at.with_nanosecond(floor_to(ms, n) * 1_000_000)
        }
        TimeUnit::Second => date.and_hms_opt(at.hour(), at.minute(), floor_to(at.second(), n)),
        TimeUnit::Minute => date.and_hms_opt(at.hour(), floor_to(at.minute(), n), 0),
        TimeUnit::Hour => date.and_hms_opt(floor_to(at.hour(), n), 0, 0),
        TimeUnit::Day => {
            let day = floor_to(at.day() - 1, n) + 1;
            date.with_day(day)?.and_hms_opt(0, 0, 0)
        }
        TimeUnit::Month => {
            let month0 = if step.fraction().is_some() {
                at.month0()
            } else {
                floor_to(at.month0(), n)
            };
            NaiveDate::from_ymd_opt(at.year(), month0 + 1, 1)?.and_hms_opt(0, 0, 0)
        }
        TimeUnit::Year => {
            let n = i32::try_from(n.max(1)).unwrap_or(i32::MAX);
            let year = at.year().div_euclid(n) * n;
            NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
        }
    }
}

fn lay_out(
    from: NaiveDateTime,
    to: NaiveDateTime,
    step: CalendarStep,
    lock_ends: bool,
) -> CalendarTickRange {
    let start = if lock_ends {
        from
    } else {
        anchor(from, &step).unwrap_or(from)
    };
    let listed = matches!(step.unit, TimeUnit::Month | TimeUnit::Year);

    let mut cursor = start;
    let mut count = 0u32;
    let mut instants = Vec::new();
    while cursor < to {
        let next = match step.fraction() {
            Some(fraction) => fraction.next(cursor),
            None => add_units(cursor, step.unit, step.whole()),
        };
        let Some(next) = next else {
            tracing::warn!(%cursor, unit = %step.unit, "calendar ticks ran out of range");
            break;
        };
        cursor = next;
        if listed {
            instants.push(cursor);
        } else {
            count += 1;
        }
    }

    let end = if lock_ends { to } else { cursor };
    let steps = if listed {
        CalendarSteps::Instants(instants)
    } else {
        let step_len = if count == 0 {
            add_units(start, step.unit, step.whole())
                .map(|next| next - start)
                .unwrap_or_default()
        } else {
            (end - start) / i32::try_from(count).unwrap_or(i32::MAX)
        };
        CalendarSteps::Count {
            count,
            step: step_len,
        }
    };
    CalendarTickRange {
        from: start,
        to: end,
        steps,
    }
}
