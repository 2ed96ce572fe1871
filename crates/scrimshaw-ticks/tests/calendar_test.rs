use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use scrimshaw_ticks::{
    CalendarStep, CalendarSteps, Error, TimeUnit, snap_dates, snap_dates_with_step,
};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, 0))
        .unwrap()
}

fn day(y: i32, mo: u32, d: u32) -> NaiveDateTime {
    at(y, mo, d, 0, 0)
}

#[test]
fn one_week_in_seven_steps_is_daily() {
    let r = snap_dates(day(2024, 1, 1), day(2024, 1, 8), 7, false);
    assert_eq!(r.from, day(2024, 1, 1));
    assert_eq!(r.to, day(2024, 1, 8));
    assert_eq!(
        r.steps,
        CalendarSteps::Count {
            count: 7,
            step: TimeDelta::days(1)
        }
    );
    let ticks = r.ticks();
    assert_eq!(ticks.len(), 8);
    assert_eq!(ticks[3], day(2024, 1, 4));
}

#[test]
fn unlocked_ends_snap_to_period_boundaries() {
    let r = snap_dates(at(2024, 1, 1, 10, 30), at(2024, 1, 3, 9, 0), 4, false);
    assert_eq!(r.from, day(2024, 1, 1));
    assert_eq!(r.to, at(2024, 1, 3, 12, 0));
    assert_eq!(
        r.steps,
        CalendarSteps::Count {
            count: 5,
            step: TimeDelta::hours(12)
        }
    );
}

#[test]
fn locked_ends_keep_the_input_instants() {
    let from = at(2024, 1, 1, 10, 30);
    let to = at(2024, 1, 3, 9, 0);
    let r = snap_dates(from, to, 4, true);
    assert_eq!(r.from, from);
    assert_eq!(r.to, to);
    let CalendarSteps::Count { count, step } = r.steps else {
        panic!("expected evenly counted steps, got {:?}", r.steps);
    };
    assert_eq!(count, 4);
    assert_eq!(step * 4, to - from);
    let ticks = r.ticks();
    assert_eq!(ticks.first(), Some(&from));
    assert_eq!(ticks.last(), Some(&to));
}

#[test]
fn sub_second_ranges_use_milliseconds() {
    let from = day(2024, 1, 1);
    let to = from + TimeDelta::milliseconds(900);
    let r = snap_dates(from, to, 5, false);
    assert_eq!(
        r.steps,
        CalendarSteps::Count {
            count: 5,
            step: TimeDelta::milliseconds(200)
        }
    );
    assert_eq!(r.to, from + TimeDelta::seconds(1));
}

#[test]
fn months_are_listed_individually() {
    let r = snap_dates(day(2024, 1, 15), day(2024, 6, 10), 5, false);
    assert_eq!(r.from, day(2024, 1, 1));
    assert_eq!(r.to, day(2024, 7, 1));
    assert_eq!(
        r.ticks(),
        (1..=7).map(|m| day(2024, m, 1)).collect::<Vec<_>>()
    );
}

#[test]
fn long_ranges_fall_back_to_round_years() {
    let r = snap_dates(day(2000, 1, 1), day(2030, 1, 1), 5, false);
    assert_eq!(
        r.ticks(),
        vec![
            day(2000, 1, 1),
            day(2010, 1, 1),
            day(2020, 1, 1),
            day(2030, 1, 1)
        ]
    );
}

#[test]
fn reversed_ends_are_swapped() {
    let a = snap_dates(day(2024, 1, 8), day(2024, 1, 1), 7, false);
    let b = snap_dates(day(2024, 1, 1), day(2024, 1, 8), 7, false);
    assert_eq!(a, b);
}

#[test]
fn half_months_land_on_the_first_and_fifteenth() {
    let r = snap_dates_with_step(
        day(2024, 1, 5),
        day(2024, 2, 20),
        (TimeUnit::Month, 0.5),
        false,
    )
    .unwrap();
    assert_eq!(r.from, day(2024, 1, 1));
    assert_eq!(
        r.steps,
        CalendarSteps::Instants(vec![
            day(2024, 1, 15),
            day(2024, 2, 1),
            day(2024, 2, 15),
            day(2024, 3, 1),
        ])
    );
    assert_eq!(r.to, day(2024, 3, 1));
}

#[test]
fn third_months_land_on_the_first_tenth_and_twentieth() {
    let r = snap_dates_with_step(
        day(2024, 1, 12),
        day(2024, 3, 1),
        (TimeUnit::Month, 1.0 / 3.0),
        false,
    )
    .unwrap();
    assert_eq!(r.from, day(2024, 1, 1));
    assert_eq!(r.to, day(2024, 3, 1));
    assert_eq!(
        r.steps,
        CalendarSteps::Instants(vec![
            day(2024, 1, 10),
            day(2024, 1, 20),
            day(2024, 2, 1),
            day(2024, 2, 10),
            day(2024, 2, 20),
            day(2024, 3, 1),
        ])
    );
}

#[test]
fn quarter_months_roll_into_the_next_year() {
    let r = snap_dates_with_step(
        day(2023, 12, 20),
        day(2024, 1, 10),
        (TimeUnit::Month, 0.25),
        false,
    )
    .unwrap();
    assert_eq!(r.from, day(2023, 12, 1));
    assert_eq!(r.to, day(2024, 1, 15));
    assert_eq!(
        r.ticks(),
        vec![
            day(2023, 12, 1),
            day(2023, 12, 8),
            day(2023, 12, 15),
            day(2023, 12, 22),
            day(2024, 1, 1),
            day(2024, 1, 8),
            day(2024, 1, 15),
        ]
    );
}

#[test]
fn explicit_steps_align_to_the_amount() {
    let r = snap_dates_with_step(
        at(2024, 3, 4, 7, 40),
        at(2024, 3, 4, 9, 10),
        (TimeUnit::Minute, 30.0),
        false,
    )
    .unwrap();
    assert_eq!(r.from, at(2024, 3, 4, 7, 30));
    assert_eq!(r.to, at(2024, 3, 4, 9, 30));
    assert_eq!(
        r.steps,
        CalendarSteps::Count {
            count: 4,
            step: TimeDelta::minutes(30)
        }
    );
}

#[test]
fn rejects_invalid_step_amounts() {
    let err = snap_dates_with_step(day(2024, 1, 1), day(2024, 2, 1), (TimeUnit::Day, -1.0), false)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidStepAmount { unit: "day", .. }));

    assert!(CalendarStep::new(TimeUnit::Day, 0.5).is_err());
    assert!(CalendarStep::new(TimeUnit::Month, 0.4).is_err());
    assert!(CalendarStep::new(TimeUnit::Hour, 0.0).is_err());
    assert!(CalendarStep::new(TimeUnit::Second, f64::NAN).is_err());

    let quarter = CalendarStep::new(TimeUnit::Month, 0.25).unwrap();
    assert_eq!(quarter.unit(), TimeUnit::Month);
    assert_eq!(quarter.amount(), 0.25);
}

#[test]
fn parses_unit_names() {
    assert_eq!("Months".parse::<TimeUnit>().unwrap(), TimeUnit::Month);
    assert_eq!("mi".parse::<TimeUnit>().unwrap(), TimeUnit::Minute);
    assert_eq!(" ms ".parse::<TimeUnit>().unwrap(), TimeUnit::Millisecond);
    assert_eq!(TimeUnit::Hour.to_string(), "hour");

    let err = "fortnight".parse::<TimeUnit>().unwrap_err();
    assert!(matches!(err, Error::UnknownUnit { ref name } if name == "fortnight"));
    assert_eq!(err.to_string(), "unknown calendar unit `fortnight`");
}
