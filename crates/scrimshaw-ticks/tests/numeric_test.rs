use scrimshaw_ticks::{TickRange, snap};

fn assert_range(got: TickRange, from: f64, to: f64, step: f64, steps: u32) {
    assert!((got.from - from).abs() < 1e-9, "from: {got:?}");
    assert!((got.to - to).abs() < 1e-9, "to: {got:?}");
    assert!((got.step - step).abs() < 1e-9, "step: {got:?}");
    assert_eq!(got.steps, steps, "steps: {got:?}");
}

#[test]
fn picks_round_steps() {
    let r = snap(3.0, 47.0, 5, true);
    assert_range(r, 0.0, 50.0, 10.0, 5);
    assert_eq!(r.power, 1);

    assert_range(snap(0.013, 0.97, 5, true), 0.0, 1.0, 0.2, 5);
    assert_range(snap(10.0, 100.0, 4, true), 0.0, 100.0, 25.0, 4);
    assert_range(snap(3.0, 47.0, 10, true), 0.0, 50.0, 5.0, 10);
}

#[test]
fn ranges_straddling_zero_have_a_zero_tick() {
    let r = snap(-7.0, 23.0, 5, true);
    assert_range(r, -10.0, 30.0, 10.0, 4);
    assert!(r.ticks().contains(&0.0));

    let r = snap(-1234.0, 5678.0, 8, true);
    assert_range(r, -2000.0, 6000.0, 1000.0, 8);
    assert!(r.ticks().contains(&0.0));
}

#[test]
fn plain_numbers_divide_the_range_evenly() {
    let r = snap(3.0, 47.0, 5, false);
    assert_range(r, 0.0, 47.0, 9.4, 5);
    assert_eq!(r.ticks(), vec![0.0, 9.4, 18.8, 28.2, 37.6, 47.0]);
}

#[test]
fn ticks_run_from_start_to_end() {
    assert_eq!(
        snap(3.0, 47.0, 5, true).ticks(),
        vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]
    );
    assert_eq!(
        snap(0.013, 0.97, 5, true).ticks(),
        vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]
    );
}

#[test]
fn tiny_ranges_get_exact_decimal_steps() {
    let r = snap(-1e-9, 1e-9, 4, true);
    assert_eq!(r.step, 5e-10);
    assert_eq!((r.from, r.to, r.steps), (-1e-9, 1e-9, 4));

    let ticks = r.ticks();
    assert_eq!(ticks, vec![-1e-9, -5e-10, 0.0, 5e-10, 1e-9]);
    assert!(ticks.iter().all(|t| !t.is_sign_negative() || *t < 0.0));
}

#[test]
fn ticks_never_print_negative_zero() {
    let r = TickRange {
        from: -1e-12,
        to: 1.0,
        step: 0.5,
        steps: 2,
        power: 0,
    };
    let ticks = r.ticks();
    assert_eq!(ticks, vec![0.0, 0.5, 1.0]);
    assert!(!ticks[0].is_sign_negative());
}

#[test]
fn reversed_input_is_swapped() {
    assert_eq!(snap(47.0, 3.0, 5, true), snap(3.0, 47.0, 5, true));
}

#[test]
fn equal_ends_get_a_unit_span() {
    let r = snap(5.0, 5.0, 10, true);
    assert!(r.from <= 5.0);
    assert!(r.to >= 6.0);
    assert_eq!(r.step, 1.0);
    assert!(r.steps >= 1);
}

#[test]
fn zero_budget_is_treated_as_one_step() {
    let r = snap(3.0, 47.0, 0, true);
    assert!(r.steps >= 1);
    assert!(r.from <= 3.0 && r.to >= 47.0);
}

#[test]
fn non_finite_input_gives_an_empty_range() {
    let r = snap(f64::NAN, 10.0, 5, true);
    assert_eq!(r.steps, 0);
    assert!(r.ticks().is_empty());

    let r = snap(0.0, f64::INFINITY, 5, true);
    assert_eq!(r.steps, 0);
}

#[test]
fn negative_ranges_stay_below_zero() {
    let r = snap(-47.0, -3.0, 5, true);
    assert!(r.from <= -47.0);
    assert!(r.to >= -3.0);
    assert!(r.to <= 0.0);
    assert_eq!(r.step, 10.0);
}

#[test]
fn serializes_as_plain_fields() {
    let r = snap(3.0, 47.0, 5, true);
    let v = serde_json::to_value(r).unwrap();
    assert_eq!(v["from"], 0.0);
    assert_eq!(v["to"], 50.0);
    assert_eq!(v["steps"], 5);
}
