use super::*;

#[test]
fn step_interval_spreads_run_over_duration() {
    assert_eq!(STEP_MS, 40);
    assert_eq!(STEP_MS * STEPS, DURATION_MS);
}

#[test]
fn value_starts_at_zero_and_ends_on_target() {
    assert_eq!(value_at(500, 0), 0);
    assert_eq!(value_at(500, STEPS), 500);
    assert_eq!(value_at(500, STEPS + 10), 500);
}

#[test]
fn intermediate_values_are_floored() {
    // 7 / 50 per step: floor(7 * 10 / 50) = 1
    assert_eq!(value_at(7, 10), 1);
    assert_eq!(value_at(7, 49), 6);
    assert_eq!(value_at(100, 25), 50);
}

#[test]
fn values_never_decrease() {
    let mut prev = 0;
    for step in 0..=STEPS {
        let v = value_at(98, step);
        assert!(v >= prev, "step {step}: {v} < {prev}");
        prev = v;
    }
}

#[test]
fn tick_runs_to_completion_then_holds() {
    let mut count = CountUp::new(15);
    let mut last = 0;
    for _ in 0..STEPS {
        last = count.tick();
    }
    assert!(count.is_done());
    assert_eq!(last, 15);
    assert_eq!(count.tick(), 15);
    assert_eq!(count.target(), 15);
}

#[test]
fn zero_target_stays_zero() {
    let mut count = CountUp::new(0);
    assert_eq!(count.tick(), 0);
    assert_eq!(count.value(), 0);
}
