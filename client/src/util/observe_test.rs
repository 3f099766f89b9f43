use super::*;

#[test]
fn gate_ignores_non_intersecting_observations() {
    let mut gate = OnceGate::default();
    assert!(!gate.pass(false));
    assert!(!gate.has_fired());
}

#[test]
fn gate_fires_once() {
    let mut gate = OnceGate::default();
    assert!(gate.pass(true));
    assert!(!gate.pass(true));
    assert!(!gate.pass(false));
    assert!(gate.has_fired());
}

#[test]
fn thresholds_match_section_behavior() {
    assert!(REVEAL_THRESHOLD < COUNTER_THRESHOLD);
    assert!(REVEAL_ROOT_MARGIN.ends_with("-50px 0px"));
}
