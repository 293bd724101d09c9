//! Tests for the pure motion state classifier.

use deskmate::motion::{classify, HeldKeys, MotionState};
use rstest::rstest;

const NO_KEYS: HeldKeys = HeldKeys::NONE;

const fn keys(left: bool, right: bool, up: bool) -> HeldKeys {
    HeldKeys { left, right, up }
}

#[rstest]
#[case::at_rest(NO_KEYS, true, 0.0)]
#[case::mid_air(NO_KEYS, false, 5.0)]
#[case::while_jumping(keys(false, false, true), true, 0.0)]
#[case::while_running(keys(false, true, false), true, 3.0)]
fn dragging_overrides_everything(
    #[case] held: HeldKeys,
    #[case] grounded: bool,
    #[case] velocity_y: f64,
) {
    let decision = classify(true, held, grounded, velocity_y);
    assert_eq!(decision.state, MotionState::Dragging);
    assert!(!decision.start_jump, "no jump may start inside a drag");
}

#[rstest]
#[case::falling(5.0, MotionState::JumpDown)]
#[case::rising(-5.0, MotionState::JumpUp)]
fn airborne_state_splits_on_vertical_velocity(
    #[case] velocity_y: f64,
    #[case] expected: MotionState,
) {
    let decision = classify(false, NO_KEYS, false, velocity_y);
    assert_eq!(decision.state, expected);
    assert!(!decision.start_jump);
}

#[test]
fn grounded_up_key_requests_a_jump() {
    let decision = classify(false, keys(false, false, true), true, 0.0);
    assert!(decision.start_jump);
    assert_eq!(decision.state, MotionState::JumpUp);
}

#[test]
fn airborne_up_key_requests_nothing() {
    let decision = classify(false, keys(false, false, true), false, -2.0);
    assert!(!decision.start_jump, "no double jump");
    assert_eq!(decision.state, MotionState::JumpUp);
}

#[rstest]
#[case::right(keys(false, true, false), MotionState::Run)]
#[case::left(keys(true, false, false), MotionState::Run)]
#[case::none(NO_KEYS, MotionState::Idle)]
#[case::both(keys(true, true, false), MotionState::Idle)]
fn grounded_state_follows_movement_intent(#[case] held: HeldKeys, #[case] expected: MotionState) {
    let decision = classify(false, held, true, 0.0);
    assert_eq!(decision.state, expected);
    assert!(!decision.start_jump);
}

#[rstest]
#[case::left_only(keys(true, false, false), -1.0)]
#[case::right_only(keys(false, true, false), 1.0)]
#[case::both(keys(true, true, false), 0.0)]
#[case::neither(NO_KEYS, 0.0)]
fn way_resolves_conflicting_keys_to_no_intent(#[case] held: HeldKeys, #[case] expected: f64) {
    assert!((held.way() - expected).abs() < f64::EPSILON);
}
