//! Integration tests for the per-tick physics integrator.
//! Exercises the rest equilibrium, jump impulses, boundary clamping, and the
//! run-speed equilibrium under continuous control input.

use approx::assert_relative_eq;
use deskmate::config::Config;
use deskmate::physics::{PhysicsBody, PhysicsConstants, PixelSize};
use deskmate::vector::Vec2;
use rstest::{fixture, rstest};

const WINDOW: PixelSize = PixelSize::new(100, 100);
const SCREEN: PixelSize = PixelSize::new(1920, 1080);
const GROUND_Y: f64 = 980.0; // screen height - window height

/// A grounded body at x = 100 with the default constants at scale 0.2.
#[fixture]
fn grounded_body() -> PhysicsBody {
    let config = Config::with_scale(0.2).expect("default config");
    let mut body = PhysicsBody::new(PhysicsConstants::from_config(&config));
    body.update_screen_params(WINDOW, SCREEN);
    body.force_move(100.0, GROUND_Y);
    body
}

#[rstest]
fn resting_body_stays_put(mut grounded_body: PhysicsBody) {
    // Gravity is applied every tick and must be fully cancelled by the
    // grounded friction branch plus the ground clamp.
    for _ in 0..200 {
        grounded_body.step();
        assert!(grounded_body.is_grounded());
    }
    assert_relative_eq!(grounded_body.position().x(), 100.0);
    assert_relative_eq!(grounded_body.position().y(), GROUND_Y);
    assert_eq!(grounded_body.velocity(), Vec2::ZERO);
}

#[rstest]
fn airborne_jump_is_a_no_op(mut grounded_body: PhysicsBody) {
    grounded_body.force_move(100.0, 300.0);
    let before = grounded_body.velocity();
    grounded_body.jump();
    assert_eq!(grounded_body.velocity(), before);
}

#[rstest]
fn grounded_jump_applies_the_full_impulse(mut grounded_body: PhysicsBody) {
    let jump_force = grounded_body.constants().jump_force;
    grounded_body.jump();
    assert_relative_eq!(grounded_body.velocity().y(), jump_force.y());

    grounded_body.step();
    assert!(
        grounded_body.position().y() < GROUND_Y,
        "jump impulse should leave the body airborne after one tick"
    );
    assert!(!grounded_body.is_grounded());
}

#[rstest]
fn falling_body_stops_exactly_on_the_ground(mut grounded_body: PhysicsBody) {
    grounded_body.force_move(100.0, 300.0);
    for _ in 0..2000 {
        grounded_body.step();
        if grounded_body.is_grounded() {
            break;
        }
    }
    assert!(grounded_body.is_grounded(), "body never landed");
    assert_relative_eq!(grounded_body.position().y(), GROUND_Y);
    assert_relative_eq!(grounded_body.velocity().y(), 0.0);
}

#[rstest]
#[case::pushed_right(1.0)]
#[case::pushed_left(-1.0)]
fn horizontal_position_stays_clamped(mut grounded_body: PhysicsBody, #[case] way: f64) {
    let min_x = -0.2 * 100.0;
    let max_x = 1920.0 - 0.8 * 100.0;

    grounded_body.set_acceleration(way);
    // An absurd injected velocity must still be contained the same tick.
    grounded_body.set_velocity(Vec2::new(way * 1e6, 0.0));
    for _ in 0..500 {
        grounded_body.step();
        let x = grounded_body.position().x();
        assert!((min_x..=max_x).contains(&x), "x = {x} escaped the screen");
    }
}

#[rstest]
fn control_input_reaches_a_friction_equilibrium(mut grounded_body: PhysicsBody) {
    // scale 0.2 gives max_acceleration = 5 * 0.2 = 1 and tps_factor = 1.
    grounded_body.set_acceleration(1.0);

    grounded_body.step();
    assert_relative_eq!(grounded_body.velocity().x(), 1.0);
    assert_relative_eq!(grounded_body.position().x(), 101.0);

    for _ in 0..300 {
        grounded_body.step();
    }
    // Fixed point of v <- v * (1 - friction) + 1.
    let friction = grounded_body.constants().friction;
    assert_relative_eq!(
        grounded_body.velocity().x(),
        1.0 / friction,
        max_relative = 1e-6
    );
    assert!(grounded_body.is_running());
}

#[rstest]
fn facing_follows_horizontal_velocity(mut grounded_body: PhysicsBody) {
    assert_relative_eq!(grounded_body.facing(), 1.0);

    grounded_body.set_acceleration(-1.0);
    grounded_body.step();
    assert_relative_eq!(grounded_body.facing(), -1.0);

    // Facing persists once velocity decays back to zero.
    grounded_body.set_acceleration(0.0);
    for _ in 0..200 {
        grounded_body.step();
    }
    assert_eq!(grounded_body.velocity(), Vec2::ZERO);
    assert_relative_eq!(grounded_body.facing(), -1.0);
}

#[rstest]
fn airborne_control_is_attenuated(mut grounded_body: PhysicsBody) {
    let mut airborne = grounded_body.clone();
    airborne.force_move(100.0, 300.0);

    grounded_body.set_acceleration(1.0);
    airborne.set_acceleration(1.0);
    grounded_body.step();
    airborne.step();

    assert!(
        airborne.velocity().x() < grounded_body.velocity().x(),
        "airborne control should be weaker than grounded control"
    );
    assert_relative_eq!(
        airborne.velocity().x(),
        grounded_body.constants().max_acceleration * grounded_body.constants().air_resistance,
        max_relative = 1e-9
    );
}

#[test]
fn jump_impulse_scales_with_the_square_root_of_scale() {
    let small = Config::with_scale(0.25).expect("config");
    let large = Config::with_scale(1.0).expect("config");
    let small_jump = PhysicsConstants::from_config(&small).jump_force.y();
    let large_jump = PhysicsConstants::from_config(&large).jump_force.y();
    assert_relative_eq!(small_jump, large_jump * 0.5, max_relative = 1e-9);
}
