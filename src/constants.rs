//! Simulation constants shared across the crate.
//!
//! Default physics values mirror the behaviour the companion shipped with;
//! a config file can override them at startup.

/// Components whose absolute value falls below this threshold snap to zero.
///
/// Keeps float noise out of the integrator and guards the vector helpers
/// against dividing by a near-zero magnitude.
pub const EPSILON: f64 = 1e-5;

/// Reference update rate the physics constants were tuned against.
///
/// `tps_factor = REFERENCE_TICK_RATE / ticks_per_second` rescales each
/// integration step so effective speeds stay tick-rate independent.
pub const REFERENCE_TICK_RATE: f64 = 60.0;

/// Sub-linear exponent applied to the fling magnitude at drag release.
///
/// Tames large pointer flings into plausible impulses instead of clamping
/// them to a maximum speed.
pub const FLING_EXPONENT: f64 = 0.6;

/// Multiplier on `scale_factor` for the velocity-based running predicate.
pub const RUN_SPEED_FACTOR: f64 = 2.0;

/// How far back, in milliseconds, drag samples contribute to the fling
/// velocity estimate.
pub const DRAG_SAMPLE_WINDOW_MS: f64 = 120.0;

/// Default physics tick rate in ticks per second.
pub const DEFAULT_TICKS_PER_SECOND: f64 = 60.0;
/// Default interval between animation ticks in milliseconds.
pub const DEFAULT_ANIMATION_INTERVAL_MS: u64 = 100;
/// Default downward gravity per tick, before scaling by `scale_factor`.
pub const DEFAULT_GRAVITY: f64 = 1.5;
/// Default upward jump impulse, before scaling by `sqrt(scale_factor)`.
pub const DEFAULT_JUMP_FORCE: f64 = -90.0;
/// Default horizontal control acceleration, before scaling by `scale_factor`.
pub const DEFAULT_ACCELERATION: f64 = 5.0;
/// Default fraction of velocity lost per grounded tick.
pub const DEFAULT_FRICTION: f64 = 0.15;
/// Default fraction of velocity lost per airborne tick.
pub const DEFAULT_AIR_RESISTANCE: f64 = 0.02;
/// Default offset added to the computed ground line, in pixels.
pub const DEFAULT_GROUND_OFFSET: f64 = 0.0;
/// Default number of frames per animation set.
pub const DEFAULT_FRAME_COUNT: usize = 8;
