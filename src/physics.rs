//! Per-tick physics integration for the companion sprite.
//!
//! [`PhysicsBody`] owns position, velocity, and the per-character constants,
//! and advances one tick at a time under gravity, jump impulses, horizontal
//! control acceleration, friction, air resistance, and screen-boundary
//! clamping. Dragging bypasses the integrator entirely via
//! [`PhysicsBody::force_move`]; a fling at drag release is injected with
//! [`PhysicsBody::set_velocity`].

use crate::config::Config;
use crate::constants::{REFERENCE_TICK_RATE, RUN_SPEED_FACTOR};
use crate::numeric::span_to_f64;
use crate::vector::Vec2;

/// Window and screen dimensions in pixels, polled once per physics tick.
///
/// Zero dimensions are a caller contract violation: debug builds assert,
/// release builds clamp to one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Creates a pixel size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Immutable per-character physics constants, derived once from [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsConstants {
    /// Global sprite scale.
    pub scale_factor: f64,
    /// Physics tick rate in ticks per second.
    pub ticks_per_second: f64,
    /// Horizontal control acceleration per tick, already scaled.
    pub max_acceleration: f64,
    /// Fraction of velocity lost per grounded tick.
    pub friction: f64,
    /// Fraction of velocity lost per airborne tick.
    pub air_resistance: f64,
    /// Per-tick gravity vector, already scaled.
    pub gravity: Vec2,
    /// Jump impulse vector, already scaled.
    pub jump_force: Vec2,
    /// Offset added to the computed ground line, in pixels.
    pub ground_offset: f64,
    /// `60 / ticks_per_second`: rescales integration steps to the 60 Hz
    /// reference so effective speed is tick-rate independent.
    pub tps_factor: f64,
}

impl PhysicsConstants {
    /// Derives scaled constants from a resolved configuration.
    ///
    /// Gravity and control acceleration scale linearly with `scale_factor`;
    /// the jump impulse scales with its square root so larger sprites jump
    /// proportionally higher without feeling floaty.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let scale = config.scale_factor;
        let physics = &config.physics;
        Self {
            scale_factor: scale,
            ticks_per_second: config.ticks_per_second,
            max_acceleration: physics.acceleration * scale,
            friction: physics.friction,
            air_resistance: physics.air_resistance,
            gravity: physics.gravity.scale(scale),
            jump_force: physics.jump_force.scale(scale.sqrt()),
            ground_offset: physics.ground_offset,
            tps_factor: REFERENCE_TICK_RATE / config.ticks_per_second,
        }
    }
}

/// Mutable physics state of the sprite, one instance per pet.
#[derive(Debug, Clone)]
pub struct PhysicsBody {
    constants: PhysicsConstants,
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    facing: f64,
    ground_y: f64,
    screen_width: f64,
    window_width: f64,
}

impl PhysicsBody {
    /// Creates a body at rest at the origin.
    #[must_use]
    pub fn new(constants: PhysicsConstants) -> Self {
        Self {
            constants,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            facing: 1.0,
            ground_y: 0.0,
            screen_width: 0.0,
            window_width: 0.0,
        }
    }

    /// Recomputes the ground line and horizontal clamp bounds from current
    /// window and screen geometry. Called once per physics tick, before
    /// [`PhysicsBody::step`].
    pub fn update_screen_params(&mut self, window: PixelSize, screen: PixelSize) {
        let window_height = span_to_f64(window.height);
        let screen_height = span_to_f64(screen.height);
        self.window_width = span_to_f64(window.width);
        self.screen_width = span_to_f64(screen.width);
        self.ground_y = screen_height - window_height + self.constants.ground_offset;
    }

    /// Sets the horizontal control acceleration from a movement intent.
    ///
    /// `way` is `-1`, `0`, or `1` (left, none, right); the vertical component
    /// stays untouched since vertical motion is driven by gravity and jumps
    /// only.
    pub fn set_acceleration(&mut self, way: f64) {
        debug_assert!(
            way == -1.0 || way == 0.0 || way == 1.0,
            "movement intent must be -1, 0, or 1"
        );
        self.acceleration = Vec2::new(way * self.constants.max_acceleration, self.acceleration.y());
    }

    /// Advances the body by one tick.
    ///
    /// Gravity is applied unconditionally, including while grounded; the
    /// grounded friction branch cancels it again the same tick, which keeps
    /// the grounded and airborne paths symmetric and stops downward velocity
    /// accumulating at rest.
    pub fn step(&mut self) {
        let grounded = self.is_grounded();

        self.velocity = self.velocity.add(self.constants.gravity);
        self.velocity = Vec2::new(
            self.velocity.x(),
            self.velocity.y() + self.acceleration.y(),
        );

        if grounded {
            self.velocity = self
                .velocity
                .sub(self.velocity.scale(self.constants.friction));
            self.velocity = Vec2::new(
                self.velocity.x() + self.acceleration.x(),
                self.velocity.y(),
            );
        } else {
            self.velocity = self
                .velocity
                .sub(self.velocity.scale(self.constants.air_resistance));
            // Horizontal control is attenuated while airborne.
            self.velocity = Vec2::new(
                self.velocity.x() + self.acceleration.x() * self.constants.air_resistance,
                self.velocity.y(),
            );
        }

        self.position = self
            .position
            .add(self.velocity.scale(self.constants.tps_factor));

        let clamped_x = self
            .position
            .x()
            .clamp(self.min_x(), self.max_x().max(self.min_x()));
        self.position = Vec2::new(clamped_x, self.position.y());

        if self.position.y() >= self.ground_y {
            self.position = Vec2::new(self.position.x(), self.ground_y);
            self.velocity = Vec2::new(self.velocity.x(), 0.0);
        }

        if self.velocity.x() != 0.0 {
            self.facing = self.velocity.x().signum();
        }
    }

    /// Applies the jump impulse if grounded; a no-op in the air, so there is
    /// no double jump.
    pub fn jump(&mut self) {
        if self.is_grounded() {
            self.velocity = self.velocity.add(self.constants.jump_force);
        }
    }

    /// Overwrites the position unconditionally.
    ///
    /// Used only while the pointer drags the sprite; bypasses integration
    /// and clamping for that tick.
    pub fn force_move(&mut self, x: f64, y: f64) {
        self.position = Vec2::new(x, y);
    }

    /// Overwrites the velocity unconditionally.
    ///
    /// Used once per drag, at release, to inject the fling velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Whether the body rests on (or has passed) the ground line.
    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.position.y() >= self.ground_y
    }

    /// Velocity-based running predicate: moving faster horizontally than
    /// twice the sprite scale.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.velocity.x().abs() > RUN_SPEED_FACTOR * self.constants.scale_factor
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Facing direction: `1.0` right, `-1.0` left.
    #[must_use]
    pub const fn facing(&self) -> f64 {
        self.facing
    }

    /// The per-character constants this body integrates with.
    #[must_use]
    pub const fn constants(&self) -> &PhysicsConstants {
        &self.constants
    }

    /// Ground line for the current geometry.
    #[must_use]
    pub const fn ground_y(&self) -> f64 {
        self.ground_y
    }

    fn min_x(&self) -> f64 {
        -0.2 * self.window_width
    }

    fn max_x(&self) -> f64 {
        self.screen_width - 0.8 * self.window_width
    }
}
