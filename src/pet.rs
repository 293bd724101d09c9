//! The pet entity: orchestration of physics, state, and animation.
//!
//! A [`Pet`] owns the physics body, the animation selector, the held-key
//! state, and the drag lifecycle. Two cadences drive it from one thread:
//! the physics tick (geometry refresh, control intent, integration) and the
//! slower animation tick (state classification and frame selection). While a
//! drag is active the physics cadence is suspended — [`Pet::physics_tick`]
//! becomes a no-op — so integration never races pointer-driven moves.

use log::debug;

use crate::animation::{AnimationSelector, Frame};
use crate::config::Config;
use crate::drag::{DragSample, DragTracker};
use crate::motion::{classify, HeldKeys, MotionState};
use crate::numeric::floor_to_i32;
use crate::physics::{PhysicsBody, PhysicsConstants, PixelSize};
use crate::vector::Vec2;

/// The desktop companion.
#[derive(Debug)]
pub struct Pet {
    body: PhysicsBody,
    selector: AnimationSelector,
    keys: HeldKeys,
    state: MotionState,
    drag: Option<DragTracker>,
}

impl Pet {
    /// Creates a pet from a resolved configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            body: PhysicsBody::new(PhysicsConstants::from_config(config)),
            selector: AnimationSelector::new(config.frame_count),
            keys: HeldKeys::NONE,
            state: MotionState::Idle,
            drag: None,
        }
    }

    /// Updates which directional keys are held.
    pub fn set_held_keys(&mut self, keys: HeldKeys) {
        self.keys = keys;
    }

    /// Advances physics by one tick.
    ///
    /// Polls the current geometry, applies the horizontal key intent, and
    /// steps the integrator. Suspended entirely while a drag is active.
    pub fn physics_tick(&mut self, window: PixelSize, screen: PixelSize) {
        if self.drag.is_some() {
            return;
        }
        self.body.update_screen_params(window, screen);
        self.body.set_acceleration(self.keys.way());
        self.body.step();
    }

    /// Advances the animation by one tick and reports the frame to draw.
    ///
    /// Classifies the motion state, applies the jump impulse when the
    /// classification asks for one, and advances the selected animation set.
    pub fn animation_tick(&mut self) -> Frame {
        let decision = classify(
            self.is_dragging(),
            self.keys,
            self.body.is_grounded(),
            self.body.velocity().y(),
        );
        if decision.start_jump {
            self.body.jump();
        }
        if decision.state != self.state {
            debug!("motion state {:?} -> {:?}", self.state, decision.state);
        }
        self.state = decision.state;
        self.selector.next_frame(self.state, self.body.facing())
    }

    /// Starts a drag at the given pointer sample.
    pub fn begin_drag(&mut self, sample: DragSample) {
        debug!("drag begins at {:?}", sample.position);
        let mut tracker = DragTracker::new();
        tracker.push(sample);
        self.drag = Some(tracker);
    }

    /// Moves the sprite to follow the pointer while dragging.
    ///
    /// The position overwrite bypasses physics and clamping; keeping the
    /// sprite on screen is the window glue's concern. Ignored when no drag
    /// is active.
    pub fn drag_to(&mut self, sample: DragSample) {
        let Some(tracker) = self.drag.as_mut() else {
            return;
        };
        tracker.push(sample);
        self.body.force_move(sample.position.x(), sample.position.y());
    }

    /// Ends the drag, injecting the synthesised fling velocity and resuming
    /// the physics cadence.
    pub fn end_drag(&mut self) {
        let Some(tracker) = self.drag.take() else {
            return;
        };
        let fling = tracker.fling_velocity(self.body.constants().ticks_per_second);
        debug!("drag ends, fling velocity {fling:?}");
        self.body.set_velocity(fling);
    }

    /// Whether the pointer currently holds the sprite.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Motion state reported by the last animation tick.
    #[must_use]
    pub const fn state(&self) -> MotionState {
        self.state
    }

    /// Current position in simulation coordinates.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.body.position()
    }

    /// Position as the integer pixel coordinates the window glue moves to.
    #[must_use]
    pub fn window_position(&self) -> (i32, i32) {
        let position = self.body.position();
        (floor_to_i32(position.x()), floor_to_i32(position.y()))
    }

    /// Facing direction: `1.0` right, `-1.0` left.
    #[must_use]
    pub const fn facing(&self) -> f64 {
        self.body.facing()
    }

    /// Read access to the physics body.
    #[must_use]
    pub const fn body(&self) -> &PhysicsBody {
        &self.body
    }
}
