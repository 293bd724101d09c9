//! Core logic for an animated desktop companion.
//!
//! The crate owns the simulation: a per-tick physics integrator
//! (gravity, jump impulses, friction, air resistance, screen-bounded
//! motion), a motion state classifier, and the animation frame selector the
//! states drive. Window creation, image loading, and input plumbing are
//! external collaborators: the core consumes input intent and geometry and
//! produces position, facing, and a frame to draw.

pub mod animation;
pub mod config;
pub mod constants;
pub mod drag;
pub mod logging;
pub mod motion;
pub mod numeric;
pub mod pet;
pub mod physics;
pub mod vector;

pub use constants::*;

// Re-export commonly used items
pub use animation::{AnimationSelector, AnimationSet, Frame};
pub use config::{Config, ConfigError, PhysicsSettings};
pub use drag::{DragSample, DragTracker};
pub use logging::init as init_logging;
pub use motion::{classify, HeldKeys, MotionDecision, MotionState};
pub use pet::Pet;
pub use physics::{PhysicsBody, PhysicsConstants, PixelSize};
pub use vector::{Vec2, VectorError};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use deskmate::prelude::*;
    //! ```

    pub use crate::animation::Frame;
    pub use crate::config::Config;
    pub use crate::drag::DragSample;
    pub use crate::motion::{HeldKeys, MotionState};
    pub use crate::pet::Pet;
    pub use crate::physics::PixelSize;
    pub use crate::vector::Vec2;
}
