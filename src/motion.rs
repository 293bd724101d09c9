//! Motion state classification.
//!
//! Maps drag state, held keys, groundedness, and vertical velocity to the
//! discrete animation state. The classifier is pure: it reports whether a
//! jump should start rather than mutating the physics body itself, and the
//! caller performs the impulse. It runs on the animation cadence, which is
//! typically slower than the physics cadence, so the reported state may lag
//! a physics event by up to one animation tick.

/// Discrete, mutually exclusive animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    /// Grounded with no horizontal movement intent.
    #[default]
    Idle,
    /// Grounded with horizontal movement intent.
    Run,
    /// Airborne and rising.
    JumpUp,
    /// Airborne and falling.
    JumpDown,
    /// Held by the pointer; overrides everything else.
    Dragging,
}

/// Directional keys currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    /// Left arrow held.
    pub left: bool,
    /// Right arrow held.
    pub right: bool,
    /// Up arrow held.
    pub up: bool,
}

impl HeldKeys {
    /// No keys held.
    pub const NONE: Self = Self {
        left: false,
        right: false,
        up: false,
    };

    /// Horizontal movement intent: `-1`, `0`, or `1`.
    ///
    /// Both or neither horizontal key held means no intent.
    #[must_use]
    pub const fn way(&self) -> f64 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Outcome of one classification pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionDecision {
    /// The animation state to show.
    pub state: MotionState,
    /// Whether the caller should apply the jump impulse this tick.
    pub start_jump: bool,
}

/// Classifies the current motion state.
///
/// Dragging has absolute priority. A held up-key while grounded asks the
/// caller to start a jump and already reports `JumpUp`, since the impulse
/// makes the body rise on the next physics tick. Airborne states split
/// purely on the sign of the vertical velocity (positive is down).
///
/// # Examples
///
/// ```
/// use deskmate::motion::{classify, HeldKeys, MotionState};
///
/// let decision = classify(true, HeldKeys::NONE, true, 0.0);
/// assert_eq!(decision.state, MotionState::Dragging);
/// assert!(!decision.start_jump);
///
/// let falling = classify(false, HeldKeys::NONE, false, 5.0);
/// assert_eq!(falling.state, MotionState::JumpDown);
/// ```
#[must_use]
pub fn classify(dragging: bool, keys: HeldKeys, grounded: bool, velocity_y: f64) -> MotionDecision {
    if dragging {
        return MotionDecision {
            state: MotionState::Dragging,
            start_jump: false,
        };
    }

    if keys.up && grounded {
        return MotionDecision {
            state: MotionState::JumpUp,
            start_jump: true,
        };
    }

    if !grounded {
        let state = if velocity_y > 0.0 {
            MotionState::JumpDown
        } else {
            MotionState::JumpUp
        };
        return MotionDecision {
            state,
            start_jump: false,
        };
    }

    let state = if keys.way() == 0.0 {
        MotionState::Idle
    } else {
        MotionState::Run
    };
    MotionDecision {
        state,
        start_jump: false,
    }
}
