//! Animation frame selection.
//!
//! The core never touches pixels: it only decides which frame index of which
//! state's image sequence the renderer should show, and whether to flip it
//! horizontally. Each [`MotionState`] owns an independent cyclic cursor, so
//! resuming a state resumes mid-cycle rather than from frame zero.

use crate::motion::MotionState;

/// An ordered, cyclic sequence of frames with a current cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSet {
    frame_count: usize,
    index: usize,
}

impl AnimationSet {
    /// Creates a set over `frame_count` frames, starting at frame zero.
    ///
    /// An empty set would make `advance` meaningless; zero clamps to one.
    #[must_use]
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count: frame_count.max(1),
            index: 0,
        }
    }

    /// Advances the cursor, wrapping to zero past the last frame, and
    /// returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index += 1;
        if self.index >= self.frame_count {
            self.index = 0;
        }
        self.index
    }

    /// Current frame index without advancing.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.index
    }

    /// Whether the cursor sits on the final frame.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.index == self.frame_count - 1
    }

    /// Rewinds the cursor to frame zero.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// What the renderer should draw for one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// The state whose image sequence is selected.
    pub state: MotionState,
    /// Frame index within that sequence.
    pub index: usize,
    /// Mirror the image horizontally (facing left).
    pub flipped: bool,
}

/// Holds one [`AnimationSet`] per motion state and advances the selected one.
#[derive(Debug, Clone)]
pub struct AnimationSelector {
    idle: AnimationSet,
    run: AnimationSet,
    jump_up: AnimationSet,
    jump_down: AnimationSet,
    dragging: AnimationSet,
}

impl AnimationSelector {
    /// Creates a selector whose sets all hold `frame_count` frames.
    #[must_use]
    pub fn new(frame_count: usize) -> Self {
        Self {
            idle: AnimationSet::new(frame_count),
            run: AnimationSet::new(frame_count),
            jump_up: AnimationSet::new(frame_count),
            jump_down: AnimationSet::new(frame_count),
            dragging: AnimationSet::new(frame_count),
        }
    }

    /// Advances the set for `state` and describes the frame to draw.
    ///
    /// Only the selected set moves; the other cursors keep their positions.
    pub fn next_frame(&mut self, state: MotionState, facing: f64) -> Frame {
        let index = self.set_mut(state).advance();
        Frame {
            state,
            index,
            flipped: facing < 0.0,
        }
    }

    /// Read access to the set backing a state.
    #[must_use]
    pub const fn set(&self, state: MotionState) -> &AnimationSet {
        match state {
            MotionState::Idle => &self.idle,
            MotionState::Run => &self.run,
            MotionState::JumpUp => &self.jump_up,
            MotionState::JumpDown => &self.jump_down,
            MotionState::Dragging => &self.dragging,
        }
    }

    fn set_mut(&mut self, state: MotionState) -> &mut AnimationSet {
        match state {
            MotionState::Idle => &mut self.idle,
            MotionState::Run => &mut self.run,
            MotionState::JumpUp => &mut self.jump_up,
            MotionState::JumpDown => &mut self.jump_down,
            MotionState::Dragging => &mut self.dragging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_to_zero() {
        let mut set = AnimationSet::new(3);
        assert_eq!(set.advance(), 1);
        assert_eq!(set.advance(), 2);
        assert!(set.is_last());
        assert_eq!(set.advance(), 0);
    }

    #[test]
    fn zero_frame_count_clamps_to_one() {
        let mut set = AnimationSet::new(0);
        assert_eq!(set.advance(), 0);
        assert!(set.is_last());
    }

    #[test]
    fn switching_state_keeps_other_cursors() {
        // Deliberate behaviour: resuming a state resumes mid-cycle.
        let mut selector = AnimationSelector::new(4);
        selector.next_frame(MotionState::Run, 1.0);
        selector.next_frame(MotionState::Run, 1.0);
        assert_eq!(selector.set(MotionState::Run).current(), 2);

        selector.next_frame(MotionState::Idle, 1.0);
        assert_eq!(selector.set(MotionState::Run).current(), 2);

        let resumed = selector.next_frame(MotionState::Run, 1.0);
        assert_eq!(resumed.index, 3);
    }

    #[test]
    fn facing_left_flips_the_frame() {
        let mut selector = AnimationSelector::new(2);
        assert!(selector.next_frame(MotionState::Idle, -1.0).flipped);
        assert!(!selector.next_frame(MotionState::Idle, 1.0).flipped);
    }
}
