//! Pointer drag tracking and fling synthesis.
//!
//! While the sprite is dragged the physics cadence is suspended and the
//! pointer drives the position directly. The tracker keeps a short window of
//! recent pointer samples; at release it turns them into a fling velocity:
//! pixels per millisecond over the window, divided by the physics tick rate
//! into simulation units, then rescaled sub-linearly so violent flings
//! become plausible impulses instead of being clamped to a maximum speed.

use std::collections::VecDeque;

use crate::constants::{DRAG_SAMPLE_WINDOW_MS, EPSILON, FLING_EXPONENT};
use crate::vector::Vec2;

/// One pointer observation during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Pointer position in screen pixels.
    pub position: Vec2,
    /// Timestamp in milliseconds, monotonic within one drag.
    pub timestamp_ms: f64,
}

impl DragSample {
    /// Creates a sample.
    #[must_use]
    pub const fn new(position: Vec2, timestamp_ms: f64) -> Self {
        Self {
            position,
            timestamp_ms,
        }
    }
}

/// Bounded window of drag samples for velocity estimation.
///
/// Samples older than [`DRAG_SAMPLE_WINDOW_MS`] relative to the newest are
/// pruned on every push, so the release estimate averages over a short
/// window rather than a single frame pair, which tames frame-timing noise.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    samples: VecDeque<DragSample>,
}

impl DragTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer sample and prunes ones that fell out of the window.
    pub fn push(&mut self, sample: DragSample) {
        let horizon = sample.timestamp_ms - DRAG_SAMPLE_WINDOW_MS;
        self.samples.push_back(sample);
        while let Some(oldest) = self.samples.front() {
            if oldest.timestamp_ms >= horizon {
                break;
            }
            self.samples.pop_front();
        }
    }

    /// Number of samples currently in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Synthesises the release velocity in simulation units.
    ///
    /// Returns the zero vector when the window is degenerate: fewer than two
    /// samples, no elapsed time, or no effective displacement.
    #[must_use]
    pub fn fling_velocity(&self, ticks_per_second: f64) -> Vec2 {
        let (Some(oldest), Some(newest)) = (self.samples.front(), self.samples.back()) else {
            return Vec2::ZERO;
        };
        let elapsed_ms = newest.timestamp_ms - oldest.timestamp_ms;
        if elapsed_ms < EPSILON {
            return Vec2::ZERO;
        }

        // px/ms over the window, then into per-tick simulation units.
        let raw = newest
            .position
            .sub(oldest.position)
            .scale(1.0 / elapsed_ms);
        let scaled = raw.scale(1.0 / ticks_per_second);

        let magnitude = scaled.magnitude();
        if magnitude < EPSILON {
            return Vec2::ZERO;
        }
        scaled.normalize().scale(magnitude.powf(FLING_EXPONENT))
    }
}
