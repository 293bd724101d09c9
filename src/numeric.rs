//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between the simulation's floating-point
//! domain and the integer pixel domain of the windowing layer. They rely on
//! debug assertions to flag unexpected values while keeping call-sites
//! ergonomic.

/// Floor the value and clamp it into the `i32` domain.
///
/// Window coordinates handed to the glue layer are integer pixels;
/// non-finite inputs collapse to zero rather than poisoning the window
/// position.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn floor_to_i32(value: f64) -> i32 {
    debug_assert!(value.is_finite(), "expected finite f64 for i32 conversion");
    if !value.is_finite() {
        return 0;
    }
    let clamped = value.floor().clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

/// Convert a pixel span into `f64`, enforcing a minimum of one pixel.
///
/// Zero-sized window or screen dimensions are a caller contract violation;
/// debug builds assert while release builds clamp to the smallest safe size.
#[must_use]
pub fn span_to_f64(span: u32) -> f64 {
    debug_assert!(span > 0, "pixel span must be positive");
    f64::from(span.max(1))
}
