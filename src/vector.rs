//! Epsilon-snapped 2D vector value type.
//!
//! Every constructor snaps components whose absolute value falls below
//! [`EPSILON`](crate::constants::EPSILON) to exactly zero, so jitter from
//! float noise never survives an operation and nothing downstream divides
//! by a near-zero magnitude. Operations return new values; `Vec2` is never
//! mutated in place.

use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;

/// Errors raised by fallible vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// Scalar division by exactly zero.
    #[error("vector division by zero")]
    DivideByZero,
    /// Component index outside `{0, 1}`.
    #[error("vector component index {0} out of range")]
    IndexOutOfRange(usize),
}

/// A 2D vector with epsilon-snapped components.
///
/// # Examples
///
/// ```
/// use deskmate::vector::Vec2;
///
/// let v = Vec2::new(3.0, 4.0);
/// assert!((v.magnitude() - 5.0).abs() < 1e-9);
///
/// // Sub-epsilon components snap to exactly zero.
/// let tiny = Vec2::new(1e-7, -1e-7);
/// assert_eq!(tiny, Vec2::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vec2 {
    x: f64,
    y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector, snapping sub-epsilon components to zero.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: snap(x),
            y: snap(y),
        }
    }

    /// Horizontal component.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical component.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Component-wise sum.
    #[must_use]
    pub fn add(&self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference.
    #[must_use]
    pub fn sub(&self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Scalar multiplication.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Scalar division.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivideByZero`] when `divisor` is zero.
    pub fn div(&self, divisor: f64) -> Result<Self, VectorError> {
        if divisor == 0.0 {
            return Err(VectorError::DivideByZero);
        }
        Ok(Self::new(self.x / divisor, self.y / divisor))
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in this direction.
    ///
    /// Returns the zero vector when the magnitude is below the snap
    /// threshold; this never divides by a near-zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use deskmate::vector::Vec2;
    ///
    /// let unit = Vec2::new(3.0, 4.0).normalize();
    /// assert!((unit.x() - 0.6).abs() < 1e-9);
    /// assert!((unit.y() - 0.8).abs() < 1e-9);
    /// assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag < EPSILON {
            return Self::ZERO;
        }
        Self::new(self.x / mag, self.y / mag)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Indexed component access: `0` → x, `1` → y.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] for any other index.
    pub const fn component(&self, index: usize) -> Result<f64, VectorError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            other => Err(VectorError::IndexOutOfRange(other)),
        }
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        let [x, y] = value;
        Self::new(x, y)
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

fn snap(value: f64) -> f64 {
    if value.abs() < EPSILON {
        0.0
    } else {
        value
    }
}
