//! Two-dimensional vector used for positions, velocities and genome forces.

use std::fmt;
use std::ops::{Add, AddAssign};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A point in the plane or a displacement/force acting in it.
///
/// `Vector` is a plain value type: every operation except [`Vector::reset`]
/// and `+=` returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector {
    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Sets both components to zero.
    pub fn reset(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }

    /// Converts to integer coordinates after adding `offset` to both components.
    ///
    /// Fractions are truncated toward zero, not rounded, so `(-0.7, 1.9)`
    /// becomes `(0, 1)`.
    pub fn to_int_tuple(&self, offset: f64) -> (i32, i32) {
        ((self.x + offset) as i32, (self.y + offset) as i32)
    }

    /// Draws a vector with both components uniform in `[-1.0, 1.0)`.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random source; seed it for reproducible genomes
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = rng.random::<f64>() * 2.0 - 1.0;
        let y = rng.random::<f64>() * 2.0 - 1.0;
        Self::new(x, y)
    }
}

/// Component-wise sum.
impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Formats as `(x y)`.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.x, self.y)
    }
}
