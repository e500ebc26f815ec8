//! Rectangular obstacles that kill rockets on contact.

use serde::{Deserialize, Serialize};

use super::locatable::Locatable;
use super::vector::Vector;

/// An axis-aligned rectangle.
///
/// `a` is the upper-left corner and `b` the lower-right corner; callers are
/// expected to keep `a.x < b.x` and `a.y < b.y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Upper-left corner.
    pub a: Vector,
    /// Lower-right corner.
    pub b: Vector,
}

impl Obstacle {
    /// Creates an obstacle from its two corners' coordinates.
    ///
    /// # Arguments
    ///
    /// * `x1`, `y1` - Upper-left corner
    /// * `x2`, `y2` - Lower-right corner
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            a: Vector::new(x1, y1),
            b: Vector::new(x2, y2),
        }
    }

    /// Returns `true` if the entity lies strictly inside the rectangle.
    ///
    /// Points on an edge do not collide.
    pub fn collides(&self, entity: &impl Locatable) -> bool {
        let p = entity.location();
        self.a.x < p.x && p.x < self.b.x && self.a.y < p.y && p.y < self.b.y
    }

    /// Integer corner coordinates for rendering, both shifted by `offset`.
    pub fn to_int_tuple(&self, offset: f64) -> ((i32, i32), (i32, i32)) {
        (self.a.to_int_tuple(offset), self.b.to_int_tuple(offset))
    }

    /// Whether the corners describe a non-empty rectangle.
    pub fn is_well_formed(&self) -> bool {
        self.a.x < self.b.x && self.a.y < self.b.y
    }
}
