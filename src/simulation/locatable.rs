//! Trait for entities that have a location and advance one tick at a time.
//!
//! Obstacles test collisions against anything [`Locatable`], so world
//! geometry never reaches into an entity's genome or kinematics.

use super::vector::Vector;

/// Trait for entities with a position that can be stepped forward.
pub trait Locatable {
    /// Returns the entity's current location.
    fn location(&self) -> &Vector;

    /// Advances the entity by one simulation tick.
    fn update(&mut self);
}
