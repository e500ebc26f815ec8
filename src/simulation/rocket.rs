//! Rocket state, physics and genetic operators.
//!
//! A rocket carries a genome of force vectors, one per simulation tick. The
//! driver feeds the gene for the current tick with [`Rocket::apply_force_at`]
//! and then integrates with [`Locatable::update`]. Collisions are detected by the
//! driver, which latches the rocket dead with [`Rocket::kill`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::locatable::Locatable;
use super::vector::Vector;
use crate::error::{Result, RocketError};

/// Fitness multiplier applied to rockets that hit an obstacle.
///
/// Kept above zero so dead lineages keep a sliver of selection weight and
/// fitness sums never collapse to zero.
pub const DEAD_FITNESS_RATE: f64 = 1e-19;

/// A ballistic agent steered by its genome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    /// Position in 2D space.
    pub location: Vector,
    /// Velocity accumulated over previous ticks.
    pub velocity: Vector,
    /// Sum of the forces applied during the current tick.
    pub acceleration: Vector,
    /// Genome: one force per tick.
    forces: Vec<Vector>,
    /// Cleared once the rocket collides; never set again.
    is_alive: bool,
}

impl Rocket {
    /// Creates a living rocket at the origin with a random genome.
    ///
    /// # Arguments
    ///
    /// * `length` - Number of genes (simulation ticks)
    /// * `rng` - Random source for the genome
    pub fn new<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        let forces = (0..length).map(|_| Vector::random(rng)).collect();
        Self::from_genome(forces)
    }

    /// Creates a living rocket at the origin with the given genome.
    pub fn from_genome(forces: Vec<Vector>) -> Self {
        Self {
            location: Vector::default(),
            velocity: Vector::default(),
            acceleration: Vector::default(),
            forces,
            is_alive: true,
        }
    }

    /// Genome length.
    pub fn length(&self) -> usize {
        self.forces.len()
    }

    /// The genome, in tick order.
    pub fn forces(&self) -> &[Vector] {
        &self.forces
    }

    /// Whether the rocket is still flying.
    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    /// Marks the rocket as crashed. There is no way back.
    pub fn kill(&mut self) {
        self.is_alive = false;
    }

    /// Adds `force` to this tick's acceleration.
    pub fn apply_force(&mut self, force: Vector) {
        self.acceleration += force;
    }

    /// Adds the gene for `tick` to this tick's acceleration.
    ///
    /// Fails with [`RocketError::TickOutOfRange`] when `tick >= length`.
    pub fn apply_force_at(&mut self, tick: usize) -> Result<()> {
        let force = *self.forces.get(tick).ok_or(RocketError::TickOutOfRange {
            tick,
            length: self.forces.len(),
        })?;
        self.apply_force(force);
        Ok(())
    }

    /// Inverse distance to `target`, scaled by [`DEAD_FITNESS_RATE`] if dead.
    ///
    /// # Returns
    ///
    /// Higher is better. Fails with [`RocketError::DegenerateDistance`] when
    /// the rocket sits exactly on the target.
    pub fn fitness(&self, target: &Vector) -> Result<f64> {
        let distance = self.location.distance(target);
        if distance == 0.0 {
            return Err(RocketError::DegenerateDistance);
        }

        let rate = if self.is_alive {
            1.0
        } else {
            DEAD_FITNESS_RATE
        };

        Ok((1.0 / distance) * rate)
    }

    /// Single-point crossover at a random midpoint.
    ///
    /// The child starts from a freshly randomized genome, then takes genes
    /// `[0, midpoint)` from `self` and `[midpoint, length)` from `other`, with
    /// `midpoint` drawn uniformly from `[1, length]`. Kinematics are fresh.
    pub fn crossover<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> Result<Self> {
        self.check_compatible(other)?;

        let mut child = Self::new(self.length(), rng);
        if other.length() > 0 {
            let midpoint = rng.random_range(1..=other.length());
            child.splice(self, other, midpoint);
        }
        Ok(child)
    }

    /// Crossover with an explicit midpoint.
    ///
    /// `midpoint` may range over `[0, length]`; `0` takes every gene from
    /// `other`. Larger values fail with [`RocketError::MidpointOutOfRange`].
    pub fn crossover_at(&self, other: &Self, midpoint: usize) -> Result<Self> {
        self.check_compatible(other)?;
        if midpoint > self.length() {
            return Err(RocketError::MidpointOutOfRange {
                midpoint,
                length: self.length(),
            });
        }

        let mut child = Self::from_genome(other.forces.clone());
        child.splice(self, other, midpoint);
        Ok(child)
    }

    /// Replaces each gene with a fresh random force with probability
    /// `mutation_rate`.
    pub fn mutate<R: Rng + ?Sized>(&mut self, mutation_rate: f64, rng: &mut R) {
        for gene in &mut self.forces {
            if rng.random::<f64>() < mutation_rate {
                *gene = Vector::random(rng);
            }
        }
    }

    fn check_compatible(&self, other: &Self) -> Result<()> {
        if self.length() == other.length() {
            Ok(())
        } else {
            Err(RocketError::GenomeLengthMismatch {
                left: self.length(),
                right: other.length(),
            })
        }
    }

    fn splice(&mut self, first: &Self, second: &Self, midpoint: usize) {
        for (i, gene) in self.forces.iter_mut().enumerate() {
            *gene = if i < midpoint {
                first.forces[i]
            } else {
                second.forces[i]
            };
        }
    }
}

impl Locatable for Rocket {
    fn location(&self) -> &Vector {
        &self.location
    }

    /// Integrates one tick: velocity, then location, then clears acceleration.
    fn update(&mut self) {
        self.velocity += self.acceleration;
        self.location += self.velocity;
        self.acceleration.reset();
    }
}
