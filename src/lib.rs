//! # Rockets - Evolving Ballistic Agents
//!
//! A population of rockets is evolved, generation over generation, toward a
//! target point while avoiding rectangular obstacles. Each rocket is steered by
//! a fixed-length genome of 2D forces, one consumed per simulation tick.
//!
//! ## Core Modules
//!
//! - [`simulation::vector`] - 2D vector arithmetic
//! - [`simulation::obstacle`] - Rectangular obstacles and collision tests
//! - [`simulation::rocket`] - Rocket physics, fitness, crossover and mutation
//! - [`simulation::population`] - Parallel generation driver
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rockets::simulation::locatable::Locatable;
//! use rockets::simulation::{obstacle::Obstacle, rocket::Rocket, vector::Vector};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut rocket = Rocket::new(10, &mut rng);
//! let wall = Obstacle::new(50.0, 50.0, 60.0, 60.0);
//!
//! for tick in 0..rocket.length() {
//!     rocket.apply_force_at(tick).unwrap();
//!     rocket.update();
//!     if wall.collides(&rocket) {
//!         rocket.kill();
//!     }
//! }
//!
//! let fitness = rocket.fitness(&Vector::new(100.0, 100.0)).unwrap();
//! assert!(fitness > 0.0);
//! ```

/// Error type and result alias.
pub mod error;

/// Core simulation primitives and the generation driver.
pub mod simulation {
    /// Trait for entities with a location that advance tick by tick.
    pub mod locatable;
    /// Axis-aligned rectangular obstacles.
    pub mod obstacle;
    /// Simulation parameters.
    pub mod params;
    /// Population-level generation loop.
    pub mod population;
    /// Rockets: kinematics, fitness and genetic operators.
    pub mod rocket;
    /// 2D vector value type.
    pub mod vector;
}
