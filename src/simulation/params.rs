use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::vector::Vector;
use crate::error::{Result, RocketError};

/// Simulation parameters for the generation driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Number of rockets per generation.
    pub population_size: usize,
    /// Ticks per generation; also the genome length.
    pub lifespan: usize,
    /// Per-gene mutation probability in `[0, 1]`.
    pub mutation_rate: f64,
    /// Number of generations the runner evolves.
    pub generations: usize,
    /// Launch position of every rocket.
    pub start: Vector,
    /// Point the rockets are evolved toward.
    pub target: Vector,
    /// Obstacles that kill rockets on contact.
    pub obstacles: Vec<Obstacle>,
    /// Canvas width; rockets leaving the canvas crash.
    pub box_width: f64,
    /// Canvas height.
    pub box_height: f64,
    /// Seed for the random source. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            population_size: 100,
            lifespan: 200,
            mutation_rate: 0.01,
            generations: 50,
            start: Vector::new(200.0, 290.0),
            target: Vector::new(200.0, 40.0),
            obstacles: vec![Obstacle::new(120.0, 150.0, 280.0, 160.0)],
            box_width: 400.0,
            box_height: 300.0,
            seed: None,
        }
    }
}

impl Params {
    /// Checks the parameters before a run.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(RocketError::InvalidParams(
                "population_size must be positive".into(),
            ));
        }
        if self.lifespan == 0 {
            return Err(RocketError::InvalidParams("lifespan must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(RocketError::InvalidParams(format!(
                "mutation_rate {} outside [0, 1]",
                self.mutation_rate
            )));
        }
        if self.box_width <= 0.0 || self.box_height <= 0.0 {
            return Err(RocketError::InvalidParams("canvas must be non-empty".into()));
        }
        if let Some(i) = self.obstacles.iter().position(|o| !o.is_well_formed()) {
            return Err(RocketError::InvalidParams(format!(
                "obstacle {i} has inverted corners"
            )));
        }
        Ok(())
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params = serde_json::from_str(&json)?;
        Ok(params)
    }
}
