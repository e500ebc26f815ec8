//! Generation driver: flies a population of rockets and breeds the next one.
//!
//! Per-rocket work (physics, collision checks, fitness) runs in parallel with
//! rayon. Anything that draws random numbers runs serially so that a seeded
//! random source reproduces the whole run.

use log::{debug, warn};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::locatable::Locatable;
use super::params::Params;
use super::rocket::Rocket;
use super::vector::Vector;
use crate::error::Result;

/// Summary of a finished generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation the numbers were measured on.
    pub generation: u32,
    /// Index of the fittest rocket.
    pub best_index: usize,
    /// Highest fitness in the population.
    pub best_fitness: f64,
    /// Mean fitness over the population.
    pub mean_fitness: f64,
    /// Rockets that survived every tick.
    pub alive: usize,
}

/// An ordered collection of rockets sharing one genome length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Population {
    /// Rockets of the current generation.
    pub rockets: Vec<Rocket>,
    /// Generation counter, starting at 0.
    pub generation: u32,
}

impl Population {
    /// Creates the first generation, every rocket parked at `params.start`.
    pub fn new<R: Rng + ?Sized>(params: &Params, rng: &mut R) -> Self {
        let rockets = (0..params.population_size)
            .map(|_| {
                let mut rocket = Rocket::new(params.lifespan, rng);
                rocket.location = params.start;
                rocket
            })
            .collect();

        Self {
            rockets,
            generation: 0,
        }
    }

    /// Advances every living rocket by one tick.
    ///
    /// Rockets that end the tick inside an obstacle or outside the canvas are
    /// killed; dead rockets stay where they crashed.
    pub fn step(&mut self, tick: usize, params: &Params) -> Result<()> {
        self.rockets
            .par_iter_mut()
            .filter(|rocket| rocket.is_alive())
            .try_for_each(|rocket| -> Result<()> {
                rocket.apply_force_at(tick)?;
                rocket.update();

                let crashed = params.obstacles.iter().any(|o| o.collides(&*rocket));
                if crashed || !on_canvas(&rocket.location, params) {
                    rocket.kill();
                }
                Ok(())
            })
    }

    /// Flies the whole generation, one tick per gene.
    pub fn run_generation(&mut self, params: &Params) -> Result<()> {
        for tick in 0..params.lifespan {
            self.step(tick, params)?;
        }
        Ok(())
    }

    /// Fitness of every rocket, in population order.
    pub fn evaluate(&self, target: &Vector) -> Result<Vec<f64>> {
        self.rockets
            .par_iter()
            .map(|rocket| rocket.fitness(target))
            .collect()
    }

    /// Number of rockets still alive.
    pub fn alive(&self) -> usize {
        self.rockets.iter().filter(|r| r.is_alive()).count()
    }

    /// Scores the current generation and replaces it with its offspring.
    ///
    /// Parents are drawn with probability proportional to fitness, recombined
    /// with single-point crossover and mutated at `params.mutation_rate`.
    ///
    /// # Returns
    ///
    /// Statistics of the generation that was just replaced.
    pub fn next_generation<R: Rng + ?Sized>(
        &mut self,
        params: &Params,
        rng: &mut R,
    ) -> Result<GenerationStats> {
        let fitnesses = self.evaluate(&params.target)?;
        let stats = self.stats(&fitnesses);

        debug!(
            "generation {}: best {:.6} mean {:.6} alive {}/{}",
            stats.generation,
            stats.best_fitness,
            stats.mean_fitness,
            stats.alive,
            self.rockets.len()
        );
        if let Some(best) = self.rockets.get(stats.best_index) {
            debug!(
                "generation {}: best rocket ended at {} ({} from target {})",
                stats.generation,
                best.location,
                best.location.distance(&params.target),
                params.target
            );
        }
        if stats.alive == 0 && !self.rockets.is_empty() {
            warn!("generation {}: every rocket crashed", stats.generation);
        }

        let selector = match WeightedIndex::new(&fitnesses) {
            Ok(selector) => Some(selector),
            Err(e) => {
                warn!("fitness-proportional selection unavailable ({e}), picking uniformly");
                None
            }
        };

        let mut offspring = Vec::with_capacity(self.rockets.len());
        for _ in 0..self.rockets.len() {
            let (a, b) = match &selector {
                Some(selector) => (selector.sample(rng), selector.sample(rng)),
                None => (
                    rng.random_range(0..self.rockets.len()),
                    rng.random_range(0..self.rockets.len()),
                ),
            };

            let mut child = self.rockets[a].crossover(&self.rockets[b], rng)?;
            child.mutate(params.mutation_rate, rng);
            child.location = params.start;
            offspring.push(child);
        }

        self.rockets = offspring;
        self.generation += 1;

        Ok(stats)
    }

    fn stats(&self, fitnesses: &[f64]) -> GenerationStats {
        let (best_index, best_fitness) = fitnesses
            .iter()
            .copied()
            .enumerate()
            .fold((0, 0.0), |best, (i, f)| if f > best.1 { (i, f) } else { best });

        let mean_fitness = if fitnesses.is_empty() {
            0.0
        } else {
            fitnesses.iter().sum::<f64>() / fitnesses.len() as f64
        };

        GenerationStats {
            generation: self.generation,
            best_index,
            best_fitness,
            mean_fitness,
            alive: self.alive(),
        }
    }

    /// Saves the population to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a population from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let population = serde_json::from_str(&json)?;
        Ok(population)
    }
}

fn on_canvas(location: &Vector, params: &Params) -> bool {
    (0.0..=params.box_width).contains(&location.x)
        && (0.0..=params.box_height).contains(&location.y)
}
