//! Headless runner: evolves a rocket population and logs each generation.
//!
//! Usage: `rockets [params.json] [save.json]`. Set `RUST_LOG=info` (or
//! `debug`) to see progress.

use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use rockets::error::Result;
use rockets::simulation::params::Params;
use rockets::simulation::population::Population;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let params = match args.next() {
        Some(path) => Params::load_from_file(&path)?,
        None => Params::default(),
    };
    let save_path = args.next();

    params.validate()?;

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(
        "evolving {} rockets over {} generations ({} ticks each) from {} toward {}",
        params.population_size,
        params.generations,
        params.lifespan,
        params.start,
        params.target
    );

    let mut population = Population::new(&params, &mut rng);

    for _ in 0..params.generations {
        population.run_generation(&params)?;
        let stats = population.next_generation(&params, &mut rng)?;
        info!(
            "generation {:>4}: best fitness {:.6}, alive {}",
            stats.generation, stats.best_fitness, stats.alive
        );
    }

    // fly the final generation so the saved state shows where it ends up
    population.run_generation(&params)?;

    if let Some(path) = save_path {
        population.save_to_file(&path)?;
        info!("saved population to {path}");
    }

    Ok(())
}
