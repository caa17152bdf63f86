//! Foreground driver around the generation scheduler.
//!
//! The app owns the scheduler and plays the role of a presentation loop:
//! it polls the latest published generation at a throttled rate, records a
//! population history, and never touches an in-progress buffer.

use std::collections::VecDeque;
use std::thread;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lattica_core::config::SimConfig;
use lattica_core::lattice::Lattice;
use lattica_core::metrics::Metrics;
use lattica_core::scheduler::GenerationScheduler;
use lattica_core::seed::{self, SeedStrategy};

pub mod view;

/// How many observed populations the app keeps for reporting.
const HISTORY_LEN: usize = 60;

pub struct App {
    pub config: SimConfig,
    scheduler: GenerationScheduler,
    pub last_index: u64,
    pub pop_history: VecDeque<u64>,
}

impl App {
    /// Loads `path`, writing a default config file first when none exists.
    pub fn load_config(path: &str) -> SimConfig {
        if let Ok(content) = std::fs::read_to_string(path) {
            match SimConfig::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("Warning: Failed to load {}: {}", path, e);
                }
            }
        }
        let default = SimConfig::default();
        if !std::path::Path::new(path).exists() {
            if let Ok(toml_str) = toml::to_string(&default) {
                let _ = std::fs::write(path, toml_str);
            }
        }
        default
    }

    /// Validates the configuration, seeds the initial lattice, and starts
    /// the background scheduler.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let lattice = build_seed_lattice(&config)?;
        tracing::info!(
            size = config.lattice.size,
            population = lattice.population(),
            "Seeded initial generation"
        );
        let scheduler = GenerationScheduler::start_with_metrics(
            lattice,
            config.rule.clone(),
            config.cadence(),
            Metrics::new(config.timing.log_interval),
        )?;
        Ok(Self {
            config,
            scheduler,
            last_index: 0,
            pop_history: VecDeque::with_capacity(HISTORY_LEN),
        })
    }

    /// Latest published generation, for callers that embed the app.
    #[must_use]
    pub fn latest(&self) -> std::sync::Arc<lattica_core::Generation> {
        self.scheduler.latest()
    }

    /// Polls the scheduler until `generations` have been observed (forever
    /// when unbounded) or the lattice dies out.
    ///
    /// The poll interval is a multiple of the compute cadence so the
    /// consumer stays behind the producer rather than racing it.
    pub fn run(&mut self, generations: Option<u64>, watch: bool) -> Result<()> {
        let poll = self.config.poll_interval();
        loop {
            let generation = self.scheduler.latest();
            if generation.index > self.last_index {
                self.last_index = generation.index;
                let population = generation.lattice.population();
                self.pop_history.push_back(population as u64);
                if self.pop_history.len() > HISTORY_LEN {
                    self.pop_history.pop_front();
                }
                tracing::debug!(
                    generation = generation.index,
                    population = population,
                    "Observed generation"
                );
                if watch {
                    let slice = generation.lattice.size() / 2;
                    println!("{}", view::render_slice(&generation.lattice, slice)?);
                    println!(
                        "generation {}  population {}",
                        generation.index, population
                    );
                }
                if population == 0 {
                    tracing::info!(generation = generation.index, "Lattice died out");
                    break;
                }
            }
            if let Some(limit) = generations {
                if self.last_index >= limit {
                    break;
                }
            }
            thread::sleep(poll);
        }
        self.scheduler.stop();
        Ok(())
    }
}

/// Builds the initial lattice for the configured seeding strategy.
pub fn build_seed_lattice(config: &SimConfig) -> Result<Lattice> {
    let mut lattice = Lattice::new(config.lattice.size)?;
    match &config.seeding {
        SeedStrategy::UniformRandom { probability } => {
            let mut rng = match config.lattice.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            seed::uniform_random(&mut lattice, *probability, &mut rng)?;
        }
        SeedStrategy::CenterCluster => seed::center_cluster(&mut lattice)?,
        SeedStrategy::Pattern { rle, placement } => {
            let pattern = lattica_io::pattern::decode(rle).context("decoding seed pattern")?;
            seed::place_pattern(&mut lattice, &pattern.rows, *placement)?;
        }
    }
    Ok(lattice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattica_core::config::LatticeConfig;
    use lattica_core::seed::PatternPlacement;

    #[test]
    fn test_seed_lattice_center_cluster() {
        let config = SimConfig::default();
        let lattice = build_seed_lattice(&config).unwrap();
        assert_eq!(lattice.population(), 5);
    }

    #[test]
    fn test_seed_lattice_random_reproducible() {
        let config = SimConfig {
            lattice: LatticeConfig {
                size: 10,
                seed: Some(7),
            },
            seeding: SeedStrategy::UniformRandom { probability: 0.2 },
            ..Default::default()
        };
        let a = build_seed_lattice(&config).unwrap();
        let b = build_seed_lattice(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_lattice_pattern() {
        let config = SimConfig {
            lattice: LatticeConfig {
                size: 9,
                seed: None,
            },
            seeding: SeedStrategy::Pattern {
                rle: "bob$2bo$3o!".to_string(),
                placement: PatternPlacement::Centered,
            },
            ..Default::default()
        };
        let lattice = build_seed_lattice(&config).unwrap();
        assert_eq!(lattice.population(), 5);
        // Centered 3x3 pattern in a size-9 lattice starts at (3, 3) on the
        // central slice.
        assert!(lattice.get(3, 4, 4).unwrap());
        assert!(lattice.get(5, 3, 4).unwrap());
    }

    #[test]
    fn test_seed_lattice_bad_pattern_is_an_error() {
        let config = SimConfig {
            seeding: SeedStrategy::Pattern {
                rle: "3o$12".to_string(),
                placement: PatternPlacement::Centered,
            },
            ..Default::default()
        };
        assert!(build_seed_lattice(&config).is_err());
    }
}
