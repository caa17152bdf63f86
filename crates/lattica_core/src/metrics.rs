//! Pass timing and population metrics for the scheduler.
//!
//! Provides structured logging and counters for monitoring generation
//! throughput and lattice health.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Metrics collector shared between the scheduler thread and its readers.
pub struct Metrics {
    generation: AtomicU64,
    population: AtomicU64,
    last_pass_micros: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Metrics {
    /// Creates a new collector logging every `log_interval` generations.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            generation: AtomicU64::new(0),
            population: AtomicU64::new(0),
            last_pass_micros: AtomicU64::new(0),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed pass-and-publish cycle.
    pub fn record_pass(&self, duration: Duration, generation: u64, population: usize) {
        self.generation.store(generation, Ordering::Relaxed);
        self.population.store(population as u64, Ordering::Relaxed);
        self.last_pass_micros
            .store(duration.as_micros() as u64, Ordering::Relaxed);

        if generation.is_multiple_of(self.log_interval) {
            tracing::info!(
                generation = generation,
                population = population,
                duration_us = duration.as_micros() as u64,
                "Generation published"
            );
        }
    }

    /// Index of the most recently recorded generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }

    /// Population of the most recently recorded generation.
    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    /// Duration of the most recent compute pass.
    #[must_use]
    pub fn last_pass(&self) -> Duration {
        Duration::from_micros(self.last_pass_micros.load(Ordering::Relaxed))
    }

    /// Elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
