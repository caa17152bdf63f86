//! # Lattica Core
//!
//! Simulation core for a 3D Life-like cellular automaton on a toroidal
//! lattice.
//!
//! The crate is built around three pieces:
//! - **Lattice**: a fixed-size cubic boolean grid with flat storage
//! - **Rule engine**: pure neighbor-count and transition predicates over
//!   the 26-cell wrapped neighborhood
//! - **Generation scheduler**: a background pass-and-publish loop whose
//!   only synchronization point is an atomic handle swap, so readers never
//!   observe a half-computed grid
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use lattica_core::lattice::Lattice;
//! use lattica_core::rule::Rule;
//! use lattica_core::scheduler::GenerationScheduler;
//! use lattica_core::seed;
//!
//! let mut lattice = Lattice::new(8)?;
//! seed::center_cluster(&mut lattice)?;
//!
//! let mut scheduler =
//!     GenerationScheduler::start(lattice, Rule::default(), Duration::from_millis(10))?;
//! let generation = scheduler.latest();
//! assert_eq!(generation.lattice.size(), 8);
//! scheduler.stop();
//! # Ok::<(), lattica_core::CoreError>(())
//! ```

/// Strongly-typed configuration with TOML loading and validation
pub mod config;
/// Error taxonomy for lattice, rule, and scheduler operations
pub mod error;
/// 3D boolean lattice storage and indexing
pub mod lattice;
/// Pass timing and population metrics
pub mod metrics;
/// Life-like rule evaluation over the toroidal neighborhood
pub mod rule;
/// Background generation loop with atomic publication
pub mod scheduler;
/// Initial-generation seeding strategies
pub mod seed;

pub use config::SimConfig;
pub use error::CoreError;
pub use lattice::Lattice;
pub use metrics::{init_logging, Metrics};
pub use rule::{count_neighbors, Rule};
pub use scheduler::{Generation, GenerationScheduler};
pub use seed::{PatternPlacement, SeedStrategy};
