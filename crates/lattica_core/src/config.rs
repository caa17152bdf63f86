//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures that map to the `config.toml` file. All
//! simulation parameters can be customized through this configuration
//! system, with CLI overrides layered on top by the driver.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [lattice]
//! size = 20
//!
//! [rule]
//! survival_min = 2
//! survival_max = 3
//! birth = [3]
//!
//! [timing]
//! cadence_seconds = 0.01
//! poll_multiplier = 2.0
//! log_interval = 100
//!
//! [seeding]
//! strategy = "center_cluster"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::rule::Rule;
use crate::seed::SeedStrategy;

/// Largest accepted lattice extent; `256^3` is already sixteen million
/// cells per pass.
pub const MAX_LATTICE_SIZE: usize = 256;

/// Lattice-level configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LatticeConfig {
    /// Extent of each axis.
    pub size: usize,
    /// RNG seed for random seeding strategies; unset draws from the OS.
    pub seed: Option<u64>,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            size: 20,
            seed: None,
        }
    }
}

/// Scheduler and consumer timing configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Minimum interval between generation passes, in seconds.
    pub cadence_seconds: f64,
    /// Consumer poll interval as a multiple of the cadence.
    pub poll_multiplier: f64,
    /// Generations between metrics log lines.
    pub log_interval: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            cadence_seconds: 0.01,
            poll_multiplier: 2.0,
            log_interval: 100,
        }
    }
}

/// Top-level simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SimConfig {
    pub lattice: LatticeConfig,
    pub rule: Rule,
    pub timing: TimingConfig,
    pub seeding: SeedStrategy,
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.lattice.size == 0 {
            return Err(CoreError::invalid_config("lattice size must be positive"));
        }
        if self.lattice.size > MAX_LATTICE_SIZE {
            return Err(CoreError::invalid_config(format!(
                "lattice size {} too large (max {})",
                self.lattice.size, MAX_LATTICE_SIZE
            )));
        }
        self.rule.validate()?;
        if self.timing.cadence_seconds.is_nan() || self.timing.cadence_seconds < 0.0 {
            return Err(CoreError::invalid_config(
                "cadence must be a non-negative number of seconds",
            ));
        }
        if self.timing.poll_multiplier.is_nan() || self.timing.poll_multiplier <= 0.0 {
            return Err(CoreError::invalid_config("poll multiplier must be positive"));
        }
        if self.timing.log_interval == 0 {
            return Err(CoreError::invalid_config("log interval must be positive"));
        }
        self.seeding.validate()?;
        Ok(())
    }

    /// Loads and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Minimum interval between generation passes.
    #[must_use]
    pub fn cadence(&self) -> Duration {
        Duration::from_secs_f64(self.timing.cadence_seconds)
    }

    /// Interval at which the consumer polls the latest generation.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs_f64(self.timing.cadence_seconds * self.timing.poll_multiplier)
    }
}
