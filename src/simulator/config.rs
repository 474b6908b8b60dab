//! Simulation configuration.

use crate::luck::LuckChances;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated quest completions per luck tier. Higher values
    /// reduce estimator variance at linear cost in runtime.
    pub trials: u64,

    /// Random seed for reproducibility (None = seed from entropy).
    pub seed: Option<u64>,

    /// Continuation chance table for the bonus reward slots.
    pub chances: LuckChances,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            seed: None,
            chances: LuckChances::default(),
        }
    }
}

impl SimConfig {
    /// Quick config for a seeded, reproducible run.
    pub fn seeded(trials: u64, seed: u64) -> Self {
        Self {
            trials,
            seed: Some(seed),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::luck::LuckTier;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.trials, 10_000);
        assert_eq!(config.seed, None);
        assert_eq!(config.chances.percent(LuckTier::Default), 69);
    }

    #[test]
    fn test_seeded_config() {
        let config = SimConfig::seeded(500, 42);
        assert_eq!(config.trials, 500);
        assert_eq!(config.seed, Some(42));
    }
}
