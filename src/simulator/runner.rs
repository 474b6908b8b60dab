//! Simulation runner: drives the tier × trial loop and normalizes counts
//! into the published table.

use super::config::SimConfig;
use super::report::ExpectedCountTable;
use super::reward_sim::{simulate_trial, AggregateCounts, ItemUnion};
use crate::error::SimError;
use crate::luck::LuckTier;
use crate::pool::RewardPool;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Runs the full simulation and returns the expected-count table.
///
/// Builds a `ChaCha8Rng` from `config.seed` (entropy when unset) and defers
/// to [`run_simulation_with_rng`]. Seeded runs over the same pools produce
/// identical tables.
pub fn run_simulation(
    pool_a: &RewardPool,
    pool_b: &RewardPool,
    config: &SimConfig,
) -> Result<ExpectedCountTable, SimError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    run_simulation_with_rng(pool_a, pool_b, config, &mut rng)
}

/// Runs the full simulation against a caller-supplied random source.
///
/// For every luck tier, simulates `config.trials` quest completions and
/// tallies every drawn item; counts are divided by the trial count exactly
/// once per tier at the end. Either all five tiers complete or the call
/// fails before the first trial runs.
pub fn run_simulation_with_rng(
    pool_a: &RewardPool,
    pool_b: &RewardPool,
    config: &SimConfig,
    rng: &mut impl Rng,
) -> Result<ExpectedCountTable, SimError> {
    if config.trials == 0 {
        return Err(SimError::InvalidTrialCount {
            trials: config.trials,
        });
    }

    // Pool weights were validated at construction, so sampling cannot fail
    // past this point.
    let union = ItemUnion::build(pool_a, pool_b);

    let mut columns = Vec::with_capacity(LuckTier::ALL.len());
    for tier in LuckTier::ALL {
        let percent = config.chances.percent(tier);
        let mut counts = AggregateCounts::new(union.len());

        for _ in 0..config.trials {
            let outcome = simulate_trial(pool_a, pool_b, &union, percent, rng);
            counts.record(&outcome);
        }

        columns.push(counts.finalize(config.trials));
    }

    Ok(ExpectedCountTable::new(union.items().to_vec(), columns))
}
