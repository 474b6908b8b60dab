//! Lootsim - Quest Reward Monte Carlo Simulator
//!
//! Estimates, by simulating many quest completions, the expected per-quest
//! yield of every item in a two-row weighted reward table across the five
//! fate/luck tiers.

pub mod error;
pub mod luck;
pub mod pool;
pub mod simulator;

pub use error::SimError;
pub use luck::{LuckChances, LuckTier};
pub use pool::{PoolEntry, RewardPool};
pub use simulator::{run_simulation, run_simulation_with_rng, ExpectedCountTable, SimConfig};
