//! Monte Carlo quest reward simulator.
//!
//! Runs thousands of simulated quest completions per fate/luck tier to
//! estimate the expected per-quest yield of every item in a two-row weighted
//! reward table:
//! - 4 guaranteed draws from row A and 1 from row B per quest
//! - up to 4 bonus draws from row A and 7 from row B, each gated on the
//!   active tier's continuation chance
//!
//! The per-trial mechanics live in `reward_sim`, the tier × trial loop in
//! `runner`, and the published table in `report`.

mod config;
mod report;
mod reward_sim;
mod runner;

pub use config::SimConfig;
pub use report::ExpectedCountTable;
pub use reward_sim::{BONUS_CAP_A, BONUS_CAP_B, GUARANTEED_SLOTS_A, GUARANTEED_SLOTS_B};
pub use runner::{run_simulation, run_simulation_with_rng};
