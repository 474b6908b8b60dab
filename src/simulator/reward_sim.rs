//! Per-trial reward generation and count accumulation.
//!
//! One simulated quest completion yields 4 guaranteed draws from row A and
//! 1 from row B, then a run of bonus draws from each row. Every bonus slot
//! is gated on a luck roll, so the number of bonus items is itself a random
//! variable: 0-4 for row A and 0-7 for row B.

use crate::pool::RewardPool;
use rand::Rng;
use std::collections::HashMap;

/// Guaranteed draws per quest from row A.
pub const GUARANTEED_SLOTS_A: usize = 4;
/// Guaranteed draws per quest from row B.
pub const GUARANTEED_SLOTS_B: usize = 1;
/// Maximum bonus draws per quest from row A.
pub const BONUS_CAP_A: usize = 4;
/// Maximum bonus draws per quest from row B.
pub const BONUS_CAP_B: usize = 7;

/// The multiset of items produced by one simulated quest completion, as
/// indices into the shared item union. Ephemeral: folded into an
/// [`AggregateCounts`] and discarded.
pub type TrialOutcome = Vec<usize>;

/// Maps both pools' entries into one shared item index space.
///
/// Rows of the final table follow this union order: row A items in
/// declaration order, then any row B items not already present.
#[derive(Debug, Clone)]
pub struct ItemUnion {
    items: Vec<String>,
    a_targets: Vec<usize>,
    b_targets: Vec<usize>,
}

impl ItemUnion {
    pub fn build(pool_a: &RewardPool, pool_b: &RewardPool) -> Self {
        let mut items = Vec::new();
        let mut index_of = HashMap::new();
        let a_targets = map_entries(&mut items, &mut index_of, pool_a);
        let b_targets = map_entries(&mut items, &mut index_of, pool_b);

        Self {
            items,
            a_targets,
            b_targets,
        }
    }

    /// Number of distinct items across both pools.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Distinct item names in stable first-seen order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Union index for a row A entry index.
    pub fn a_target(&self, entry: usize) -> usize {
        self.a_targets[entry]
    }

    /// Union index for a row B entry index.
    pub fn b_target(&self, entry: usize) -> usize {
        self.b_targets[entry]
    }
}

fn map_entries(
    items: &mut Vec<String>,
    index_of: &mut HashMap<String, usize>,
    pool: &RewardPool,
) -> Vec<usize> {
    pool.items()
        .map(|item| match index_of.get(item) {
            Some(&idx) => idx,
            None => {
                let idx = items.len();
                items.push(item.to_string());
                index_of.insert(item.to_string(), idx);
                idx
            }
        })
        .collect()
}

/// Rolls the luck gate for one bonus slot.
///
/// A uniform roll in [0, 100) must land below the continuation percentage,
/// so the gate passes with probability exactly percent/100: 100 always
/// continues to the cap and 0 never continues.
fn bonus_slot_hits(percent: u8, rng: &mut impl Rng) -> bool {
    rng.gen_range(0u8..100) < percent
}

/// Simulates one quest completion at the given continuation percentage.
pub fn simulate_trial(
    pool_a: &RewardPool,
    pool_b: &RewardPool,
    union: &ItemUnion,
    percent: u8,
    rng: &mut impl Rng,
) -> TrialOutcome {
    let mut outcome =
        Vec::with_capacity(GUARANTEED_SLOTS_A + GUARANTEED_SLOTS_B + BONUS_CAP_A + BONUS_CAP_B);

    // Guaranteed slots
    for _ in 0..GUARANTEED_SLOTS_A {
        outcome.push(union.a_target(pool_a.sample(rng)));
    }
    for _ in 0..GUARANTEED_SLOTS_B {
        outcome.push(union.b_target(pool_b.sample(rng)));
    }

    // Bonus slots: a length-capped geometric run per row. The run stops at
    // the first failed luck roll or at the row's cap, whichever comes first.
    let mut bonus_a = 0;
    while bonus_a < BONUS_CAP_A && bonus_slot_hits(percent, rng) {
        outcome.push(union.a_target(pool_a.sample(rng)));
        bonus_a += 1;
    }
    let mut bonus_b = 0;
    while bonus_b < BONUS_CAP_B && bonus_slot_hits(percent, rng) {
        outcome.push(union.b_target(pool_b.sample(rng)));
        bonus_b += 1;
    }

    outcome
}

/// Occurrence counts per union item for one luck tier.
///
/// Owned exclusively by the runner while trials are in flight; normalized
/// exactly once at the end of the tier's loop.
#[derive(Debug, Clone)]
pub struct AggregateCounts {
    counts: Vec<u64>,
}

impl AggregateCounts {
    pub fn new(num_items: usize) -> Self {
        Self {
            counts: vec![0; num_items],
        }
    }

    /// Folds one trial outcome into the tally.
    pub fn record(&mut self, outcome: &TrialOutcome) {
        for &idx in outcome {
            self.counts[idx] += 1;
        }
    }

    /// Normalizes counts into expected per-quest yields.
    pub fn finalize(&self, trials: u64) -> Vec<f64> {
        self.counts
            .iter()
            .map(|&c| c as f64 / trials as f64)
            .collect()
    }
}
