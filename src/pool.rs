//! Weighted reward pools: the two "rows" of a quest's main reward table.

use crate::error::SimError;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One obtainable item and its relative weight within a pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolEntry {
    pub item: String,
    pub weight: f64,
}

/// An ordered, weighted reward pool.
///
/// Weights are relative and normalized at sampling time; they do not need to
/// sum to 1. A zero-weight entry is legal and simply never drawn, but it
/// still gets a row in the result table.
#[derive(Debug, Clone)]
pub struct RewardPool {
    label: String,
    entries: Vec<PoolEntry>,
    sampler: WeightedIndex<f64>,
}

impl RewardPool {
    /// Builds a validated pool.
    ///
    /// The pool must be non-empty, every weight must be finite and
    /// non-negative, and at least one weight must be positive. Anything else
    /// leaves the categorical distribution undefined and fails with
    /// [`SimError::InvalidPool`].
    pub fn new(label: impl Into<String>, entries: Vec<PoolEntry>) -> Result<Self, SimError> {
        let label = label.into();

        if entries.is_empty() {
            return Err(SimError::InvalidPool {
                pool: label,
                reason: "pool has no entries".to_string(),
            });
        }
        for entry in &entries {
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(SimError::InvalidPool {
                    pool: label,
                    reason: format!("item '{}' has invalid weight {}", entry.item, entry.weight),
                });
            }
        }
        if !entries.iter().any(|e| e.weight > 0.0) {
            return Err(SimError::InvalidPool {
                pool: label,
                reason: "no entry has a positive weight".to_string(),
            });
        }

        // Weights are pre-validated, so the sampler build cannot fail here.
        let sampler = WeightedIndex::new(entries.iter().map(|e| e.weight)).map_err(|e| {
            SimError::InvalidPool {
                pool: label.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            label,
            entries,
            sampler,
        })
    }

    /// Builds a pool from (item, weight) pairs.
    pub fn from_pairs(label: impl Into<String>, pairs: &[(&str, f64)]) -> Result<Self, SimError> {
        let entries = pairs
            .iter()
            .map(|(item, weight)| PoolEntry {
                item: item.to_string(),
                weight: *weight,
            })
            .collect();
        Self::new(label, entries)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Item names in declaration order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.item.as_str())
    }

    /// Item name at a given entry index.
    pub fn item_at(&self, idx: usize) -> &str {
        &self.entries[idx].item
    }

    /// Draws one entry index according to the pool's weights.
    pub fn sample(&self, rng: &mut impl Rng) -> usize {
        self.sampler.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_empty_pool_rejected() {
        let err = RewardPool::new("Row A", Vec::new()).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidPool {
                pool: "Row A".to_string(),
                reason: "pool has no entries".to_string(),
            }
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = RewardPool::from_pairs("Row B", &[("Scale", 0.5), ("Gem", -0.1)]).unwrap_err();
        assert!(matches!(err, SimError::InvalidPool { pool, .. } if pool == "Row B"));
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let err = RewardPool::from_pairs("Row A", &[("Scale", f64::NAN)]).unwrap_err();
        assert!(matches!(err, SimError::InvalidPool { .. }));
    }

    #[test]
    fn test_all_zero_weights_rejected() {
        let err = RewardPool::from_pairs("Row A", &[("Scale", 0.0), ("Gem", 0.0)]).unwrap_err();
        assert!(matches!(err, SimError::InvalidPool { reason, .. }
            if reason.contains("positive")));
    }

    #[test]
    fn test_weights_need_not_sum_to_one() {
        let pool = RewardPool::from_pairs("Row A", &[("Scale", 3.0), ("Gem", 1.0)]).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.items().collect::<Vec<_>>(), ["Scale", "Gem"]);
    }

    #[test]
    fn test_zero_weight_entry_never_sampled() {
        let pool =
            RewardPool::from_pairs("Row A", &[("Scale", 1.0), ("Unobtainable", 0.0)]).unwrap();
        let mut rng = create_test_rng();

        for _ in 0..2000 {
            assert_eq!(pool.item_at(pool.sample(&mut rng)), "Scale");
        }
    }

    #[test]
    fn test_sampling_follows_weights() {
        // 9:1 weighting should produce a heavy majority of the first item.
        let pool = RewardPool::from_pairs("Row A", &[("Hide", 9.0), ("Gem", 1.0)]).unwrap();
        let mut rng = create_test_rng();

        let trials = 10_000;
        let hides = (0..trials)
            .filter(|_| pool.item_at(pool.sample(&mut rng)) == "Hide")
            .count();

        // Expected ~9000; allow a wide margin for randomness.
        assert!(
            hides > 8500 && hides < 9500,
            "expected ~90% Hide draws, got {hides}/{trials}"
        );
    }
}
