//! Fate/Luck tiers and their bonus-slot continuation chances.

use crate::error::SimError;

/// The five fate/luck tiers, from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LuckTier {
    Horrible = 0,
    Bad = 1,
    Default = 2,
    Good = 3,
    Great = 4,
}

impl LuckTier {
    /// All tiers in fixed display order (one result column per tier).
    pub const ALL: [LuckTier; 5] = [
        LuckTier::Horrible,
        LuckTier::Bad,
        LuckTier::Default,
        LuckTier::Good,
        LuckTier::Great,
    ];

    /// Column header label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            LuckTier::Horrible => "Horrible",
            LuckTier::Bad => "Bad",
            LuckTier::Default => "Default",
            LuckTier::Good => "Good",
            LuckTier::Great => "Great",
        }
    }

    /// Position of this tier in [`LuckTier::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Percentage chance of receiving loot for each non-guaranteed reward slot,
/// one entry per fate/luck tier.
///
/// Immutable once built and passed into the simulator explicitly, so
/// alternate tables can be tested without touching any global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckChances {
    percents: [u8; 5],
}

/// Continuation chances from the in-game fate/luck table.
const DEFAULT_CHANCES: [u8; 5] = [25, 50, 69, 81, 90];

impl Default for LuckChances {
    fn default() -> Self {
        Self {
            percents: DEFAULT_CHANCES,
        }
    }
}

impl LuckChances {
    /// Builds a custom chance table. Each percentage must be 0-100.
    pub fn new(percents: [u8; 5]) -> Result<Self, SimError> {
        for &percent in &percents {
            if percent > 100 {
                return Err(SimError::InvalidChance { percent });
            }
        }
        Ok(Self { percents })
    }

    /// A table using the same percentage for every tier.
    pub fn flat(percent: u8) -> Result<Self, SimError> {
        Self::new([percent; 5])
    }

    /// Continuation percentage for one tier.
    pub fn percent(&self, tier: LuckTier) -> u8 {
        self.percents[tier.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tiers_ordered_worst_to_best() {
        let labels: Vec<&str> = LuckTier::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Horrible", "Bad", "Default", "Good", "Great"]);
        for (i, tier) in LuckTier::ALL.iter().enumerate() {
            assert_eq!(tier.index(), i);
        }
    }

    #[test]
    fn test_default_chances_match_fate_table() {
        let chances = LuckChances::default();
        assert_eq!(chances.percent(LuckTier::Horrible), 25);
        assert_eq!(chances.percent(LuckTier::Bad), 50);
        assert_eq!(chances.percent(LuckTier::Default), 69);
        assert_eq!(chances.percent(LuckTier::Good), 81);
        assert_eq!(chances.percent(LuckTier::Great), 90);
    }

    #[test]
    fn test_flat_table_applies_to_every_tier() {
        let chances = LuckChances::flat(100).unwrap();
        for tier in LuckTier::ALL {
            assert_eq!(chances.percent(tier), 100);
        }
    }

    #[test]
    fn test_chance_above_100_rejected() {
        let err = LuckChances::new([25, 50, 101, 81, 90]).unwrap_err();
        assert_eq!(err, SimError::InvalidChance { percent: 101 });
    }
}
