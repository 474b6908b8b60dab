//! Error types for the reward simulator.
//!
//! Every precondition is checked before the first trial runs, so these are
//! the only failures the simulator can produce. There is no recovery path:
//! a bad input aborts the whole run and no partial table is ever returned.

use std::error::Error;
use std::fmt;

/// A precondition violation detected before any simulation work begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A reward pool cannot be used as a categorical distribution: it is
    /// empty, contains a negative or non-finite weight, or has no entry
    /// with a positive weight.
    InvalidPool { pool: String, reason: String },

    /// The requested trial count is zero.
    InvalidTrialCount { trials: u64 },

    /// A luck tier continuation percentage exceeds 100.
    InvalidChance { percent: u8 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidPool { pool, reason } => {
                write!(f, "invalid reward pool '{pool}': {reason}")
            }
            SimError::InvalidTrialCount { trials } => {
                write!(f, "invalid trial count {trials}: must be at least 1")
            }
            SimError::InvalidChance { percent } => {
                write!(f, "invalid continuation chance {percent}%: must be 0-100")
            }
        }
    }
}

impl Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_pool() {
        let err = SimError::InvalidPool {
            pool: "Row A".to_string(),
            reason: "pool has no entries".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Row A"), "message should name the pool: {msg}");
        assert!(
            msg.contains("no entries"),
            "message should carry the reason: {msg}"
        );
    }

    #[test]
    fn test_display_trial_count() {
        let err = SimError::InvalidTrialCount { trials: 0 };
        assert!(err.to_string().contains('0'));
    }
}
