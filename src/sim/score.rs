//! Session score accumulator

use serde::{Deserialize, Serialize};

/// Running total of bucket payouts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    total: f64,
    /// Settle events applied so far
    settled: u64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one payout, returning the new total
    pub fn apply(&mut self, multiplier: f32) -> f64 {
        self.total += multiplier as f64;
        self.settled += 1;
        self.total
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    #[inline]
    pub fn settled(&self) -> u64 {
        self.settled
    }

    /// Score text as shown in the HUD (one decimal)
    pub fn display(&self) -> String {
        format!("{:.1}", self.total)
    }
}
