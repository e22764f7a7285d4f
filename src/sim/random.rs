//! Random source for bounce jitter, spawn variance and ball color
//!
//! Every random draw in the simulation goes through [`RandomSource`], so tests
//! and replays can substitute a scripted sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform draws used by the simulation
pub trait RandomSource {
    /// Uniform value in `[lo, hi]`
    fn uniform(&mut self, lo: f32, hi: f32) -> f32;

    /// Uniform index in `[0, len)`; `len` must be non-zero
    fn index(&mut self, len: usize) -> usize;
}

/// PCG-backed random source
#[derive(Debug, Clone)]
pub struct SimRng {
    rng: Pcg32,
}

impl SimRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Unseeded source (the normal game)
    pub fn from_os_rng() -> Self {
        Self {
            rng: Pcg32::from_os_rng(),
        }
    }
}

impl RandomSource for SimRng {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len.max(1))
    }
}

/// Replays a fixed cycle of unit values in `[0, 1]`
///
/// `uniform(lo, hi)` maps a unit value `t` to `lo + t * (hi - lo)`, so a
/// constant `0.5` yields zero jitter on any symmetric range.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f32>) -> Self {
        let values = if values.is_empty() { vec![0.5] } else { values };
        Self {
            values: values.into_iter().map(|v| v.clamp(0.0, 1.0)).collect(),
            cursor: 0,
        }
    }

    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    fn next_unit(&mut self) -> f32 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        let t = self.next_unit();
        lo + t * (hi - lo)
    }

    fn index(&mut self, len: usize) -> usize {
        let t = self.next_unit();
        ((t * len as f32) as usize).min(len.saturating_sub(1))
    }
}
