//! Injectable randomness.
//!
//! Every random decision in the engine goes through [`RandomSource`]. Any
//! `rand::Rng` is a source, so production code passes a seeded
//! `ChaCha8Rng`; tests that need a specific roll pass a [`ScriptedRandom`].

use rand::Rng;
use std::collections::VecDeque;

/// Narrow random interface used by the engine.
pub trait RandomSource {
    /// Uniform integer in `low..=high`. Returns `low` when the range is empty.
    fn next_int_in_range(&mut self, low: i64, high: i64) -> i64;

    /// Uniform float in `low..=high`. Returns `low` when the range is empty.
    fn next_float_in_range(&mut self, low: f64, high: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_int_in_range(&mut self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn next_float_in_range(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }
}

/// Replays queued values, clamped into whatever range is asked for.
/// An exhausted queue yields the low end of the range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    ints: VecDeque<i64>,
    floats: VecDeque<f64>,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ints(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.ints.extend(values);
        self
    }

    #[must_use]
    pub fn with_floats(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.floats.extend(values);
        self
    }

    pub fn push_int(&mut self, value: i64) {
        self.ints.push_back(value);
    }

    pub fn push_float(&mut self, value: f64) {
        self.floats.push_back(value);
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int_in_range(&mut self, low: i64, high: i64) -> i64 {
        match self.ints.pop_front() {
            Some(v) if low <= high => v.clamp(low, high),
            _ => low,
        }
    }

    fn next_float_in_range(&mut self, low: f64, high: f64) -> f64 {
        match self.floats.pop_front() {
            Some(v) if low <= high => v.clamp(low, high),
            _ => low,
        }
    }
}
