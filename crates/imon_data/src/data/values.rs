use serde::{Deserialize, Serialize};

/// Upper bound of a heart meter.
pub const MAX_HEARTS: u8 = 4;
/// Lightest a pet can get, in grams.
pub const MIN_WEIGHT: u16 = 5;
/// Heaviest a pet can get, in grams. Reaching it means overweight.
pub const MAX_WEIGHT: u16 = 99;

/// A 0..=4 heart meter used for hunger and strength.
///
/// Every constructor and mutator saturates, so the value can never leave
/// its range. Deserialization goes through [`StatHearts::new`] as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct StatHearts(u8);

impl StatHearts {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(MAX_HEARTS);

    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, i64::from(MAX_HEARTS)) as u8)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn is_full(self) -> bool {
        self.0 == MAX_HEARTS
    }

    pub fn increment(&mut self) {
        self.0 = (self.0 + 1).min(MAX_HEARTS);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Decrements `times` times. Equivalent to a loop of [`decrement`](Self::decrement)
    /// without iterating over huge catch-up counts.
    pub fn decrement_by(&mut self, times: u64) {
        let steps = times.min(u64::from(MAX_HEARTS)) as u8;
        self.0 = self.0.saturating_sub(steps);
    }
}

impl Default for StatHearts {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<i64> for StatHearts {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<StatHearts> for i64 {
    fn from(hearts: StatHearts) -> Self {
        i64::from(hearts.0)
    }
}

/// Body weight in grams, clamped to `MIN_WEIGHT..=MAX_WEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Weight(u16);

impl Weight {
    #[must_use]
    pub fn new(grams: i64) -> Self {
        Self(grams.clamp(i64::from(MIN_WEIGHT), i64::from(MAX_WEIGHT)) as u16)
    }

    #[must_use]
    pub fn grams(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn is_overweight(self) -> bool {
        self.0 >= MAX_WEIGHT
    }

    pub fn add(&mut self, grams: u16) {
        self.0 = self.0.saturating_add(grams).min(MAX_WEIGHT);
    }

    pub fn subtract(&mut self, grams: u16) {
        self.0 = self.0.saturating_sub(grams).max(MIN_WEIGHT);
    }
}

impl From<i64> for Weight {
    fn from(grams: i64) -> Self {
        Self::new(grams)
    }
}

impl From<Weight> for i64 {
    fn from(weight: Weight) -> Self {
        i64::from(weight.0)
    }
}
