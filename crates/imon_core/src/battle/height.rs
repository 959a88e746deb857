use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Where an attack is aimed. High beats medium, medium beats low, and low
/// beats high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackHeight {
    High,
    Medium,
    Low,
}

impl AttackHeight {
    pub const ALL: [AttackHeight; 3] = [AttackHeight::High, AttackHeight::Medium, AttackHeight::Low];

    #[must_use]
    pub fn beats(self, other: AttackHeight) -> bool {
        matches!(
            (self, other),
            (AttackHeight::High, AttackHeight::Medium)
                | (AttackHeight::Medium, AttackHeight::Low)
                | (AttackHeight::Low, AttackHeight::High)
        )
    }

    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let index = rng.next_int_in_range(0, Self::ALL.len() as i64 - 1);
        Self::ALL[index as usize]
    }
}
