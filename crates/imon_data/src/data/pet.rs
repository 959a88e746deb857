use super::species::{Species, Stage};
use super::values::{StatHearts, Weight};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a pet, kept across evolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub Uuid);

impl PetId {
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Why a pet died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CauseOfDeath {
    CareMistakes,
    Injuries,
    UntreatedInjury,
}

impl fmt::Display for CauseOfDeath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CauseOfDeath::CareMistakes => "too many care mistakes",
            CauseOfDeath::Injuries => "too many injuries",
            CauseOfDeath::UntreatedInjury => "an untreated injury",
        };
        f.write_str(text)
    }
}

/// Exactly one of these describes a pet at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    Egg,
    Alive,
    Dead(CauseOfDeath),
}

/// The whole mutable pet aggregate.
///
/// One simulation session owns it exclusively; the store persists and
/// restores it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    pub id: PetId,
    pub species: Species,

    pub hunger_hearts: StatHearts,
    pub strength_hearts: StatHearts,
    pub weight: Weight,
    /// Whole days since `born_at`.
    pub age: u32,
    pub poop_count: u8,
    pub is_sleeping: bool,
    pub lights_on: bool,

    pub is_injured: bool,
    pub injury_count: u32,
    pub care_mistakes: u32,

    pub battle_wins: u32,
    pub battle_losses: u32,
    pub training_count: u32,

    pub lifecycle: Lifecycle,

    pub born_at: DateTime<Utc>,
    pub last_fed_at: DateTime<Utc>,
    pub last_trained_at: DateTime<Utc>,
    pub last_poop_at: DateTime<Utc>,
    pub last_hunger_decay_at: DateTime<Utc>,
    pub last_strength_decay_at: DateTime<Utc>,
    pub evolved_at: DateTime<Utc>,
    #[serde(default)]
    pub injured_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pending_care_mistake_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pending_lights_mistake_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lights_toggled_during_sleep_at: Option<DateTime<Utc>>,
    pub last_advanced_at: DateTime<Utc>,
}

impl PetState {
    /// A new, unhatched egg.
    #[must_use]
    pub fn new_egg(now: DateTime<Utc>) -> Self {
        Self {
            weight: Weight::new(5),
            lifecycle: Lifecycle::Egg,
            ..Self::hatched(now)
        }
    }

    /// A Botamon that hatched at `now`.
    #[must_use]
    pub fn hatched(now: DateTime<Utc>) -> Self {
        Self::hatched_with_id(PetId::new_random(), now)
    }

    /// A Botamon that hatched at `now`, keeping an existing identity.
    #[must_use]
    pub fn hatched_with_id(id: PetId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            species: Species::Botamon,
            hunger_hearts: StatHearts::FULL,
            strength_hearts: StatHearts::FULL,
            weight: Weight::new(10),
            age: 0,
            poop_count: 0,
            is_sleeping: false,
            lights_on: true,
            is_injured: false,
            injury_count: 0,
            care_mistakes: 0,
            battle_wins: 0,
            battle_losses: 0,
            training_count: 0,
            lifecycle: Lifecycle::Alive,
            born_at: now,
            last_fed_at: now,
            last_trained_at: now,
            last_poop_at: now,
            last_hunger_decay_at: now,
            last_strength_decay_at: now,
            evolved_at: now,
            injured_at: None,
            pending_care_mistake_at: None,
            pending_lights_mistake_at: None,
            lights_toggled_during_sleep_at: None,
            last_advanced_at: now,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.species.stage()
    }

    #[must_use]
    pub fn is_egg(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Egg)
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Dead(_))
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Alive)
    }

    #[must_use]
    pub fn cause_of_death(&self) -> Option<CauseOfDeath> {
        match self.lifecycle {
            Lifecycle::Dead(cause) => Some(cause),
            _ => None,
        }
    }

    /// Win ratio over all battles fought since the last evolution, or `None`
    /// when no battle has been fought yet.
    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        let total = self.battle_wins + self.battle_losses;
        if total == 0 {
            return None;
        }
        Some(f64::from(self.battle_wins) / f64::from(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_egg_is_only_an_egg() {
        let now = Utc::now();
        let egg = PetState::new_egg(now);
        assert!(egg.is_egg());
        assert!(!egg.is_dead());
        assert!(!egg.is_alive());
        assert_eq!(egg.weight.grams(), 5);
    }

    #[test]
    fn test_hatched_defaults() {
        let now = Utc::now();
        let pet = PetState::hatched(now);
        assert!(pet.is_alive());
        assert_eq!(pet.species, Species::Botamon);
        assert_eq!(pet.weight.grams(), 10);
        assert!(pet.lights_on);
        assert_eq!(pet.evolved_at, now);
        assert_eq!(pet.last_advanced_at, now);
    }

    #[test]
    fn test_win_rate() {
        let mut pet = PetState::hatched(Utc::now());
        assert_eq!(pet.win_rate(), None);
        pet.battle_wins = 4;
        pet.battle_losses = 1;
        assert_eq!(pet.win_rate(), Some(0.8));
    }

    #[test]
    fn test_lifecycle_roundtrips_through_json() {
        let mut pet = PetState::hatched(Utc::now());
        pet.lifecycle = Lifecycle::Dead(CauseOfDeath::UntreatedInjury);
        let json = serde_json::to_string(&pet).unwrap();
        let back: PetState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pet);
        assert_eq!(back.cause_of_death(), Some(CauseOfDeath::UntreatedInjury));
    }
}
