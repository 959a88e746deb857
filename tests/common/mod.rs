pub mod macros;

use chrono::{DateTime, Duration, TimeZone, Utc};
use imon_core::config::Rules;
use imon_data::{CauseOfDeath, Lifecycle, PetState, Species, StatHearts, Weight};
use imon_io::MemoryStore;
use imon_lib::App;

/// Fixed morning start so sleep schedules don't interfere by accident.
#[allow(dead_code)]
pub fn morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap()
}

#[allow(dead_code)]
pub fn secs(n: i64) -> Duration {
    Duration::seconds(n)
}

#[allow(dead_code)]
pub struct PetBuilder {
    state: PetState,
}

#[allow(dead_code)]
impl PetBuilder {
    /// A freshly hatched Botamon born at [`morning`].
    pub fn new() -> Self {
        Self {
            state: PetState::hatched(morning()),
        }
    }

    pub fn born_at(now: DateTime<Utc>) -> Self {
        Self {
            state: PetState::hatched(now),
        }
    }

    pub fn egg() -> Self {
        Self {
            state: PetState::new_egg(morning()),
        }
    }

    pub fn species(mut self, species: Species) -> Self {
        self.state.species = species;
        self.state.weight = Weight::new(i64::from(species.base_weight()));
        self
    }

    pub fn hunger(mut self, hearts: i64) -> Self {
        self.state.hunger_hearts = StatHearts::new(hearts);
        self
    }

    pub fn strength(mut self, hearts: i64) -> Self {
        self.state.strength_hearts = StatHearts::new(hearts);
        self
    }

    pub fn weight(mut self, grams: i64) -> Self {
        self.state.weight = Weight::new(grams);
        self
    }

    pub fn poop(mut self, piles: u8) -> Self {
        self.state.poop_count = piles;
        self
    }

    pub fn care_mistakes(mut self, n: u32) -> Self {
        self.state.care_mistakes = n;
        self
    }

    pub fn injuries(mut self, n: u32) -> Self {
        self.state.injury_count = n;
        self
    }

    pub fn injured_since(mut self, when: DateTime<Utc>) -> Self {
        self.state.is_injured = true;
        self.state.injured_at = Some(when);
        self
    }

    pub fn record(mut self, wins: u32, losses: u32) -> Self {
        self.state.battle_wins = wins;
        self.state.battle_losses = losses;
        self
    }

    pub fn trainings(mut self, n: u32) -> Self {
        self.state.training_count = n;
        self
    }

    pub fn asleep(mut self) -> Self {
        self.state.is_sleeping = true;
        self.state.lights_on = false;
        self
    }

    pub fn dead(mut self, cause: CauseOfDeath) -> Self {
        self.state.lifecycle = Lifecycle::Dead(cause);
        self
    }

    pub fn build(self) -> PetState {
        self.state
    }
}

/// An app on an in-memory store holding `state`.
#[allow(dead_code)]
pub fn app_with(state: PetState, seed: u64) -> App {
    App::open(
        Rules::default(),
        Box::new(MemoryStore::with_state(state.clone())),
        seed,
        state.last_advanced_at,
    )
    .expect("default rules are valid")
}
