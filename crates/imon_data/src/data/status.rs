use super::pet::{CauseOfDeath, PetState};
use super::species::{Species, Stage};
use super::values::StatHearts;
use serde::Serialize;

/// Read-only snapshot of a pet for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetStatus {
    pub species: Species,
    pub stage: Stage,
    pub hunger_hearts: StatHearts,
    pub strength_hearts: StatHearts,
    pub weight_grams: u16,
    pub age_days: u32,
    pub poop_count: u8,
    pub is_sleeping: bool,
    pub lights_on: bool,
    pub is_injured: bool,
    pub is_egg: bool,
    pub is_dead: bool,
    pub cause_of_death: Option<CauseOfDeath>,
    pub care_mistakes: u32,
    pub battle_wins: u32,
    pub battle_losses: u32,
    pub training_count: u32,
    /// Any heart empty, any poop on screen, or injured.
    pub needs_attention: bool,
}

impl From<&PetState> for PetStatus {
    fn from(state: &PetState) -> Self {
        Self {
            species: state.species,
            stage: state.stage(),
            hunger_hearts: state.hunger_hearts,
            strength_hearts: state.strength_hearts,
            weight_grams: state.weight.grams(),
            age_days: state.age,
            poop_count: state.poop_count,
            is_sleeping: state.is_sleeping,
            lights_on: state.lights_on,
            is_injured: state.is_injured,
            is_egg: state.is_egg(),
            is_dead: state.is_dead(),
            cause_of_death: state.cause_of_death(),
            care_mistakes: state.care_mistakes,
            battle_wins: state.battle_wins,
            battle_losses: state.battle_losses,
            training_count: state.training_count,
            needs_attention: state.hunger_hearts.is_empty()
                || state.strength_hearts.is_empty()
                || state.poop_count > 0
                || state.is_injured,
        }
    }
}
