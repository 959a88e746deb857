use super::ActionOutcome;
use crate::config::Rules;
use chrono::{DateTime, Utc};
use imon_data::PetState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodKind {
    /// Fills a hunger heart.
    Meat,
    /// Fills a strength heart, at twice the weight cost.
    Vitamin,
}

#[must_use]
pub fn can_feed(state: &PetState) -> bool {
    state.is_alive() && !state.is_sleeping
}

pub fn apply(
    state: &mut PetState,
    food: FoodKind,
    now: DateTime<Utc>,
    rules: &Rules,
) -> ActionOutcome {
    if !can_feed(state) {
        return ActionOutcome::Refused;
    }
    match food {
        FoodKind::Meat => {
            state.hunger_hearts.increment();
            state.weight.add(rules.feeding.meat_weight_gain);
        }
        FoodKind::Vitamin => {
            state.strength_hearts.increment();
            state.weight.add(rules.feeding.vitamin_weight_gain);
        }
    }
    state.last_fed_at = now;
    ActionOutcome::Applied
}
