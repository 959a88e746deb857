use crate::actions::ActionOutcome;
use chrono::{DateTime, Utc};
use imon_data::PetState;

/// Cracks an egg open into a Botamon born at `now`, keeping its id.
pub fn hatch(state: &mut PetState, now: DateTime<Utc>) -> ActionOutcome {
    if !state.is_egg() {
        return ActionOutcome::Refused;
    }
    *state = PetState::hatched_with_id(state.id, now);
    tracing::info!(pet = %state.id, "Egg hatched");
    ActionOutcome::Applied
}
