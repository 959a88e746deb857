use super::ActionOutcome;
use imon_data::PetState;

#[must_use]
pub fn can_clean(state: &PetState) -> bool {
    state.is_alive() && state.poop_count > 0
}

pub fn apply(state: &mut PetState) -> ActionOutcome {
    if !can_clean(state) {
        return ActionOutcome::Refused;
    }
    state.poop_count = 0;
    ActionOutcome::Applied
}
