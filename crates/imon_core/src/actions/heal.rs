use super::ActionOutcome;
use imon_data::PetState;

#[must_use]
pub fn can_heal(state: &PetState) -> bool {
    state.is_alive() && state.is_injured
}

/// Treats the current injury. The lifetime injury count is kept.
pub fn apply(state: &mut PetState) -> ActionOutcome {
    if !can_heal(state) {
        return ActionOutcome::Refused;
    }
    state.is_injured = false;
    state.injured_at = None;
    ActionOutcome::Applied
}
