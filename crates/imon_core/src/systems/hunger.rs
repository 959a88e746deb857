use super::{is_dormant, whole_intervals};
use crate::config::Rules;
use chrono::{DateTime, Utc};
use imon_data::PetState;

/// One hunger heart is lost per `hunger_interval_secs` of awake time.
pub fn apply(state: &mut PetState, now: DateTime<Utc>, rules: &Rules) {
    if is_dormant(state) {
        return;
    }
    let Some((ticks, advanced)) = whole_intervals(
        state.last_hunger_decay_at,
        now,
        rules.timing.hunger_interval_secs,
    ) else {
        return;
    };

    state.hunger_hearts.decrement_by(ticks);
    state.last_hunger_decay_at = advanced;
    tracing::debug!(
        ticks,
        hunger = state.hunger_hearts.value(),
        "Hunger decayed"
    );
}
