use crate::config::Rules;
use chrono::{DateTime, Utc};
use imon_data::PetState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightsOutcome {
    Toggled,
    /// Toggled at night; the sleep schedule settles it after a short delay.
    ToggledDuringSleep,
    Blocked,
}

#[must_use]
pub fn can_toggle(state: &PetState) -> bool {
    state.is_alive()
}

pub fn apply(state: &mut PetState, now: DateTime<Utc>, rules: &Rules) -> LightsOutcome {
    if !can_toggle(state) {
        return LightsOutcome::Blocked;
    }
    state.lights_on = !state.lights_on;

    let hour = rules.clock.local_hour(now);
    if state.species.is_sleep_time(hour) {
        state.lights_toggled_during_sleep_at = Some(now);
        LightsOutcome::ToggledDuringSleep
    } else {
        LightsOutcome::Toggled
    }
}
