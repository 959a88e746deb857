use crate::config::Rules;
use chrono::{DateTime, Duration, Utc};
use imon_data::PetState;

/// Puts the pet to bed and wakes it according to its species' hours.
///
/// A lights toggle made during the night leaves a marker behind. Once the
/// marker is older than the resolution delay, lights left on wake the pet
/// and lights left off send it back to sleep. Leaving the night window
/// always wins over a pending marker.
pub fn apply(state: &mut PetState, now: DateTime<Utc>, rules: &Rules) {
    if state.is_dead() || state.is_egg() {
        return;
    }

    let hour = rules.clock.local_hour(now);
    let should_sleep = state.species.is_sleep_time(hour);

    if let Some(toggled_at) = state.lights_toggled_during_sleep_at {
        if !should_sleep {
            if state.is_sleeping {
                wake(state);
            }
            state.lights_toggled_during_sleep_at = None;
            return;
        }

        let delay = Duration::seconds(
            i64::try_from(rules.timing.lights_toggle_resolution_secs).unwrap_or(i64::MAX),
        );
        if now - toggled_at >= delay {
            if state.lights_on {
                // The marker stays so the next pass doesn't put the pet straight back to bed.
                state.is_sleeping = false;
            } else {
                state.is_sleeping = true;
                state.lights_toggled_during_sleep_at = None;
            }
        }
        return;
    }

    if should_sleep && !state.is_sleeping {
        state.is_sleeping = true;
        state.lights_on = false;
        tracing::debug!(species = %state.species.display_name(), hour, "Fell asleep");
    } else if !should_sleep && state.is_sleeping {
        wake(state);
        tracing::debug!(species = %state.species.display_name(), hour, "Woke up");
    }
}

fn wake(state: &mut PetState) {
    state.is_sleeping = false;
    state.lights_on = true;
}
