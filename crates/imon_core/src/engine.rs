//! The per-tick orchestration of every time-driven system.

use crate::config::Rules;
use crate::death;
use crate::systems::{care_mistake, hunger, injury, poop, sleep, strength};
use chrono::{DateTime, Utc};
use imon_data::{CauseOfDeath, PetState};

/// Brings `state` forward to `now`.
///
/// Eggs and dead pets only get their `last_advanced_at` stamped. Otherwise
/// the systems run in a fixed order, since each one reads what the earlier
/// ones wrote: sleep gates decay, poop feeds injury, and the meters plus
/// sleep feed care-mistake accrual. Returns the cause if the pet died
/// during this advance.
pub fn advance(state: &mut PetState, now: DateTime<Utc>, rules: &Rules) -> Option<CauseOfDeath> {
    if state.is_dead() || state.is_egg() {
        state.last_advanced_at = now;
        return None;
    }

    state.age = age_in_days(state.born_at, now);

    sleep::apply(state, now, rules);
    hunger::apply(state, now, rules);
    strength::apply(state, now, rules);
    poop::apply(state, now, rules);
    injury::apply(state, now, rules);
    care_mistake::apply(state, now, rules);

    let cause = death::evaluate(state, now, rules);
    if let Some(cause) = cause {
        death::apply_death(state, cause);
        tracing::info!(
            pet = %state.id,
            species = %state.species.display_name(),
            %cause,
            "Pet died"
        );
    }

    state.last_advanced_at = now;
    cause
}

/// Whole 24-hour periods between birth and `now`.
fn age_in_days(born_at: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let days = (now - born_at).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}
