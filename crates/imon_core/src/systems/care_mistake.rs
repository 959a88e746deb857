use super::whole_intervals;
use crate::config::Rules;
use chrono::{DateTime, Utc};
use imon_data::PetState;

/// Accrues care mistakes for neglect.
///
/// Two independent timers run here. One covers an awake pet with an empty
/// hunger or strength meter, the other covers lights left on over a
/// sleeping pet. Each adds one mistake per full care-mistake window while
/// its condition holds and is cleared as soon as the condition ends.
pub fn apply(state: &mut PetState, now: DateTime<Utc>, rules: &Rules) {
    if state.is_dead() || state.is_egg() {
        return;
    }
    let window = rules.timing.care_mistake_window_secs;

    let lights_left_on = state.is_sleeping && state.lights_on;
    let mut pending = state.pending_lights_mistake_at;
    let lights_mistakes = accrue(&mut pending, lights_left_on, now, window);
    state.pending_lights_mistake_at = pending;

    let neglected = !state.is_sleeping
        && (state.hunger_hearts.is_empty() || state.strength_hearts.is_empty());
    let mut pending = state.pending_care_mistake_at;
    let neglect_mistakes = accrue(&mut pending, neglected, now, window);
    state.pending_care_mistake_at = pending;

    let added = lights_mistakes.saturating_add(neglect_mistakes);
    if added > 0 {
        state.care_mistakes = state
            .care_mistakes
            .saturating_add(u32::try_from(added).unwrap_or(u32::MAX));
        tracing::debug!(
            added,
            total = state.care_mistakes,
            "Care mistakes accrued"
        );
    }
}

fn accrue(
    pending: &mut Option<DateTime<Utc>>,
    active: bool,
    now: DateTime<Utc>,
    window_secs: u64,
) -> u64 {
    if !active {
        *pending = None;
        return 0;
    }
    let since = *pending.get_or_insert(now);
    match whole_intervals(since, now, window_secs) {
        Some((ticks, advanced)) => {
            *pending = Some(advanced);
            ticks
        }
        None => 0,
    }
}
