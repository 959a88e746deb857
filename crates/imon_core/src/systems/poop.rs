use super::{is_dormant, whole_intervals};
use crate::config::Rules;
use chrono::{DateTime, Utc};
use imon_data::PetState;

/// A poop pile appears every `poop_interval_secs`, up to the pile limit.
pub fn apply(state: &mut PetState, now: DateTime<Utc>, rules: &Rules) {
    if is_dormant(state) {
        return;
    }
    let Some((ticks, advanced)) =
        whole_intervals(state.last_poop_at, now, rules.timing.poop_interval_secs)
    else {
        return;
    };

    let cap = rules.limits.max_poop_piles;
    let added = ticks.min(u64::from(cap)) as u8;
    state.poop_count = state.poop_count.saturating_add(added).min(cap);
    state.last_poop_at = advanced;
    tracing::debug!(ticks, poop = state.poop_count, "Poop piled up");
}
