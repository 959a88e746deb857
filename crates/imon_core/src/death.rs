use crate::config::Rules;
use chrono::{DateTime, Duration, Utc};
use imon_data::{CauseOfDeath, Lifecycle, PetState};

/// First fatal condition met, in priority order: care mistakes, then
/// injury count, then an injury left untreated for too long.
#[must_use]
pub fn evaluate(state: &PetState, now: DateTime<Utc>, rules: &Rules) -> Option<CauseOfDeath> {
    if !state.is_alive() {
        return None;
    }
    if state.care_mistakes >= rules.limits.max_care_mistakes {
        return Some(CauseOfDeath::CareMistakes);
    }
    if state.injury_count >= rules.limits.max_injuries {
        return Some(CauseOfDeath::Injuries);
    }
    if state.is_injured {
        if let Some(injured_at) = state.injured_at {
            let limit = Duration::seconds(
                i64::try_from(rules.timing.untreated_injury_secs).unwrap_or(i64::MAX),
            );
            if now - injured_at >= limit {
                return Some(CauseOfDeath::UntreatedInjury);
            }
        }
    }
    None
}

/// Marks the pet dead. Everything else about it is kept for the memorial.
pub fn apply_death(state: &mut PetState, cause: CauseOfDeath) {
    state.lifecycle = Lifecycle::Dead(cause);
}
