use super::{is_dormant, whole_intervals};
use crate::config::Rules;
use chrono::{DateTime, Utc};
use imon_data::PetState;

/// One strength heart is lost per `strength_interval_secs` of awake time.
pub fn apply(state: &mut PetState, now: DateTime<Utc>, rules: &Rules) {
    if is_dormant(state) {
        return;
    }
    let Some((ticks, advanced)) = whole_intervals(
        state.last_strength_decay_at,
        now,
        rules.timing.strength_interval_secs,
    ) else {
        return;
    };

    state.strength_hearts.decrement_by(ticks);
    state.last_strength_decay_at = advanced;
    tracing::debug!(
        ticks,
        strength = state.strength_hearts.value(),
        "Strength decayed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_split_calls_match_single_call() {
        let rules = Rules::default();
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();

        let mut once = PetState::hatched(t0);
        apply(&mut once, t0 + Duration::seconds(10_000), &rules);

        let mut split = PetState::hatched(t0);
        for secs in [1_000, 3_599, 3_601, 7_000, 10_000] {
            apply(&mut split, t0 + Duration::seconds(secs), &rules);
        }

        assert_eq!(once.strength_hearts, split.strength_hearts);
        assert_eq!(once.last_strength_decay_at, split.last_strength_decay_at);
        assert_eq!(once.strength_hearts.value(), 2);
    }
}
