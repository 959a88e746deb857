use super::is_dormant;
use crate::config::Rules;
use chrono::{DateTime, Utc};
use imon_data::PetState;

/// A full set of poop piles injures the pet.
pub fn apply(state: &mut PetState, now: DateTime<Utc>, rules: &Rules) {
    if is_dormant(state) || state.is_injured {
        return;
    }
    if state.poop_count >= rules.limits.max_poop_piles {
        injure(state, now);
    }
}

/// Marks a fresh injury. Shared with the training side effects.
pub(crate) fn injure(state: &mut PetState, now: DateTime<Utc>) {
    state.is_injured = true;
    state.injured_at = Some(now);
    state.injury_count += 1;
    tracing::debug!(injuries = state.injury_count, "Pet injured");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_full_poop_injures_once() {
        let rules = Rules::default();
        let mut pet = PetState::hatched(t0());
        pet.poop_count = 4;

        apply(&mut pet, t0(), &rules);
        assert!(pet.is_injured);
        assert_eq!(pet.injured_at, Some(t0()));
        assert_eq!(pet.injury_count, 1);

        apply(&mut pet, t0() + Duration::hours(1), &rules);
        assert_eq!(pet.injury_count, 1);
        assert_eq!(pet.injured_at, Some(t0()));
    }

    #[test]
    fn test_below_cap_is_fine() {
        let rules = Rules::default();
        let mut pet = PetState::hatched(t0());
        pet.poop_count = 3;
        apply(&mut pet, t0(), &rules);
        assert!(!pet.is_injured);
    }

    #[test]
    fn test_sleeping_pet_is_not_injured() {
        let rules = Rules::default();
        let mut pet = PetState::hatched(t0());
        pet.poop_count = 4;
        pet.is_sleeping = true;
        apply(&mut pet, t0(), &rules);
        assert!(!pet.is_injured);
    }
}
