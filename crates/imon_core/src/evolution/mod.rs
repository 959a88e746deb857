//! Stage-to-stage evolution.
//!
//! [`EvolutionChart`] is a flat list of guarded transitions. [`check_evolution`]
//! picks the first matching row for the pet's species and [`evolve`] applies it.

pub mod chart;
pub mod requirement;

pub use chart::EvolutionChart;
pub use requirement::EvolutionRequirement;

use chrono::{DateTime, Utc};
use imon_data::{PetState, Species, Stage, StatHearts, Weight};

/// Target species the pet is ready to evolve into, if any.
#[must_use]
pub fn check_evolution(
    state: &PetState,
    now: DateTime<Utc>,
    chart: &EvolutionChart,
) -> Option<Species> {
    if !state.is_alive() || state.stage() == Stage::Ultimate {
        return None;
    }

    let specific = chart
        .evolutions_for(state.species)
        .filter(|row| !row.is_default);
    let fallback = chart
        .evolutions_for(state.species)
        .filter(|row| row.is_default);

    specific
        .chain(fallback)
        .find(|row| row.is_satisfied(state, now))
        .map(|row| row.to)
}

/// Turns the pet into `target` and starts its next stage from scratch.
pub fn evolve(state: &mut PetState, target: Species, now: DateTime<Utc>) {
    let from = state.species;
    state.species = target;
    state.weight = Weight::new(i64::from(target.base_weight()));
    state.evolved_at = now;
    state.hunger_hearts = StatHearts::FULL;
    state.strength_hearts = StatHearts::FULL;
    state.care_mistakes = 0;
    state.battle_wins = 0;
    state.battle_losses = 0;
    state.training_count = 0;
    tracing::info!(
        pet = %state.id,
        from = %from.display_name(),
        to = %target.display_name(),
        "Pet evolved"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    fn pet(species: Species) -> PetState {
        let mut pet = PetState::hatched(t0());
        pet.species = species;
        pet
    }

    #[test]
    fn test_botamon_grows_unconditionally() {
        let chart = EvolutionChart::standard();
        let mut botamon = pet(Species::Botamon);
        botamon.care_mistakes = 10;
        assert_eq!(check_evolution(&botamon, t0() + Duration::seconds(119), &chart), None);
        assert_eq!(
            check_evolution(&botamon, t0() + Duration::seconds(120), &chart),
            Some(Species::Koromon)
        );
    }

    #[test]
    fn test_koromon_branches_on_care() {
        let chart = EvolutionChart::standard();
        let later = t0() + Duration::seconds(600);
        let mut koromon = pet(Species::Koromon);

        for (mistakes, expected) in [
            (0, Species::Agumon),
            (1, Species::Agumon),
            (2, Species::Betamon),
            (3, Species::Betamon),
        ] {
            koromon.care_mistakes = mistakes;
            assert_eq!(check_evolution(&koromon, later, &chart), Some(expected));
        }
    }

    #[test]
    fn test_specific_rows_preempt_fallback() {
        let chart = EvolutionChart::standard();
        let later = t0() + Duration::seconds(3_600);
        let mut agumon = pet(Species::Agumon);

        agumon.battle_wins = 5;
        assert_eq!(check_evolution(&agumon, later, &chart), Some(Species::Greymon));

        // Greymon's row needs wins; Devimon's row is next in line.
        agumon.battle_wins = 0;
        assert_eq!(check_evolution(&agumon, later, &chart), Some(Species::Devimon));

        agumon.care_mistakes = 5;
        assert_eq!(check_evolution(&agumon, later, &chart), Some(Species::Numemon));

        agumon.training_count = 16;
        assert_eq!(check_evolution(&agumon, later, &chart), Some(Species::Meramon));
    }

    #[test]
    fn test_greymon_needs_a_strong_record() {
        let chart = EvolutionChart::standard();
        let later = t0() + Duration::seconds(7_200);
        let mut greymon = pet(Species::Greymon);
        assert_eq!(check_evolution(&greymon, later, &chart), None);

        greymon.battle_wins = 16;
        greymon.battle_losses = 4;
        assert_eq!(check_evolution(&greymon, later, &chart), Some(Species::MetalGreymon));
    }

    #[test]
    fn test_ultimate_and_dead_are_terminal() {
        let chart = EvolutionChart::standard();
        let far = t0() + Duration::days(30);
        assert_eq!(check_evolution(&pet(Species::MetalGreymon), far, &chart), None);

        let mut dead = pet(Species::Botamon);
        dead.lifecycle = imon_data::Lifecycle::Dead(imon_data::CauseOfDeath::Injuries);
        assert_eq!(check_evolution(&dead, far, &chart), None);
    }

    #[test]
    fn test_evolve_resets_stage_counters() {
        let mut agumon = pet(Species::Agumon);
        agumon.care_mistakes = 3;
        agumon.battle_wins = 7;
        agumon.battle_losses = 2;
        agumon.training_count = 20;
        agumon.hunger_hearts = StatHearts::EMPTY;
        agumon.weight = Weight::new(70);
        agumon.injury_count = 2;
        let id = agumon.id;
        let now = t0() + Duration::hours(2);

        evolve(&mut agumon, Species::Greymon, now);
        assert_eq!(agumon.species, Species::Greymon);
        assert_eq!(agumon.id, id);
        assert_eq!(agumon.weight.grams(), 30);
        assert_eq!(agumon.evolved_at, now);
        assert_eq!(agumon.hunger_hearts, StatHearts::FULL);
        assert_eq!(agumon.care_mistakes, 0);
        assert_eq!(agumon.battle_wins, 0);
        assert_eq!(agumon.battle_losses, 0);
        assert_eq!(agumon.training_count, 0);
        assert_eq!(agumon.injury_count, 2);
    }
}
