#[macro_use]
mod common;

use chrono::Duration;
use common::{app_with, morning, secs, PetBuilder};
use imon_core::evolution::{check_evolution, evolve, EvolutionChart};
use imon_data::{Species, Stage};
use proptest::prelude::*;

#[test]
fn test_koromon_with_clean_record_becomes_agumon() {
    let chart = EvolutionChart::standard();
    let koromon = PetBuilder::new().species(Species::Koromon).build();
    assert_eq!(check_evolution(&koromon, morning() + secs(599), &chart), None);
    assert_eq!(
        check_evolution(&koromon, morning() + secs(600), &chart),
        Some(Species::Agumon)
    );
}

#[test]
fn test_koromon_with_three_mistakes_becomes_betamon() {
    let chart = EvolutionChart::standard();
    let koromon = PetBuilder::new()
        .species(Species::Koromon)
        .care_mistakes(3)
        .build();
    assert_eq!(
        check_evolution(&koromon, morning() + secs(600), &chart),
        Some(Species::Betamon)
    );
}

#[test]
fn test_betamon_branches() {
    let chart = EvolutionChart::standard();
    let ready = morning() + secs(3_600);

    let disciplined = PetBuilder::new()
        .species(Species::Betamon)
        .trainings(48)
        .build();
    assert_eq!(check_evolution(&disciplined, ready, &chart), Some(Species::Devimon));

    let sloppy_heavy = PetBuilder::new()
        .species(Species::Betamon)
        .care_mistakes(4)
        .weight(60)
        .build();
    // Airdramon's row comes before Seadramon's and only asks for mistakes.
    assert_eq!(check_evolution(&sloppy_heavy, ready, &chart), Some(Species::Airdramon));

    let average = PetBuilder::new().species(Species::Betamon).build();
    assert_eq!(check_evolution(&average, ready, &chart), Some(Species::Numemon));
}

#[test]
fn test_agumon_heavy_and_careless_becomes_tyrannomon() {
    let chart = EvolutionChart::standard();
    let pet = PetBuilder::new()
        .species(Species::Agumon)
        .care_mistakes(6)
        .weight(45)
        .build();
    assert_eq!(
        check_evolution(&pet, morning() + secs(3_600), &chart),
        Some(Species::Tyrannomon)
    );
}

#[test]
fn test_numemon_still_reaches_ultimate() {
    let chart = EvolutionChart::standard();
    let mut pet = PetBuilder::new().species(Species::Numemon).build();
    let target = check_evolution(&pet, morning() + secs(7_200), &chart).unwrap();
    evolve(&mut pet, target, morning() + secs(7_200));
    assert_species!(pet, Species::Monzaemon);
    assert_eq!(check_evolution(&pet, morning() + Duration::days(100), &chart), None);
}

#[test]
fn test_app_ticks_through_early_stages() {
    let mut app = app_with(PetBuilder::new().build(), 1);

    app.tick(morning() + secs(120)).unwrap();
    assert_species!(app.state(), Species::Koromon);

    // The rookie clock restarts at the Koromon evolution.
    app.tick(morning() + secs(600)).unwrap();
    assert_species!(app.state(), Species::Koromon);

    app.tick(morning() + secs(720)).unwrap();
    assert_species!(app.state(), Species::Agumon);
    assert_eq!(app.state().weight.grams(), 20);
    assert_eq!(app.metrics().evolutions(), 2);
}

fn non_ultimate_species() -> impl Strategy<Value = Species> {
    prop::sample::select(
        Species::ALL
            .iter()
            .copied()
            .filter(|s| s.stage() != Stage::Ultimate)
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_nothing_evolves_before_its_time(
        species in non_ultimate_species(),
        care in 0u32..30,
        wins in 0u32..40,
        losses in 0u32..40,
        trainings in 0u32..100,
        weight in 5i64..=99,
        awake in 0i64..120,
    ) {
        let chart = EvolutionChart::standard();
        let pet = PetBuilder::new()
            .species(species)
            .care_mistakes(care)
            .record(wins, losses)
            .trainings(trainings)
            .weight(weight)
            .build();
        prop_assert_eq!(check_evolution(&pet, morning() + secs(awake), &chart), None);
    }

    #[test]
    fn test_evolution_only_moves_forward(
        species in non_ultimate_species(),
        care in 0u32..30,
        wins in 0u32..40,
        losses in 0u32..40,
        trainings in 0u32..100,
        weight in 5i64..=99,
    ) {
        let chart = EvolutionChart::standard();
        let pet = PetBuilder::new()
            .species(species)
            .care_mistakes(care)
            .record(wins, losses)
            .trainings(trainings)
            .weight(weight)
            .build();
        let target = check_evolution(&pet, morning() + Duration::days(1), &chart);
        if let Some(target) = target {
            prop_assert!(target.stage() > species.stage());
        } else {
            // Only Greymon's lone row can refuse a pet that has waited long enough.
            prop_assert_eq!(species, Species::Greymon);
        }
    }
}
