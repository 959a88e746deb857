mod common;

use common::{morning, secs, PetBuilder};
use imon_core::config::Rules;
use imon_core::FoodKind;
use imon_io::{JsonFileStore, PetStore};
use imon_lib::App;
use std::fs;
use tempfile::tempdir;

fn open(path: &std::path::Path, now: chrono::DateTime<chrono::Utc>) -> App {
    let rules = Rules::default();
    let store = JsonFileStore::new(path).with_rules_fingerprint(rules.fingerprint());
    App::open(rules, Box::new(store), 7, now).unwrap()
}

#[test]
fn test_pet_survives_a_restart_of_the_program() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("saves").join("pet.json");

    let mut app = open(&path, morning());
    assert!(app.state().is_egg());
    app.hatch(morning() + secs(5)).unwrap();
    app.feed(FoodKind::Vitamin, morning() + secs(6)).unwrap();
    let id = app.state().id;
    let weight = app.state().weight;
    drop(app);

    assert!(path.exists());
    let app = open(&path, morning() + secs(7));
    assert_eq!(app.state().id, id);
    assert_eq!(app.state().weight, weight);
    assert_eq!(app.state().last_advanced_at, morning() + secs(6));
}

#[test]
fn test_corrupt_save_lays_a_new_egg() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pet.json");
    fs::write(&path, "{ not json").unwrap();

    let app = open(&path, morning());
    assert!(app.state().is_egg());
    assert_eq!(app.state().last_advanced_at, morning());
}

#[test]
fn test_save_from_other_rules_still_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pet.json");
    let pet = PetBuilder::new().care_mistakes(2).build();
    JsonFileStore::new(&path)
        .with_rules_fingerprint("someone-elses-rules")
        .save(&pet)
        .unwrap();

    let app = open(&path, morning());
    assert_eq!(app.state().id, pet.id);
    assert_eq!(app.state().care_mistakes, 2);
}

#[test]
fn test_restart_replaces_the_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pet.json");
    let pet = PetBuilder::new().build();
    JsonFileStore::new(&path).save(&pet).unwrap();

    let mut app = open(&path, morning());
    app.restart(morning() + secs(1)).unwrap();
    drop(app);

    let reloaded = JsonFileStore::new(&path).load().unwrap().unwrap();
    assert!(reloaded.is_egg());
    assert_ne!(reloaded.id, pet.id);
}
