/// Asserts the hunger and strength hearts of a pet.
#[macro_export]
macro_rules! assert_hearts {
    ($pet:expr, $hunger:expr, $strength:expr) => {
        assert_eq!(
            ($pet.hunger_hearts.value(), $pet.strength_hearts.value()),
            ($hunger, $strength),
            "hearts (hunger, strength) mismatch"
        );
    };
}

/// Asserts that a pet is dead of the given cause.
#[macro_export]
macro_rules! assert_dead_of {
    ($pet:expr, $cause:expr) => {
        assert_eq!(
            $pet.cause_of_death(),
            Some($cause),
            "{} should have died of {:?}",
            $pet.species.display_name(),
            $cause
        );
    };
}

/// Asserts the current species of a pet.
#[macro_export]
macro_rules! assert_species {
    ($pet:expr, $species:expr) => {
        assert_eq!(
            $pet.species, $species,
            "expected {:?}, pet is {:?}",
            $species, $pet.species
        );
    };
}
