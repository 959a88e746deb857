use crate::config::Rules;
use crate::rng::RandomSource;
use imon_data::{Attribute, PetState, Species};
use serde::{Deserialize, Serialize};

/// A wild opponent of the pet's own stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleOpponent {
    pub species: Species,
    pub power: f64,
    pub attribute: Attribute,
}

impl BattleOpponent {
    /// Picks a different species of the same stage (the pet's own species
    /// when it is alone in its stage) with a jittered power.
    pub fn generate<R: RandomSource + ?Sized>(state: &PetState, rules: &Rules, rng: &mut R) -> Self {
        let stage = state.stage();
        let candidates: Vec<Species> = Species::ALL
            .iter()
            .copied()
            .filter(|s| s.stage() == stage && *s != state.species)
            .collect();

        let species = if candidates.is_empty() {
            state.species
        } else {
            let index = rng.next_int_in_range(0, candidates.len() as i64 - 1);
            candidates[index as usize]
        };

        let spread = rules.battle.opponent_power_spread;
        let jitter = rng.next_float_in_range(-spread, spread);
        let power = (f64::from(species.base_power()) + jitter).max(1.0);

        Self {
            species,
            power,
            attribute: species.attribute(),
        }
    }

    /// Opponents fight with their stage HP only.
    #[must_use]
    pub fn hp(&self) -> u32 {
        self.species.stage().battle_hp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pet(species: Species) -> PetState {
        let mut pet = PetState::hatched(Utc::now());
        pet.species = species;
        pet
    }

    #[test]
    fn test_same_stage_different_species() {
        let rules = Rules::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let greymon = pet(Species::Greymon);
        for _ in 0..200 {
            let foe = BattleOpponent::generate(&greymon, &rules, &mut rng);
            assert_eq!(foe.species.stage(), greymon.stage());
            assert_ne!(foe.species, Species::Greymon);
            assert_eq!(foe.attribute, foe.species.attribute());
            let base = f64::from(foe.species.base_power());
            assert!(foe.power >= base - 10.0 && foe.power <= base + 10.0);
        }
    }

    #[test]
    fn test_lonely_stage_falls_back_to_own_species() {
        let rules = Rules::default();
        let mut rng = ScriptedRandom::new().with_floats([-10.0]);
        let foe = BattleOpponent::generate(&pet(Species::Botamon), &rules, &mut rng);
        assert_eq!(foe.species, Species::Botamon);
        // 5 - 10 is floored at 1.
        assert!((foe.power - 1.0).abs() < f64::EPSILON);
        assert_eq!(foe.hp(), 1);
    }
}
