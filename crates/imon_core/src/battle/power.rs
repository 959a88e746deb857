use crate::config::Rules;
use imon_data::{Attribute, PetState};

/// Base power of the species plus a bonus per strength heart, halved
/// (by default) when the pet is overweight.
#[must_use]
pub fn battle_power(state: &PetState, rules: &Rules) -> f64 {
    let base = f64::from(state.species.base_power())
        + f64::from(state.strength_hearts.value()) * rules.battle.strength_power_per_heart;
    if state.weight.is_overweight() {
        base * rules.battle.overweight_multiplier
    } else {
        base
    }
}

/// Stage HP, plus one each for well-kept hunger and strength.
#[must_use]
pub fn battle_hp(state: &PetState) -> u32 {
    let mut hp = state.stage().battle_hp();
    if state.hunger_hearts.value() >= 3 {
        hp += 1;
    }
    if state.strength_hearts.value() >= 3 {
        hp += 1;
    }
    hp
}

/// `base` with the attribute bonus applied when `attribute` has the upper
/// hand over `against`.
#[must_use]
pub fn effective_power(base: f64, attribute: Attribute, against: Attribute, rules: &Rules) -> f64 {
    if attribute.has_advantage_over(against) {
        base * rules.battle.attribute_bonus
    } else {
        base
    }
}
