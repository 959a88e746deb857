use super::height::AttackHeight;
use super::opponent::BattleOpponent;
use super::power::{battle_power, effective_power};
use crate::config::Rules;
use crate::rng::RandomSource;
use imon_data::PetState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleResult {
    Win,
    Lose,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    PlayerHit,
    OpponentHit,
    /// Same height on both sides; nobody takes damage.
    Clash,
}

#[must_use]
pub fn resolve_round(player: AttackHeight, opponent: AttackHeight) -> RoundOutcome {
    if player.beats(opponent) {
        RoundOutcome::PlayerHit
    } else if opponent.beats(player) {
        RoundOutcome::OpponentHit
    } else {
        RoundOutcome::Clash
    }
}

/// Single-roll resolver: both sides' powers, with the attribute bonus and
/// an independent variance roll each, compared head to head. Results
/// within the draw margin of the larger power are a draw.
pub fn resolve_instant<R: RandomSource + ?Sized>(
    state: &PetState,
    opponent: &BattleOpponent,
    rules: &Rules,
    rng: &mut R,
) -> BattleResult {
    let attribute = state.species.attribute();
    let player = effective_power(battle_power(state, rules), attribute, opponent.attribute, rules);
    let foe = effective_power(opponent.power, opponent.attribute, attribute, rules);

    let variance = rules.battle.instant_variance;
    let player = player * (1.0 + rng.next_float_in_range(-variance, variance));
    let foe = foe * (1.0 + rng.next_float_in_range(-variance, variance));

    let margin = rules.battle.draw_margin * player.max(foe);
    if (player - foe).abs() < margin {
        BattleResult::Draw
    } else if player > foe {
        BattleResult::Win
    } else {
        BattleResult::Lose
    }
}

/// Battles can only be started by an awake, hatched, living pet.
#[must_use]
pub fn can_battle(state: &PetState) -> bool {
    state.is_alive() && !state.is_sleeping
}

/// Books a finished battle on the pet's record. Draws leave no trace.
pub fn apply_result(state: &mut PetState, result: BattleResult) {
    match result {
        BattleResult::Win => state.battle_wins += 1,
        BattleResult::Lose => state.battle_losses += 1,
        BattleResult::Draw => {}
    }
}
