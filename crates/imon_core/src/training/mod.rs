//! The high/low guessing mini-game.
//!
//! A hidden number from 1 to 9 (never 5) is drawn each round and the player
//! guesses which side of 5 it falls on. [`TrainingSession`] runs the rounds;
//! [`apply_result`] and [`apply_session`] write the result back to the pet.

pub mod session;

pub use session::{RoundResult, TrainingOutcome, TrainingPhase, TrainingSession};

use crate::actions::ActionOutcome;
use crate::config::Rules;
use crate::rng::RandomSource;
use crate::systems::injury;
use chrono::{DateTime, Utc};
use imon_data::PetState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guess {
    High,
    Low,
}

/// What the d10 roll after a round did to the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    Pooped,
    Injured,
    Nothing,
}

/// Uniform over `{1, 2, 3, 4, 6, 7, 8, 9}`.
pub fn generate_number<R: RandomSource + ?Sized>(rng: &mut R) -> u8 {
    let draw = rng.next_int_in_range(1, 8) as u8;
    if draw >= 5 {
        draw + 1
    } else {
        draw
    }
}

/// Whether `guess` is right about `number`. A 5 loses either way.
#[must_use]
pub fn evaluate_round(number: u8, guess: Guess) -> bool {
    match guess {
        Guess::High => number > 5,
        Guess::Low => number < 5,
    }
}

#[must_use]
pub fn can_train(state: &PetState) -> bool {
    state.is_alive() && !state.is_sleeping
}

/// Records one finished round of training.
pub fn apply_result<R: RandomSource + ?Sized>(
    state: &mut PetState,
    won: bool,
    now: DateTime<Utc>,
    rules: &Rules,
    rng: &mut R,
) -> ActionOutcome {
    if !can_train(state) {
        return ActionOutcome::Refused;
    }
    if won {
        state.strength_hearts.increment();
        state.weight.subtract(rules.training.weight_loss);
    }
    state.training_count += 1;
    state.last_trained_at = now;

    let effect = roll_side_effect(state, now, rules, rng);
    tracing::debug!(won, ?effect, trainings = state.training_count, "Training applied");
    ActionOutcome::Applied
}

/// Records a whole finished session: the final result once, and one
/// training per round played.
pub fn apply_session<R: RandomSource + ?Sized>(
    state: &mut PetState,
    outcome: &TrainingOutcome,
    now: DateTime<Utc>,
    rules: &Rules,
    rng: &mut R,
) -> ActionOutcome {
    let applied = apply_result(state, outcome.won, now, rules, rng);
    if applied.is_applied() {
        state.training_count += outcome.rounds_played.saturating_sub(1);
    }
    applied
}

fn roll_side_effect<R: RandomSource + ?Sized>(
    state: &mut PetState,
    now: DateTime<Utc>,
    rules: &Rules,
    rng: &mut R,
) -> SideEffect {
    match rng.next_int_in_range(1, 10) {
        1..=6 => {
            state.poop_count = (state.poop_count + 1).min(rules.limits.max_poop_piles);
            state.last_poop_at = now;
            SideEffect::Pooped
        }
        10 if !state.is_injured => {
            injury::injure(state, now);
            SideEffect::Injured
        }
        _ => SideEffect::Nothing,
    }
}
