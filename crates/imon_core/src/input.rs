//! Drivers that feed player input into interactive sessions.
//!
//! An [`InputSource`] hands out the player's next choice, or `None` when
//! the player walks away. A cancelled run returns `None` and the pet is
//! never touched.

use crate::battle::{AttackHeight, BattleResult, BattleSession, RoundReport};
use crate::rng::RandomSource;
use crate::training::{Guess, RoundResult, TrainingOutcome, TrainingSession};

pub trait InputSource<T> {
    fn next_input(&mut self) -> Option<T>;
}

impl<T, I: Iterator<Item = T>> InputSource<T> for I {
    fn next_input(&mut self) -> Option<T> {
        self.next()
    }
}

/// Plays `session` to the end with guesses from `input`.
pub fn run_training<S, R>(
    session: &mut TrainingSession,
    input: &mut S,
    rng: &mut R,
) -> Option<(TrainingOutcome, Vec<RoundResult>)>
where
    S: InputSource<Guess> + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut rounds = Vec::new();
    while !session.is_finished() {
        let guess = input.next_input()?;
        rounds.extend(session.guess(guess, rng));
    }
    session.outcome().map(|outcome| (outcome, rounds))
}

/// Plays `session` to the end with attacks from `input`.
pub fn run_battle<S, R>(
    session: &mut BattleSession,
    input: &mut S,
    rng: &mut R,
) -> Option<(BattleResult, Vec<RoundReport>)>
where
    S: InputSource<AttackHeight> + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut rounds = Vec::new();
    while session.result().is_none() {
        let height = input.next_input()?;
        rounds.extend(session.attack(height, rng));
    }
    session.result().map(|result| (result, rounds))
}
