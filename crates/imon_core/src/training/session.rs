use super::{evaluate_round, generate_number, Guess};
use crate::config::TrainingConfig;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Result of a finished training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingOutcome {
    pub won: bool,
    pub rounds_played: u32,
    pub round_wins: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingPhase {
    /// Waiting for the player's guess on a freshly drawn number.
    AwaitingGuess { round: u32, number: u8 },
    Finished(TrainingOutcome),
}

/// What happened in one guessed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub round: u32,
    pub number: u8,
    pub guess: Guess,
    pub won: bool,
}

/// A best-of-N training session.
///
/// The session never touches the pet; dropping it mid-way leaves nothing
/// behind. Hand the finished [`TrainingOutcome`] to
/// [`apply_session`](super::apply_session).
#[derive(Debug, Clone)]
pub struct TrainingSession {
    rounds: u32,
    wins_needed: u32,
    max_losses: u32,
    round_wins: u32,
    round_losses: u32,
    phase: TrainingPhase,
}

impl TrainingSession {
    pub fn new<R: RandomSource + ?Sized>(config: &TrainingConfig, rng: &mut R) -> Self {
        Self {
            rounds: config.rounds,
            wins_needed: config.wins_needed,
            max_losses: config.max_losses(),
            round_wins: 0,
            round_losses: 0,
            phase: TrainingPhase::AwaitingGuess {
                round: 1,
                number: generate_number(rng),
            },
        }
    }

    #[must_use]
    pub fn phase(&self) -> TrainingPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, TrainingPhase::Finished(_))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<TrainingOutcome> {
        match self.phase {
            TrainingPhase::Finished(outcome) => Some(outcome),
            TrainingPhase::AwaitingGuess { .. } => None,
        }
    }

    #[must_use]
    pub fn round_wins(&self) -> u32 {
        self.round_wins
    }

    #[must_use]
    pub fn round_losses(&self) -> u32 {
        self.round_losses
    }

    /// Resolves the current round. `None` once the session is over.
    pub fn guess<R: RandomSource + ?Sized>(&mut self, guess: Guess, rng: &mut R) -> Option<RoundResult> {
        let TrainingPhase::AwaitingGuess { round, number } = self.phase else {
            return None;
        };

        let won = evaluate_round(number, guess);
        if won {
            self.round_wins += 1;
        } else {
            self.round_losses += 1;
        }

        let succeeded = self.round_wins >= self.wins_needed;
        let failed = self.round_losses > self.max_losses;
        self.phase = if succeeded || failed || round >= self.rounds {
            TrainingPhase::Finished(TrainingOutcome {
                won: succeeded,
                rounds_played: round,
                round_wins: self.round_wins,
            })
        } else {
            TrainingPhase::AwaitingGuess {
                round: round + 1,
                number: generate_number(rng),
            }
        };

        Some(RoundResult {
            round,
            number,
            guess,
            won,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    // Draws 1..=4 map to numbers 1..=4, draws 5..=8 to numbers 6..=9.
    fn numbers(draws: &[i64]) -> ScriptedRandom {
        ScriptedRandom::new().with_ints(draws.iter().copied())
    }

    #[test]
    fn test_three_straight_wins() {
        let config = TrainingConfig::default();
        let mut rng = numbers(&[8, 8, 8, 8]);
        let mut session = TrainingSession::new(&config, &mut rng);

        for _ in 0..3 {
            let result = session.guess(Guess::High, &mut rng).unwrap();
            assert!(result.won);
        }
        assert_eq!(
            session.outcome(),
            Some(TrainingOutcome {
                won: true,
                rounds_played: 3,
                round_wins: 3
            })
        );
        assert!(session.guess(Guess::High, &mut rng).is_none());
    }

    #[test]
    fn test_fails_on_third_loss() {
        let config = TrainingConfig::default();
        let mut rng = numbers(&[1, 1, 8, 1, 1]);
        let mut session = TrainingSession::new(&config, &mut rng);

        // L, L, W, L
        for guess in [Guess::High, Guess::High, Guess::High, Guess::High] {
            session.guess(guess, &mut rng);
        }
        let outcome = session.outcome().unwrap();
        assert!(!outcome.won);
        assert_eq!(outcome.rounds_played, 4);
        assert_eq!(outcome.round_wins, 1);
    }

    #[test]
    fn test_goes_the_distance() {
        let config = TrainingConfig::default();
        let mut rng = numbers(&[1, 1, 8, 8, 8]);
        let mut session = TrainingSession::new(&config, &mut rng);

        for _ in 0..4 {
            session.guess(Guess::Low, &mut rng);
        }
        // 2 wins, 2 losses so far.
        assert!(!session.is_finished());
        let last = session.guess(Guess::High, &mut rng).unwrap();
        assert_eq!(last.round, 5);
        assert_eq!(last.number, 9);
        assert!(session.outcome().unwrap().won);
    }
}
