use super::engine::{resolve_round, BattleResult, RoundOutcome};
use super::height::AttackHeight;
use super::opponent::BattleOpponent;
use super::power::battle_hp;
use crate::config::Rules;
use crate::rng::RandomSource;
use imon_data::PetState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    AwaitingMove { round: u32 },
    Finished(BattleResult),
}

/// One exchange of blows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub player: AttackHeight,
    pub opponent: AttackHeight,
    pub outcome: RoundOutcome,
    pub player_hp: u32,
    pub opponent_hp: u32,
}

/// An HP-based battle played one attack at a time.
///
/// Built from a snapshot of the pet; the pet itself is only touched when
/// the caller books the final result with
/// [`apply_result`](super::apply_result).
#[derive(Debug, Clone)]
pub struct BattleSession {
    opponent: BattleOpponent,
    player_hp: u32,
    opponent_hp: u32,
    max_rounds: u32,
    phase: BattlePhase,
}

impl BattleSession {
    /// Generates an opponent for `state` and sets up both HP pools.
    pub fn start<R: RandomSource + ?Sized>(state: &PetState, rules: &Rules, rng: &mut R) -> Self {
        let opponent = BattleOpponent::generate(state, rules, rng);
        Self::with_opponent(state, opponent, rules)
    }

    #[must_use]
    pub fn with_opponent(state: &PetState, opponent: BattleOpponent, rules: &Rules) -> Self {
        Self {
            player_hp: battle_hp(state),
            opponent_hp: opponent.hp(),
            opponent,
            max_rounds: rules.battle.max_rounds,
            phase: BattlePhase::AwaitingMove { round: 1 },
        }
    }

    #[must_use]
    pub fn opponent(&self) -> &BattleOpponent {
        &self.opponent
    }

    #[must_use]
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    #[must_use]
    pub fn player_hp(&self) -> u32 {
        self.player_hp
    }

    #[must_use]
    pub fn opponent_hp(&self) -> u32 {
        self.opponent_hp
    }

    #[must_use]
    pub fn result(&self) -> Option<BattleResult> {
        match self.phase {
            BattlePhase::Finished(result) => Some(result),
            BattlePhase::AwaitingMove { .. } => None,
        }
    }

    /// Plays one round with the player's `height` against a random one.
    /// `None` once the battle is over.
    pub fn attack<R: RandomSource + ?Sized>(
        &mut self,
        height: AttackHeight,
        rng: &mut R,
    ) -> Option<RoundReport> {
        let BattlePhase::AwaitingMove { round } = self.phase else {
            return None;
        };

        let opponent_height = AttackHeight::random(rng);
        let outcome = resolve_round(height, opponent_height);
        match outcome {
            RoundOutcome::PlayerHit => self.opponent_hp = self.opponent_hp.saturating_sub(1),
            RoundOutcome::OpponentHit => self.player_hp = self.player_hp.saturating_sub(1),
            RoundOutcome::Clash => {}
        }

        self.phase = match self.verdict(round) {
            Some(result) => BattlePhase::Finished(result),
            None => BattlePhase::AwaitingMove { round: round + 1 },
        };

        Some(RoundReport {
            round,
            player: height,
            opponent: opponent_height,
            outcome,
            player_hp: self.player_hp,
            opponent_hp: self.opponent_hp,
        })
    }

    fn verdict(&self, round: u32) -> Option<BattleResult> {
        if self.player_hp == 0 {
            return Some(BattleResult::Lose);
        }
        if self.opponent_hp == 0 {
            return Some(BattleResult::Win);
        }
        if round < self.max_rounds {
            return None;
        }
        Some(match self.player_hp.cmp(&self.opponent_hp) {
            std::cmp::Ordering::Greater => BattleResult::Win,
            std::cmp::Ordering::Less => BattleResult::Lose,
            std::cmp::Ordering::Equal => BattleResult::Draw,
        })
    }
}
