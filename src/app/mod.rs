pub mod render;
pub mod state;

pub use state::App;

use anyhow::Result;
use chrono::{DateTime, Utc};
use imon_core::actions::{self, ActionOutcome, FoodKind, LightsOutcome};
use imon_core::battle::{self, AttackHeight, BattleOpponent, BattleResult, BattleSession, RoundReport};
use imon_core::evolution::{check_evolution, evolve};
use imon_core::input::{run_battle, run_training, InputSource};
use imon_core::training::{self, Guess, RoundResult, TrainingOutcome, TrainingSession};
use imon_core::{engine, lifecycle, steps};
use imon_data::{PetState, PetStatus};

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome<T> {
    /// The pet couldn't take part (asleep, an egg or dead).
    Refused,
    /// The player walked away; the pet is untouched.
    Cancelled,
    Completed(T),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub outcome: TrainingOutcome,
    pub rounds: Vec<RoundResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BattleReport {
    pub opponent: BattleOpponent,
    pub result: BattleResult,
    pub rounds: Vec<RoundReport>,
}

impl App {
    /// Brings the pet up to `now`, saves it and returns its status.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Result<PetStatus> {
        self.advance(now);
        self.save()?;
        Ok(self.status())
    }

    pub fn hatch(&mut self, now: DateTime<Utc>) -> Result<ActionOutcome> {
        self.advance(now);
        let outcome = lifecycle::hatch(&mut self.state, now);
        self.finish_action("hatch", outcome.is_applied())?;
        Ok(outcome)
    }

    pub fn feed(&mut self, food: FoodKind, now: DateTime<Utc>) -> Result<ActionOutcome> {
        self.advance(now);
        let outcome = actions::feed::apply(&mut self.state, food, now, &self.rules);
        self.finish_action("feed", outcome.is_applied())?;
        Ok(outcome)
    }

    pub fn clean(&mut self, now: DateTime<Utc>) -> Result<ActionOutcome> {
        self.advance(now);
        let outcome = actions::clean::apply(&mut self.state);
        self.finish_action("clean", outcome.is_applied())?;
        Ok(outcome)
    }

    pub fn heal(&mut self, now: DateTime<Utc>) -> Result<ActionOutcome> {
        self.advance(now);
        let outcome = actions::heal::apply(&mut self.state);
        self.finish_action("heal", outcome.is_applied())?;
        Ok(outcome)
    }

    pub fn toggle_lights(&mut self, now: DateTime<Utc>) -> Result<LightsOutcome> {
        self.advance(now);
        let outcome = actions::lights::apply(&mut self.state, now, &self.rules);
        self.finish_action("lights", outcome != LightsOutcome::Blocked)?;
        Ok(outcome)
    }

    /// Turns walked `steps` into free meat meals, eaten only while the pet
    /// is still hungry. Returns how many were eaten.
    pub fn redeem_steps(&mut self, steps: u64, now: DateTime<Utc>) -> Result<u64> {
        self.advance(now);
        let earned = steps::bonus_meals(steps, &self.rules);
        let mut eaten = 0;
        while eaten < earned && !self.state.hunger_hearts.is_full() {
            let outcome = actions::feed::apply(&mut self.state, FoodKind::Meat, now, &self.rules);
            if !outcome.is_applied() {
                break;
            }
            eaten += 1;
        }
        tracing::info!(steps, earned, eaten, "Steps redeemed");
        self.save()?;
        Ok(eaten)
    }

    /// Plays a training session with guesses from `input`.
    pub fn train<S>(&mut self, input: &mut S, now: DateTime<Utc>) -> Result<SessionOutcome<TrainingReport>>
    where
        S: InputSource<Guess> + ?Sized,
    {
        self.advance(now);
        if !training::can_train(&self.state) {
            self.finish_action("train", false)?;
            return Ok(SessionOutcome::Refused);
        }

        let mut session = TrainingSession::new(&self.rules.training, &mut self.rng);
        let Some((outcome, rounds)) = run_training(&mut session, input, &mut self.rng) else {
            self.metrics.record_session(false);
            tracing::info!("Training abandoned");
            self.save()?;
            return Ok(SessionOutcome::Cancelled);
        };

        training::apply_session(&mut self.state, &outcome, now, &self.rules, &mut self.rng);
        self.metrics.record_session(true);
        tracing::info!(
            won = outcome.won,
            rounds = outcome.rounds_played,
            "Training finished"
        );
        self.save()?;
        Ok(SessionOutcome::Completed(TrainingReport { outcome, rounds }))
    }

    /// Fights a random opponent with attacks from `input`.
    pub fn battle<S>(&mut self, input: &mut S, now: DateTime<Utc>) -> Result<SessionOutcome<BattleReport>>
    where
        S: InputSource<AttackHeight> + ?Sized,
    {
        self.advance(now);
        if !battle::can_battle(&self.state) {
            self.finish_action("battle", false)?;
            return Ok(SessionOutcome::Refused);
        }

        let mut session = BattleSession::start(&self.state, &self.rules, &mut self.rng);
        let opponent = *session.opponent();
        let Some((result, rounds)) = run_battle(&mut session, input, &mut self.rng) else {
            self.metrics.record_session(false);
            tracing::info!("Battle abandoned");
            self.save()?;
            return Ok(SessionOutcome::Cancelled);
        };

        battle::apply_result(&mut self.state, result);
        self.metrics.record_session(true);
        tracing::info!(
            opponent = %opponent.species.display_name(),
            ?result,
            "Battle finished"
        );
        self.save()?;
        Ok(SessionOutcome::Completed(BattleReport {
            opponent,
            result,
            rounds,
        }))
    }

    /// Forgets the current pet and lays a new egg.
    pub fn restart(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.store.delete()?;
        self.state = PetState::new_egg(now);
        tracing::info!(pet = %self.state.id, "Started over with a new egg");
        self.save()
    }

    fn advance(&mut self, now: DateTime<Utc>) {
        self.metrics.record_advance();
        if engine::advance(&mut self.state, now, &self.rules).is_some() {
            self.metrics.record_death();
        }
        if let Some(target) = check_evolution(&self.state, now, &self.chart) {
            evolve(&mut self.state, target, now);
            self.metrics.record_evolution();
        }
    }

    fn finish_action(&mut self, action: &str, applied: bool) -> Result<()> {
        if !applied {
            self.metrics.record_refused(action);
        }
        self.save()
    }
}
