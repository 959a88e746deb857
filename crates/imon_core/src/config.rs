//! Rules that drive the simulation.
//!
//! Every timing and gameplay constant is a field here, grouped the same way
//! as the `rules.toml` file. Missing sections or fields fall back to the
//! defaults below.
//!
//! ## Example `rules.toml`
//!
//! ```toml
//! [timing]
//! hunger_interval_secs = 4200
//! lights_toggle_resolution_secs = 5
//!
//! [training]
//! rounds = 5
//! wins_needed = 3
//!
//! [clock]
//! utc_offset_minutes = 60
//! ```

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Decay intervals and other wall-clock delays, all in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub hunger_interval_secs: u64,
    pub strength_interval_secs: u64,
    pub poop_interval_secs: u64,
    /// How long neglect may last before it counts as a care mistake.
    pub care_mistake_window_secs: u64,
    pub untreated_injury_secs: u64,
    /// Delay before a lights toggle made during the night takes effect.
    pub lights_toggle_resolution_secs: u64,
    /// How often the host is expected to call `advance`.
    pub game_tick_secs: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            hunger_interval_secs: 4_200,
            strength_interval_secs: 3_600,
            poop_interval_secs: 7_200,
            care_mistake_window_secs: 1_200,
            untreated_injury_secs: 21_600,
            lights_toggle_resolution_secs: 5,
            game_tick_secs: 30,
        }
    }
}

/// Minimum time since the last evolution before the next one, per target stage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EvolutionTimingConfig {
    pub to_in_training_secs: u64,
    pub to_rookie_secs: u64,
    pub to_champion_secs: u64,
    pub to_ultimate_secs: u64,
}

impl Default for EvolutionTimingConfig {
    fn default() -> Self {
        Self {
            to_in_training_secs: 120,
            to_rookie_secs: 600,
            to_champion_secs: 3_600,
            to_ultimate_secs: 7_200,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_poop_piles: u8,
    pub max_care_mistakes: u32,
    pub max_injuries: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_poop_piles: 4,
            max_care_mistakes: 20,
            max_injuries: 20,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FeedingConfig {
    pub meat_weight_gain: u16,
    pub vitamin_weight_gain: u16,
}

impl Default for FeedingConfig {
    fn default() -> Self {
        Self {
            meat_weight_gain: 1,
            vitamin_weight_gain: 2,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrainingConfig {
    pub weight_loss: u16,
    pub rounds: u32,
    pub wins_needed: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            weight_loss: 2,
            rounds: 5,
            wins_needed: 3,
        }
    }
}

impl TrainingConfig {
    /// Losses a session tolerates before it fails.
    #[must_use]
    pub fn max_losses(&self) -> u32 {
        self.rounds.saturating_sub(self.wins_needed)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BattleConfig {
    pub max_rounds: u32,
    pub attribute_bonus: f64,
    pub overweight_multiplier: f64,
    pub strength_power_per_heart: f64,
    /// Opponents roll their power within `base ± spread`.
    pub opponent_power_spread: f64,
    /// Variance of the single-roll resolver, as a fraction of power.
    pub instant_variance: f64,
    /// Powers closer than this fraction of the larger one are a draw.
    pub draw_margin: f64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_rounds: 20,
            attribute_bonus: 1.2,
            overweight_multiplier: 0.5,
            strength_power_per_heart: 5.0,
            opponent_power_spread: 10.0,
            instant_variance: 0.20,
            draw_margin: 0.05,
        }
    }
}

/// Where the pet lives on the globe, for bedtime purposes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ClockConfig {
    pub utc_offset_minutes: i32,
}

impl ClockConfig {
    /// Hour of the local day (0-23) at `now`.
    #[must_use]
    pub fn local_hour(&self, now: DateTime<Utc>) -> u32 {
        match FixedOffset::east_opt(self.utc_offset_minutes * 60) {
            Some(offset) => now.with_timezone(&offset).hour(),
            None => now.hour(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StepsConfig {
    pub steps_per_bonus_meal: u64,
}

impl Default for StepsConfig {
    fn default() -> Self {
        Self {
            steps_per_bonus_meal: 1_000,
        }
    }
}

/// Complete rule set. Created once at startup and shared read-only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Rules {
    pub timing: TimingConfig,
    pub evolution: EvolutionTimingConfig,
    pub limits: LimitsConfig,
    pub feeding: FeedingConfig,
    pub training: TrainingConfig,
    pub battle: BattleConfig,
    pub clock: ClockConfig,
    pub steps: StepsConfig,
}

impl Rules {
    /// Validates all rule parameters.
    ///
    /// Returns `Ok(())` if every parameter is usable, or `Err` describing
    /// the first one that is not.
    pub fn validate(&self) -> anyhow::Result<()> {
        let t = &self.timing;
        anyhow::ensure!(t.hunger_interval_secs > 0, "Hunger interval must be positive");
        anyhow::ensure!(
            t.strength_interval_secs > 0,
            "Strength interval must be positive"
        );
        anyhow::ensure!(t.poop_interval_secs > 0, "Poop interval must be positive");
        anyhow::ensure!(
            t.care_mistake_window_secs > 0,
            "Care mistake window must be positive"
        );
        anyhow::ensure!(
            t.untreated_injury_secs > 0,
            "Untreated injury time must be positive"
        );
        anyhow::ensure!(t.game_tick_secs > 0, "Game tick must be positive");

        let e = &self.evolution;
        anyhow::ensure!(
            e.to_in_training_secs <= e.to_rookie_secs
                && e.to_rookie_secs <= e.to_champion_secs
                && e.to_champion_secs <= e.to_ultimate_secs,
            "Evolution times must not decrease with stage"
        );

        anyhow::ensure!(
            self.limits.max_poop_piles > 0,
            "Poop pile limit must be positive"
        );
        anyhow::ensure!(
            self.limits.max_care_mistakes > 0,
            "Care mistake limit must be positive"
        );
        anyhow::ensure!(
            self.limits.max_injuries > 0,
            "Injury limit must be positive"
        );

        anyhow::ensure!(self.training.rounds > 0, "Training rounds must be positive");
        anyhow::ensure!(
            self.training.wins_needed > 0 && self.training.wins_needed <= self.training.rounds,
            "Training wins needed must be in [1, rounds]"
        );

        let b = &self.battle;
        anyhow::ensure!(b.max_rounds > 0, "Battle rounds must be positive");
        anyhow::ensure!(
            b.attribute_bonus >= 1.0,
            "Attribute bonus must be at least 1.0"
        );
        anyhow::ensure!(
            b.overweight_multiplier > 0.0 && b.overweight_multiplier <= 1.0,
            "Overweight multiplier must be in (0.0, 1.0]"
        );
        anyhow::ensure!(
            b.strength_power_per_heart >= 0.0,
            "Strength power per heart must be non-negative"
        );
        anyhow::ensure!(
            b.opponent_power_spread >= 0.0,
            "Opponent power spread must be non-negative"
        );
        anyhow::ensure!(
            (0.0..1.0).contains(&b.instant_variance),
            "Instant variance must be in [0.0, 1.0)"
        );
        anyhow::ensure!(
            (0.0..1.0).contains(&b.draw_margin),
            "Draw margin must be in [0.0, 1.0)"
        );

        anyhow::ensure!(
            self.clock.utc_offset_minutes.abs() <= 14 * 60,
            "UTC offset must be within ±14 hours"
        );
        anyhow::ensure!(
            self.steps.steps_per_bonus_meal > 0,
            "Steps per bonus meal must be positive"
        );

        Ok(())
    }

    /// Parses and validates rules from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let rules = toml::from_str::<Self>(content)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Loads rules from `path`, or the defaults when the file does not exist.
    /// A file that exists but does not parse or validate is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No rules file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules from {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid rules in {}", path.display()))
    }

    /// Stable hash of the rule set, stored alongside saves so a host can
    /// notice when a pet was simulated under different rules.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.timing).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hasher.update(format!("{:?}", self.limits).as_bytes());
        hasher.update(format!("{:?}", self.feeding).as_bytes());
        hasher.update(format!("{:?}", self.training).as_bytes());
        hasher.update(format!("{:?}", self.battle).as_bytes());
        hasher.update(format!("{:?}", self.clock).as_bytes());
        hasher.update(format!("{:?}", self.steps).as_bytes());
        hex::encode(hasher.finalize())
    }
}
