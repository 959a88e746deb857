use chrono::{DateTime, Duration, Utc};
use imon_data::{PetState, Species};

/// One guarded transition of the evolution chart.
///
/// Every bound that is set must hold; unset bounds are ignored. Built with
/// [`EvolutionRequirement::new`] and the chained bound setters.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionRequirement {
    pub from: Species,
    pub to: Species,
    /// Time since the last evolution before this transition may fire.
    pub min_awake_secs: u64,
    pub max_care_mistakes: Option<u32>,
    pub min_care_mistakes: Option<u32>,
    pub min_battle_wins: Option<u32>,
    pub min_win_rate: Option<f64>,
    pub min_training_count: Option<u32>,
    pub max_weight: Option<u16>,
    pub min_weight: Option<u16>,
    /// Fallback rows are only tried once no specific row matched.
    pub is_default: bool,
}

impl EvolutionRequirement {
    #[must_use]
    pub fn new(from: Species, to: Species, min_awake_secs: u64) -> Self {
        Self {
            from,
            to,
            min_awake_secs,
            max_care_mistakes: None,
            min_care_mistakes: None,
            min_battle_wins: None,
            min_win_rate: None,
            min_training_count: None,
            max_weight: None,
            min_weight: None,
            is_default: false,
        }
    }

    #[must_use]
    pub fn max_care_mistakes(mut self, value: u32) -> Self {
        self.max_care_mistakes = Some(value);
        self
    }

    #[must_use]
    pub fn min_care_mistakes(mut self, value: u32) -> Self {
        self.min_care_mistakes = Some(value);
        self
    }

    #[must_use]
    pub fn min_battle_wins(mut self, value: u32) -> Self {
        self.min_battle_wins = Some(value);
        self
    }

    #[must_use]
    pub fn min_win_rate(mut self, value: f64) -> Self {
        self.min_win_rate = Some(value);
        self
    }

    #[must_use]
    pub fn min_training_count(mut self, value: u32) -> Self {
        self.min_training_count = Some(value);
        self
    }

    #[must_use]
    pub fn max_weight(mut self, grams: u16) -> Self {
        self.max_weight = Some(grams);
        self
    }

    #[must_use]
    pub fn min_weight(mut self, grams: u16) -> Self {
        self.min_weight = Some(grams);
        self
    }

    #[must_use]
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Whether `state` meets every bound of this row at `now`.
    #[must_use]
    pub fn is_satisfied(&self, state: &PetState, now: DateTime<Utc>) -> bool {
        let awake_for = now - state.evolved_at;
        let needed = Duration::seconds(i64::try_from(self.min_awake_secs).unwrap_or(i64::MAX));
        if awake_for < needed {
            return false;
        }

        if self.max_care_mistakes.is_some_and(|max| state.care_mistakes > max) {
            return false;
        }
        if self.min_care_mistakes.is_some_and(|min| state.care_mistakes < min) {
            return false;
        }
        if self.min_battle_wins.is_some_and(|min| state.battle_wins < min) {
            return false;
        }
        if let Some(min) = self.min_win_rate {
            // No battles fought means the rate is undefined, which never passes.
            match state.win_rate() {
                Some(rate) if rate >= min => {}
                _ => return false,
            }
        }
        if self.min_training_count.is_some_and(|min| state.training_count < min) {
            return false;
        }
        let grams = state.weight.grams();
        if self.max_weight.is_some_and(|max| grams > max) {
            return false;
        }
        if self.min_weight.is_some_and(|min| grams < min) {
            return false;
        }
        true
    }
}
