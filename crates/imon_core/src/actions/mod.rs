//! Player actions on the pet.
//!
//! Every action has a `can_*` guard and an `apply` that leaves the state
//! untouched and reports [`ActionOutcome::Refused`] when the guard fails.

pub mod clean;
pub mod feed;
pub mod heal;
pub mod lights;

use serde::{Deserialize, Serialize};

pub use feed::FoodKind;
pub use lights::LightsOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    Applied,
    Refused,
}

impl ActionOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}
