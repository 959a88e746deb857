//! Battles against wild opponents of the pet's stage.
//!
//! The round-based [`BattleSession`] is the main resolver; [`resolve_instant`]
//! settles a fight in a single roll.

pub mod engine;
pub mod height;
pub mod opponent;
pub mod power;
pub mod session;

pub use engine::{
    apply_result, can_battle, resolve_instant, resolve_round, BattleResult, RoundOutcome,
};
pub use height::AttackHeight;
pub use opponent::BattleOpponent;
pub use power::{battle_hp, battle_power, effective_power};
pub use session::{BattlePhase, BattleSession, RoundReport};
