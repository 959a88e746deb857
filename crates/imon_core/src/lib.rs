//! # Imon Core
//!
//! The deterministic engine behind an Imon virtual pet.
//!
//! This crate contains everything that changes a [`PetState`](imon_data::PetState):
//! - Time-driven simulators (hunger, strength, poop, injury, sleep, care mistakes)
//! - Death evaluation and the per-tick orchestration in [`engine::advance`]
//! - The evolution chart and its guarded transitions
//! - Player actions, the training mini-game and battles
//! - Rules configuration, injectable randomness, metrics and logging
//!
//! ## Time
//!
//! Nothing here reads a wall clock. Every operation takes `now` explicitly,
//! and the interval simulators carry sub-interval remainders forward, so a
//! pet advanced once after a week away ends up exactly where it would have
//! been had it been advanced every thirty seconds.
//!
//! ## Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use imon_core::config::Rules;
//! use imon_core::engine::advance;
//! use imon_data::PetState;
//!
//! let rules = Rules::default();
//! let hatched = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
//! let mut pet = PetState::hatched(hatched);
//!
//! advance(&mut pet, hatched + Duration::hours(2), &rules);
//! assert_eq!(pet.hunger_hearts.value(), 3);
//! ```

/// Player actions: feeding, cleaning, healing and the lights
pub mod actions;
/// Battles, opponents and the round-based battle session
pub mod battle;
/// Tunable rules loaded from TOML
pub mod config;
/// Fatal conditions
pub mod death;
/// Per-tick orchestration of all simulators
pub mod engine;
/// Evolution chart and transition checks
pub mod evolution;
/// Input channels for interactive sessions
pub mod input;
/// Hatching
pub mod lifecycle;
/// Counters and structured logging setup
pub mod metrics;
/// Injectable random source
pub mod rng;
/// Step counter rewards
pub mod steps;
/// Time-driven stat simulators
pub mod systems;
/// The high/low training mini-game
pub mod training;

pub use actions::{ActionOutcome, FoodKind, LightsOutcome};
pub use config::Rules;
pub use engine::advance;
pub use evolution::{check_evolution, evolve, EvolutionChart, EvolutionRequirement};
pub use metrics::{init_logging, Metrics};
pub use rng::{RandomSource, ScriptedRandom};
