//! # Imon
//!
//! Session orchestration for a single virtual pet: loading it from a
//! store, bringing it up to date, applying player actions and interactive
//! sessions, and saving it again.

pub mod app;

pub use app::{App, BattleReport, SessionOutcome, TrainingReport};
