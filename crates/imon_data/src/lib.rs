//! # Imon Data
//!
//! Plain data types shared by every imon crate: clamped value primitives,
//! the species catalogue, the pet aggregate and its read-only status
//! projection. Nothing in here knows about time passing; that lives in
//! `imon_core`.

pub mod data;

pub use data::pet::{CauseOfDeath, Lifecycle, PetId, PetState};
pub use data::species::{Attribute, Species, Stage};
pub use data::status::PetStatus;
pub use data::values::{StatHearts, Weight, MAX_HEARTS, MAX_WEIGHT, MIN_WEIGHT};
