//! Core data structures for the imon simulation.

pub mod pet;
pub mod species;
pub mod status;
pub mod values;
