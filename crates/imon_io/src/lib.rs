//! # Imon IO
//!
//! Persistence layer for Imon pets.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON serialization helpers and atomic file writes
//! - The versioned save file envelope
//! - The [`PetStore`] contract with file-backed and in-memory stores

/// Error types and result aliases for I/O operations
pub mod error;
/// Versioned save file encoding and decoding
pub mod persistence;
/// Validated JSON helpers and atomic writes
pub mod serialization;
/// Pet stores
pub mod store;

pub use error::{IoError, Result};
pub use persistence::{decode_save, encode_save, SaveFile, CURRENT_SAVE_VERSION};
pub use serialization::{from_json, read_json_file, to_json, to_json_pretty, write_json_file};
pub use store::{JsonFileStore, MemoryStore, PetStore};
