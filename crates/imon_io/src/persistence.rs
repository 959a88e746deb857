//! The versioned save file format.
//!
//! A save is a JSON envelope around the [`PetState`] carrying the format
//! version, when it was written and, optionally, the fingerprint of the
//! rules the pet was simulated under. Files holding a bare `PetState` from
//! before the envelope existed still load as version 0.

use crate::error::{IoError, Result};
use crate::serialization::{from_json, to_json_pretty};
use chrono::{DateTime, Utc};
use imon_data::PetState;
use serde::{Deserialize, Serialize};

pub const CURRENT_SAVE_VERSION: u32 = 1;

/// Borrowing form used when writing, so saving never clones the pet.
#[derive(Serialize)]
struct SaveFileRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rules_fingerprint: Option<&'a str>,
    state: &'a PetState,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub rules_fingerprint: Option<String>,
    pub state: PetState,
}

/// Encodes `state` as a current-version save.
pub fn encode_save(
    state: &PetState,
    saved_at: DateTime<Utc>,
    rules_fingerprint: Option<&str>,
) -> Result<String> {
    to_json_pretty(&SaveFileRef {
        version: CURRENT_SAVE_VERSION,
        saved_at,
        rules_fingerprint,
        state,
    })
}

/// Decodes a save, accepting the current envelope and legacy bare states.
pub fn decode_save(content: &str) -> Result<SaveFile> {
    match from_json::<SaveFile>(content) {
        Ok(save) => match save.version {
            CURRENT_SAVE_VERSION => Ok(save),
            found if found > CURRENT_SAVE_VERSION => Err(IoError::UnsupportedVersion {
                found,
                supported: CURRENT_SAVE_VERSION,
            }),
            found => Err(IoError::validation(format!(
                "Unsupported save version: {found}"
            ))),
        },
        Err(IoError::Validation(msg)) => Err(IoError::Validation(msg)),
        Err(envelope_err) => {
            tracing::warn!("Save is not a versioned envelope, trying legacy format");
            let state: PetState = from_json(content).map_err(|_| {
                envelope_err.with_context("decoding save file")
            })?;
            tracing::info!(pet = %state.id, "Legacy save loaded");
            Ok(SaveFile {
                version: 0,
                saved_at: state.last_advanced_at,
                rules_fingerprint: None,
                state,
            })
        }
    }
}
