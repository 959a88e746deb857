//! Where the pet lives between sessions.

use crate::error::{IoError, Result};
use crate::persistence::{decode_save, encode_save};
use crate::serialization::write_atomic;
use chrono::Utc;
use imon_data::PetState;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persistence contract for a single pet.
pub trait PetStore: Send {
    fn save(&self, state: &PetState) -> Result<()>;
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<PetState>>;
    /// Deleting an absent save is not an error.
    fn delete(&self) -> Result<()>;
}

/// A single JSON save file, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    rules_fingerprint: Option<String>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rules_fingerprint: None,
        }
    }

    /// Stamps saves with `fingerprint` and warns when loading a save made
    /// under different rules.
    #[must_use]
    pub fn with_rules_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.rules_fingerprint = Some(fingerprint.into());
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PetStore for JsonFileStore {
    fn save(&self, state: &PetState) -> Result<()> {
        let json = encode_save(state, Utc::now(), self.rules_fingerprint.as_deref())?;
        write_atomic(&self.path, json.as_bytes())?;
        tracing::debug!(path = %self.path.display(), pet = %state.id, "Pet saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<PetState>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(IoError::from(e)
                    .with_context(format!("reading {}", self.path.display())))
            }
        };
        let save = decode_save(&content)
            .map_err(|e| e.with_context(format!("loading {}", self.path.display())))?;

        if let (Some(expected), Some(found)) = (&self.rules_fingerprint, &save.rules_fingerprint) {
            if expected != found {
                tracing::warn!(
                    path = %self.path.display(),
                    "Save was simulated under different rules"
                );
            }
        }
        tracing::info!(
            path = %self.path.display(),
            pet = %save.state.id,
            version = save.version,
            "Pet loaded"
        );
        Ok(Some(save.state))
    }

    fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Save deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(IoError::from(e).with_context(format!("deleting {}", self.path.display()))),
        }
    }
}

/// Keeps the pet in memory only. Handy for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<PetState>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_state(state: PetState) -> Self {
        Self {
            slot: Mutex::new(Some(state)),
        }
    }
}

impl PetStore for MemoryStore {
    fn save(&self, state: &PetState) -> Result<()> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(state.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<PetState>> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slot.clone())
    }

    fn delete(&self) -> Result<()> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = None;
        Ok(())
    }
}
