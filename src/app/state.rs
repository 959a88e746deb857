use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use imon_core::config::Rules;
use imon_core::evolution::EvolutionChart;
use imon_core::metrics::Metrics;
use imon_data::{PetState, PetStatus};
use imon_io::PetStore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// One pet, its rules and where it is kept.
pub struct App {
    pub(super) rules: Rules,
    pub(super) chart: EvolutionChart,
    pub(super) store: Box<dyn PetStore>,
    pub(super) rng: ChaCha8Rng,
    pub(super) metrics: Metrics,
    pub(super) state: PetState,
}

impl App {
    /// Opens the pet kept in `store`, or lays a new egg when there is none.
    ///
    /// A save that cannot be read is logged and replaced by a new egg
    /// rather than blocking the player.
    pub fn open(
        rules: Rules,
        store: Box<dyn PetStore>,
        seed: u64,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        rules.validate().context("Invalid rules")?;

        let state = match store.load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                tracing::info!("No saved pet, laying a new egg");
                PetState::new_egg(now)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not load saved pet, laying a new egg");
                PetState::new_egg(now)
            }
        };

        Ok(Self {
            chart: EvolutionChart::new(&rules.evolution),
            rules,
            store,
            rng: ChaCha8Rng::seed_from_u64(seed),
            metrics: Metrics::new(),
            state,
        })
    }

    #[must_use]
    pub fn state(&self) -> &PetState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> PetStatus {
        PetStatus::from(&self.state)
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub(super) fn save(&self) -> Result<()> {
        self.store
            .save(&self.state)
            .context("Failed to save pet")
    }
}
