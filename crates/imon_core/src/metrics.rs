//! Engine counters and logging setup.
//!
//! Counts what happens to a pet over a process lifetime and periodically
//! writes a summary through `tracing`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Advances between summary log lines.
const SUMMARY_EVERY: u64 = 100;

pub struct Metrics {
    advances: AtomicU64,
    evolutions: AtomicU64,
    deaths: AtomicU64,
    refused_actions: AtomicU64,
    sessions_finished: AtomicU64,
    sessions_cancelled: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            advances: AtomicU64::new(0),
            evolutions: AtomicU64::new(0),
            deaths: AtomicU64::new(0),
            refused_actions: AtomicU64::new(0),
            sessions_finished: AtomicU64::new(0),
            sessions_cancelled: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records one engine advance.
    pub fn record_advance(&self) {
        let advances = self.advances.fetch_add(1, Ordering::Relaxed) + 1;
        if advances % SUMMARY_EVERY == 0 {
            tracing::info!(
                advances,
                evolutions = self.evolutions(),
                deaths = self.deaths(),
                refused = self.refused_actions(),
                uptime_secs = self.elapsed().as_secs(),
                "Engine summary"
            );
        }
    }

    pub fn record_evolution(&self) {
        self.evolutions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_death(&self) {
        self.deaths.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an action turned down by its guard.
    pub fn record_refused(&self, action: &str) {
        self.refused_actions.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(action, "Action refused");
    }

    pub fn record_session(&self, completed: bool) {
        if completed {
            self.sessions_finished.fetch_add(1, Ordering::Relaxed);
        } else {
            self.sessions_cancelled.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[must_use]
    pub fn advances(&self) -> u64 {
        self.advances.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn evolutions(&self) -> u64 {
        self.evolutions.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn refused_actions(&self) -> u64 {
        self.refused_actions.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn sessions_finished(&self) -> u64 {
        self.sessions_finished.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn sessions_cancelled(&self) -> u64 {
        self.sessions_cancelled.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, `info` by default.
/// Later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}
