//! Time-driven simulators.
//!
//! Each system advances one stat dimension of a [`PetState`] to `now`.
//! The interval-based ones count whole intervals since their own "last
//! applied" timestamp and move that timestamp forward by exactly that many
//! intervals, never to `now`. The leftover fraction of an interval carries
//! into the next call, so one call after a long gap and many calls across
//! small gaps end in the same state.

pub mod care_mistake;
pub mod hunger;
pub mod injury;
pub mod poop;
pub mod sleep;
pub mod strength;

use chrono::{DateTime, Duration, Utc};
use imon_data::PetState;

/// Whole intervals elapsed between `last` and `now`, plus `last` moved
/// forward by that many intervals. `None` when not even one has elapsed.
#[must_use]
pub fn whole_intervals(
    last: DateTime<Utc>,
    now: DateTime<Utc>,
    interval_secs: u64,
) -> Option<(u64, DateTime<Utc>)> {
    let interval_ms = i64::try_from(interval_secs).ok()?.checked_mul(1_000)?;
    if interval_ms <= 0 {
        return None;
    }
    let elapsed_ms = (now - last).num_milliseconds();
    if elapsed_ms < interval_ms {
        return None;
    }
    let ticks = elapsed_ms / interval_ms;
    let advanced = last + Duration::milliseconds(ticks * interval_ms);
    Some((ticks as u64, advanced))
}

/// Dead pets and eggs are frozen; sleeping pets don't decay.
pub(crate) fn is_dormant(state: &PetState) -> bool {
    state.is_dead() || state.is_egg() || state.is_sleeping
}
