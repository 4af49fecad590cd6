//! # Time Controller
//!
//! The only sanctioned ways to simulate elapsed time. Slots move forward
//! through a warp; the clock's unix timestamp can additionally be pushed
//! forward for timestamp-gated logic. Neither ever moves backward.

use chrono::DateTime;
use log::info;

use crate::{
    error::{HarnessError, HarnessResult},
    ledger::Ledger,
};

/// Current slot of the ledger clock
pub async fn current_slot(ledger: &Ledger) -> HarnessResult<u64> {
    Ok(ledger.get_clock().await?.slot)
}

/// Advance the ledger by `offset` slots and return the new slot.
///
/// An offset of 0 leaves the ledger untouched, since the ledger only warps
/// to slots strictly after the current one.
pub async fn warp_by_slots(ledger: &mut Ledger, offset: u64) -> HarnessResult<u64> {
    let current = current_slot(ledger).await?;
    if offset == 0 {
        return Ok(current);
    }

    let target = current.checked_add(offset).ok_or(HarnessError::InvalidWarp {
        current,
        target: u64::MAX,
    })?;
    ledger.warp_to_slot(target)?;

    info!("Warped from slot {} to slot {}", current, target);
    Ok(target)
}

/// Push the clock's unix timestamp forward by `seconds` and return it
pub async fn advance_clock_by_seconds(ledger: &mut Ledger, seconds: u64) -> HarnessResult<i64> {
    let mut clock = ledger.get_clock().await?;
    let delta = i64::try_from(seconds).unwrap_or(i64::MAX);
    clock.unix_timestamp = clock.unix_timestamp.saturating_add(delta);
    ledger.set_clock(&clock);

    match DateTime::from_timestamp(clock.unix_timestamp, 0) {
        Some(time) => info!("Clock advanced by {}s to {}", seconds, time.format("%Y-%m-%d %H:%M:%S UTC")),
        None => info!("Clock advanced by {}s to {}", seconds, clock.unix_timestamp),
    }
    Ok(clock.unix_timestamp)
}
