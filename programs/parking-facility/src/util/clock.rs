use anchor_lang::prelude::*;

use crate::error::ParkingError;
use crate::util::constants::MILLIS_PER_SECOND;

/// Current cluster time in milliseconds since the unix epoch.
pub fn now_millis() -> Result<u64> {
    unix_to_millis(Clock::get()?.unix_timestamp)
}

pub fn unix_to_millis(unix_timestamp: i64) -> Result<u64> {
    let seconds = u64::try_from(unix_timestamp).map_err(|_| ParkingError::InvalidTimestamp)?;
    seconds
        .checked_mul(MILLIS_PER_SECOND)
        .ok_or_else(|| error!(ParkingError::ArithmeticOverflow))
}
