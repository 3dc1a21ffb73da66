use anchor_lang::prelude::*;

use crate::error::ParkingError;

/// Linear parking fee: elapsed milliseconds times `base_rate`.
///
/// `is_peak` is part of the instruction interface but carries no pricing
/// effect; no peak multiplier is defined.
pub fn calculate_parking_fee(
    start_time: u64,
    end_time: u64,
    base_rate: u64,
    _is_peak: bool,
) -> Result<u64> {
    let elapsed = end_time
        .checked_sub(start_time)
        .ok_or(ParkingError::InvalidTimeRange)?;

    elapsed
        .checked_mul(base_rate)
        .ok_or_else(|| error!(ParkingError::ArithmeticOverflow))
}
