use anchor_lang::prelude::*;

use crate::util::fee::calculate_parking_fee;

/// Fee quotes read no accounts.
#[derive(Accounts)]
pub struct QuoteFee {}

pub fn quote_parking_fee(
    _ctx: Context<QuoteFee>,
    start_time: u64,
    end_time: u64,
    base_rate: u64,
    is_peak: bool,
) -> Result<u64> {
    let fee = calculate_parking_fee(start_time, end_time, base_rate, is_peak)?;
    msg!("Parking fee for {}..{} at rate {}: {}", start_time, end_time, base_rate, fee);
    Ok(fee)
}
