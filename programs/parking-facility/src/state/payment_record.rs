use anchor_lang::prelude::*;

/// Receipt for a parking payment. Written once at creation and never
/// modified; it does not touch the facility balance.
#[account]
#[derive(InitSpace, Debug)]
pub struct PaymentRecord {
    /// Identity that requested the record
    pub owner: Pubkey,
    /// Fee charged, as supplied by the caller
    pub amount: u64,
    /// Milliseconds since the unix epoch at creation
    pub payment_time: u64,
}
