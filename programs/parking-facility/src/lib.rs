use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod util;

pub use error::ParkingError;
pub use event::*;
pub use instructions::*;

#[program]
pub mod parking_facility {
    use super::*;

    /// Creates the facility and mints the admin capability for the caller.
    pub fn initialize(ctx: Context<Initialize>, max_slots: u16) -> Result<()> {
        instructions::initialize(ctx, max_slots)
    }

    pub fn create_slot(ctx: Context<CreateSlot>) -> Result<()> {
        instructions::create_slot(ctx)
    }

    pub fn reserve_slot(ctx: Context<UseSlot>, slot_id: u64) -> Result<()> {
        instructions::reserve_slot(ctx, slot_id)
    }

    pub fn enter_slot(ctx: Context<UseSlot>, slot_id: u64) -> Result<()> {
        instructions::enter_slot(ctx, slot_id)
    }

    pub fn exit_slot(ctx: Context<UseSlot>, slot_id: u64) -> Result<()> {
        instructions::exit_slot(ctx, slot_id)
    }

    pub fn create_payment_record(ctx: Context<CreatePaymentRecord>, amount: u64) -> Result<()> {
        instructions::create_payment_record(ctx, amount)
    }

    /// Returns the fee through transaction return data.
    pub fn calculate_parking_fee(
        ctx: Context<QuoteFee>,
        start_time: u64,
        end_time: u64,
        base_rate: u64,
        is_peak: bool,
    ) -> Result<u64> {
        instructions::quote_parking_fee(ctx, start_time, end_time, base_rate, is_peak)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    pub fn withdraw_profits(ctx: Context<ManageProfits>, amount: u64) -> Result<u64> {
        instructions::withdraw_profits(ctx, amount)
    }

    pub fn distribute_profits(ctx: Context<ManageProfits>) -> Result<u64> {
        instructions::distribute_profits(ctx)
    }
}
