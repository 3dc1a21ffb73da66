use anchor_lang::prelude::*;

use crate::{
    event::{ProfitsDistributed, ProfitsWithdrawn},
    state::{AdminCapability, Facility},
    util::{constants::*, lamports::move_lamports},
};

/// Accounts for the capability-gated balance operations.
#[derive(Accounts)]
pub struct ManageProfits<'info> {
    /// Capability holder; receives the funds
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [FACILITY_SEED],
        bump = facility.bump
    )]
    pub facility: Account<'info, Facility>,

    #[account(
        seeds = [ADMIN_CAP_SEED, facility.key().as_ref()],
        bump = admin_cap.bump
    )]
    pub admin_cap: Account<'info, AdminCapability>,
}

impl<'info> ManageProfits<'info> {
    fn authorize(&self) -> Result<()> {
        self.admin_cap
            .authorize(&self.facility.key(), &self.facility, &self.admin.key())
    }

    fn pay_out(&self, amount: u64) -> Result<()> {
        move_lamports(
            &self.facility.to_account_info(),
            &self.admin.to_account_info(),
            amount,
        )
    }
}

/// Withdraws `amount` lamports of the facility balance to the capability holder.
pub fn withdraw_profits(ctx: Context<ManageProfits>, amount: u64) -> Result<u64> {
    ctx.accounts.authorize()?;

    ctx.accounts.facility.debit(amount)?;
    ctx.accounts.pay_out(amount)?;

    let facility_key = ctx.accounts.facility.key();
    let admin = ctx.accounts.admin.key();
    let remaining_balance = ctx.accounts.facility.balance;

    emit!(ProfitsWithdrawn {
        facility: facility_key,
        admin,
        amount,
        remaining_balance,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Withdrew {} lamports from facility {} to {} (remaining {})", amount, facility_key, admin, remaining_balance);

    Ok(amount)
}

/// Transfers the entire facility balance to the facility admin.
pub fn distribute_profits(ctx: Context<ManageProfits>) -> Result<u64> {
    ctx.accounts.authorize()?;

    let amount = ctx.accounts.facility.drain();
    ctx.accounts.pay_out(amount)?;

    let facility_key = ctx.accounts.facility.key();
    let recipient = ctx.accounts.facility.admin;

    emit!(ProfitsDistributed {
        facility: facility_key,
        recipient,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Distributed {} lamports from facility {} to admin {}", amount, facility_key, recipient);

    Ok(amount)
}
