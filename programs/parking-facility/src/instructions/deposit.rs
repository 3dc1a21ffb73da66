use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{
    error::ParkingError,
    event::FundsDeposited,
    state::Facility,
    util::constants::*,
};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [FACILITY_SEED],
        bump = facility.bump
    )]
    pub facility: Account<'info, Facility>,

    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, ParkingError::InvalidAmount);

    let payer = ctx.accounts.payer.key();
    let facility_key = ctx.accounts.facility.key();

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.facility.to_account_info(),
            },
        ),
        amount,
    )?;

    let facility = &mut ctx.accounts.facility;
    facility.credit(amount)?;

    emit!(FundsDeposited {
        facility: facility_key,
        payer,
        amount,
        balance: facility.balance,
    });

    msg!("Deposited {} lamports from {} into facility {} (balance {})", amount, payer, facility_key, facility.balance);

    Ok(())
}
