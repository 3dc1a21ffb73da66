use anchor_lang::prelude::*;

use crate::{
    event::FacilityInitialized,
    state::{AdminCapability, Facility},
    util::constants::*,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Facility PDA; the fixed seed makes a second initialization fail
    #[account(
        init,
        payer = admin,
        space = 8 + Facility::INIT_SPACE,
        seeds = [FACILITY_SEED],
        bump
    )]
    pub facility: Account<'info, Facility>,

    /// Capability minted for the initializing identity
    #[account(
        init,
        payer = admin,
        space = 8 + AdminCapability::INIT_SPACE,
        seeds = [ADMIN_CAP_SEED, facility.key().as_ref()],
        bump
    )]
    pub admin_cap: Account<'info, AdminCapability>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, max_slots: u16) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let facility_key = ctx.accounts.facility.key();
    let admin_cap_key = ctx.accounts.admin_cap.key();
    let clock = Clock::get()?;

    let facility = &mut ctx.accounts.facility;
    **facility = Facility::new(admin, max_slots, clock.unix_timestamp, ctx.bumps.facility)?;

    let admin_cap = &mut ctx.accounts.admin_cap;
    **admin_cap = AdminCapability {
        admin,
        facility: facility_key,
        issued_at: clock.unix_timestamp,
        bump: ctx.bumps.admin_cap,
    };

    emit!(FacilityInitialized {
        facility: facility_key,
        admin,
        admin_cap: admin_cap_key,
        max_slots,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Parking facility {} initialized. Admin {} holds capability {} (max {} slots)",
        facility_key,
        admin,
        admin_cap_key,
        max_slots
    );

    Ok(())
}
