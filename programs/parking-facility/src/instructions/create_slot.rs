use anchor_lang::prelude::*;

use crate::{
    event::SlotCreated,
    state::{AdminCapability, Facility},
    util::constants::*,
};

#[derive(Accounts)]
pub struct CreateSlot<'info> {
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

pub fn create_slot(ctx: Context<CreateSlot>) -> Result<()> {
    let facility_key = ctx.accounts.facility.key();
    ctx.accounts
        .admin_cap
        .authorize(&facility_key, &ctx.accounts.facility, &ctx.accounts.admin.key())?;

    let facility = &mut ctx.accounts.facility;
    let slot_id = facility.add_slot()?;
    let slot_count = facility.slot_count() as u64;

    emit!(SlotCreated {
        facility: facility_key,
        slot_id,
        slot_count,
    });

    msg!("Slot {} created in facility {} ({} of {})", slot_id, facility_key, slot_count, facility.max_slots);

    Ok(())
}
