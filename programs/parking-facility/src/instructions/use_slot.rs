use anchor_lang::prelude::*;

use crate::{
    event::{SlotEntered, SlotExited, SlotReserved},
    state::Facility,
    util::{clock::now_millis, constants::*},
};

/// Accounts shared by the occupancy transitions. Any signer may drive them.
#[derive(Accounts)]
pub struct UseSlot<'info> {
    pub actor: Signer<'info>,

    #[account(
        mut,
        seeds = [FACILITY_SEED],
        bump = facility.bump
    )]
    pub facility: Account<'info, Facility>,
}

pub fn reserve_slot(ctx: Context<UseSlot>, slot_id: u64) -> Result<()> {
    let facility_key = ctx.accounts.facility.key();
    let actor = ctx.accounts.actor.key();

    ctx.accounts.facility.slot_mut(slot_id)?.reserve()?;

    emit!(SlotReserved {
        facility: facility_key,
        slot_id,
        actor,
    });

    msg!("Slot {} reserved by {}", slot_id, actor);

    Ok(())
}

pub fn enter_slot(ctx: Context<UseSlot>, slot_id: u64) -> Result<()> {
    let facility_key = ctx.accounts.facility.key();
    let actor = ctx.accounts.actor.key();
    let now = now_millis()?;

    ctx.accounts.facility.slot_mut(slot_id)?.enter(now)?;

    emit!(SlotEntered {
        facility: facility_key,
        slot_id,
        actor,
        start_time: now,
    });

    msg!("Slot {} entered by {} at {}", slot_id, actor, now);

    Ok(())
}

pub fn exit_slot(ctx: Context<UseSlot>, slot_id: u64) -> Result<()> {
    let facility_key = ctx.accounts.facility.key();
    let actor = ctx.accounts.actor.key();
    let now = now_millis()?;

    let slot = ctx.accounts.facility.slot_mut(slot_id)?;
    slot.exit(now)?;
    let start_time = slot.cycle_start();

    emit!(SlotExited {
        facility: facility_key,
        slot_id,
        actor,
        start_time,
        end_time: now,
    });

    match start_time {
        Some(start_time) => msg!("Slot {} exited by {} at {} (entered {})", slot_id, actor, now, start_time),
        None => msg!("Slot {} exited by {} at {} (reserved, no start time)", slot_id, actor, now),
    }

    Ok(())
}
