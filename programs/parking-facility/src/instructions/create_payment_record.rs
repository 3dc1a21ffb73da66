use anchor_lang::prelude::*;

use crate::{event::PaymentRecorded, state::PaymentRecord, util::clock::now_millis};

#[derive(Accounts)]
pub struct CreatePaymentRecord<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Fresh keypair account; its address is the record id
    #[account(
        init,
        payer = payer,
        space = 8 + PaymentRecord::INIT_SPACE
    )]
    pub payment_record: Account<'info, PaymentRecord>,

    pub system_program: Program<'info, System>,
}

pub fn create_payment_record(ctx: Context<CreatePaymentRecord>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.payer.key();
    let record_key = ctx.accounts.payment_record.key();
    let payment_time = now_millis()?;

    let record = &mut ctx.accounts.payment_record;
    **record = PaymentRecord {
        owner,
        amount,
        payment_time,
    };

    emit!(PaymentRecorded {
        payment_record: record_key,
        owner,
        amount,
        payment_time,
    });

    msg!("Payment record {} for {} issued to {}", record_key, amount, owner);

    Ok(())
}
