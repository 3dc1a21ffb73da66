use anchor_lang::prelude::*;

/// Payment and balance events
#[event]
pub struct PaymentRecorded {
    /// Receipt account
    pub payment_record: Pubkey,
    /// Owner of the receipt
    pub owner: Pubkey,
    pub amount: u64,
    /// Milliseconds since the unix epoch
    pub payment_time: u64,
}

#[event]
pub struct FundsDeposited {
    pub facility: Pubkey,
    pub payer: Pubkey,
    pub amount: u64,
    /// Balance after the deposit
    pub balance: u64,
}

#[event]
pub struct ProfitsWithdrawn {
    pub facility: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    /// Balance left after the withdrawal
    pub remaining_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct ProfitsDistributed {
    pub facility: Pubkey,
    /// Always the facility admin
    pub recipient: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
