use anchor_lang::prelude::*;

#[event]
pub struct SlotReserved {
    pub facility: Pubkey,
    pub slot_id: u64,
    pub actor: Pubkey,
}

#[event]
pub struct SlotEntered {
    pub facility: Pubkey,
    pub slot_id: u64,
    pub actor: Pubkey,
    /// Milliseconds since the unix epoch
    pub start_time: u64,
}

#[event]
pub struct SlotExited {
    pub facility: Pubkey,
    pub slot_id: u64,
    pub actor: Pubkey,
    /// `None` when the slot was claimed with `reserve_slot`
    pub start_time: Option<u64>,
    pub end_time: u64,
}
