use anchor_lang::prelude::*;

/// Facility lifecycle events
#[event]
pub struct FacilityInitialized {
    /// Facility account
    pub facility: Pubkey,
    /// Administrator bound to the facility and capability
    pub admin: Pubkey,
    /// Capability account minted for the administrator
    pub admin_cap: Pubkey,
    /// Configured slot limit
    pub max_slots: u16,
    /// Timestamp of initialization
    pub timestamp: i64,
}

#[event]
pub struct SlotCreated {
    pub facility: Pubkey,
    pub slot_id: u64,
    /// Number of slots after creation
    pub slot_count: u64,
}
