// ========== PDA SEEDS ==========
/// Seed for the facility PDA. A fixed seed means a single facility per deployment.
pub const FACILITY_SEED: &[u8] = b"facility";

/// Seed for the admin capability PDA, combined with the facility address
pub const ADMIN_CAP_SEED: &[u8] = b"admin_cap";

// ========== FACILITY CONFIGURATION ==========
/// Upper bound on slots a facility account can hold; sizes `Facility::slots`.
pub const MAX_SLOTS: usize = 64;

// ========== TIMING CONSTANTS ==========
/// Slot timestamps are kept in milliseconds, the clock sysvar reports seconds
pub const MILLIS_PER_SECOND: u64 = 1_000;
