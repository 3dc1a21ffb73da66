use anchor_lang::prelude::*;

#[error_code]
pub enum ParkingError {
    // ========== AUTHORIZATION ERRORS ==========
    #[msg("Admin capability does not authorize this operation")]
    NotAuthorized,

    // ========== SLOT ERRORS ==========
    #[msg("Slot is not in a state that allows this transition")]
    SlotUnavailable,

    #[msg("No slot with the given id exists in this facility")]
    SlotNotFound,

    #[msg("Facility has reached its configured slot limit")]
    FacilityFull,

    // ========== TREASURY ERRORS ==========
    #[msg("Requested amount exceeds the facility balance")]
    InsufficientBalance,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    // ========== TIMING ERRORS ==========
    #[msg("End time precedes start time")]
    InvalidTimeRange,

    #[msg("Clock returned a timestamp before the unix epoch")]
    InvalidTimestamp,

    // ========== GENERAL ERRORS ==========
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Invalid configuration")]
    InvalidConfiguration,
}

impl ParkingError {
    /// Code carried by `InstructionError::Custom` when this error aborts a transaction.
    pub fn custom_code(self) -> u32 {
        self as u32 + anchor_lang::error::ERROR_CODE_OFFSET
    }
}

#[cfg(test)]
pub(crate) fn assert_parking_error<T: std::fmt::Debug>(result: Result<T>, expected: ParkingError) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            expected.custom_code(),
            "expected {:?}, got {}",
            expected,
            err.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_codes_follow_anchor_offset() {
        assert_eq!(ParkingError::NotAuthorized.custom_code(), 6000);
        assert_eq!(ParkingError::SlotUnavailable.custom_code(), 6001);
        assert_eq!(ParkingError::InsufficientBalance.custom_code(), 6004);
    }
}
