use anchor_lang::prelude::*;

use crate::error::ParkingError;
use crate::state::Facility;

/// Capability account proving administrative authority over one facility.
/// Minted once by `initialize`; there is no transfer or revocation path.
#[account]
#[derive(InitSpace, Debug)]
pub struct AdminCapability {
    /// Identity the capability is bound to
    pub admin: Pubkey,
    /// Facility this capability governs
    pub facility: Pubkey,
    /// Unix timestamp when issued
    pub issued_at: i64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl AdminCapability {
    /// Checks that this capability governs `facility` and that `caller` holds it.
    pub fn authorize(&self, facility_key: &Pubkey, facility: &Facility, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.facility, *facility_key, ParkingError::NotAuthorized);
        require_keys_eq!(self.admin, facility.admin, ParkingError::NotAuthorized);
        require_keys_eq!(self.admin, *caller, ParkingError::NotAuthorized);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_parking_error;

    fn setup() -> (Pubkey, Facility, AdminCapability) {
        let admin = Pubkey::new_unique();
        let facility_key = Pubkey::new_unique();
        let facility = Facility::new(admin, 4, 0, 255).unwrap();
        let cap = AdminCapability {
            admin,
            facility: facility_key,
            issued_at: 0,
            bump: 255,
        };
        (facility_key, facility, cap)
    }

    #[test]
    fn test_holder_is_authorized() {
        let (facility_key, facility, cap) = setup();
        cap.authorize(&facility_key, &facility, &facility.admin).unwrap();
    }

    #[test]
    fn test_other_caller_is_rejected() {
        let (facility_key, facility, cap) = setup();
        assert_parking_error(
            cap.authorize(&facility_key, &facility, &Pubkey::new_unique()),
            ParkingError::NotAuthorized,
        );
    }

    #[test]
    fn test_capability_for_other_admin_is_rejected() {
        let (facility_key, facility, mut cap) = setup();
        let impostor = Pubkey::new_unique();
        cap.admin = impostor;
        assert_parking_error(
            cap.authorize(&facility_key, &facility, &impostor),
            ParkingError::NotAuthorized,
        );
    }

    #[test]
    fn test_capability_for_other_facility_is_rejected() {
        let (_, facility, cap) = setup();
        assert_parking_error(
            cap.authorize(&Pubkey::new_unique(), &facility, &facility.admin),
            ParkingError::NotAuthorized,
        );
    }
}
