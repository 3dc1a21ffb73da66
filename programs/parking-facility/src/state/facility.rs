use anchor_lang::prelude::*;

use crate::error::ParkingError;
use crate::state::Slot;
use crate::util::constants::MAX_SLOTS;

/// Facility account: the slot list and the withdrawable fee balance.
///
/// `balance` tracks lamports held on top of the account's rent-exempt
/// reserve; only deposits, withdrawals and distributions change it.
#[account]
#[derive(InitSpace, Debug)]
pub struct Facility {
    /// Administrator identity, fixed at initialization
    pub admin: Pubkey,
    /// Withdrawable lamports
    pub balance: u64,
    /// Slot limit chosen at initialization, at most MAX_SLOTS
    pub max_slots: u16,
    /// Id handed to the next created slot
    pub next_slot_id: u64,
    /// Unix timestamp when created
    pub created_at: i64,
    /// Bump seed for PDA
    pub bump: u8,
    /// Slots in creation order
    #[max_len(MAX_SLOTS)]
    pub slots: Vec<Slot>,
}

impl Facility {
    pub fn new(admin: Pubkey, max_slots: u16, created_at: i64, bump: u8) -> Result<Self> {
        require!(
            max_slots > 0 && usize::from(max_slots) <= MAX_SLOTS,
            ParkingError::InvalidConfiguration
        );

        Ok(Self {
            admin,
            balance: 0,
            max_slots,
            next_slot_id: 0,
            created_at,
            bump,
            slots: Vec::new(),
        })
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Appends a vacant slot and returns its id.
    pub fn add_slot(&mut self) -> Result<u64> {
        require!(
            self.slots.len() < usize::from(self.max_slots),
            ParkingError::FacilityFull
        );

        let id = self.next_slot_id;
        self.next_slot_id = id.checked_add(1).ok_or(ParkingError::ArithmeticOverflow)?;
        self.slots.push(Slot::new(id));

        Ok(id)
    }

    pub fn slot(&self, slot_id: u64) -> Result<&Slot> {
        self.slots
            .iter()
            .find(|slot| slot.id == slot_id)
            .ok_or_else(|| error!(ParkingError::SlotNotFound))
    }

    pub fn slot_mut(&mut self, slot_id: u64) -> Result<&mut Slot> {
        self.slots
            .iter_mut()
            .find(|slot| slot.id == slot_id)
            .ok_or_else(|| error!(ParkingError::SlotNotFound))
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(ParkingError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.balance, ParkingError::InsufficientBalance);
        self.balance -= amount;
        Ok(())
    }

    /// Empties the balance, returning what it held.
    pub fn drain(&mut self) -> u64 {
        std::mem::take(&mut self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_parking_error;

    fn facility(max_slots: u16) -> Facility {
        Facility::new(Pubkey::new_unique(), max_slots, 1_700_000_000, 254).unwrap()
    }

    #[test]
    fn test_account_space_matches_slot_capacity() {
        assert_eq!(Slot::INIT_SPACE, 8 + 1 + 8 + 8 + 1);
        let expected = 32 + 8 + 2 + 8 + 8 + 1 + 4 + MAX_SLOTS * Slot::INIT_SPACE;
        assert_eq!(Facility::INIT_SPACE, expected);
    }

    #[test]
    fn test_new_facility_is_empty() {
        let facility = facility(4);
        assert_eq!(facility.balance, 0);
        assert_eq!(facility.slot_count(), 0);
        assert_eq!(facility.next_slot_id, 0);
    }

    #[test]
    fn test_new_facility_rejects_bad_limits() {
        let admin = Pubkey::new_unique();
        assert_parking_error(Facility::new(admin, 0, 0, 255), ParkingError::InvalidConfiguration);
        assert_parking_error(
            Facility::new(admin, MAX_SLOTS as u16 + 1, 0, 255),
            ParkingError::InvalidConfiguration,
        );
        assert!(Facility::new(admin, MAX_SLOTS as u16, 0, 255).is_ok());
    }

    #[test]
    fn test_add_slot_appends_vacant_slots_in_order() {
        let mut facility = facility(3);
        assert_eq!(facility.add_slot().unwrap(), 0);
        assert_eq!(facility.add_slot().unwrap(), 1);

        assert_eq!(facility.slot_count(), 2);
        assert_eq!(facility.slots[1], Slot::new(1));
        assert!(facility.slots.iter().all(Slot::is_vacant));
    }

    #[test]
    fn test_add_slot_respects_limit() {
        let mut facility = facility(1);
        facility.add_slot().unwrap();
        assert_parking_error(facility.add_slot(), ParkingError::FacilityFull);
        assert_eq!(facility.slot_count(), 1);
        assert_eq!(facility.next_slot_id, 1);
    }

    #[test]
    fn test_slot_lookup() {
        let mut facility = facility(2);
        let id = facility.add_slot().unwrap();

        facility.slot_mut(id).unwrap().enter(1_000).unwrap();
        assert!(facility.slot(id).unwrap().occupied);
        assert_parking_error(facility.slot(7), ParkingError::SlotNotFound);
        assert_parking_error(facility.slot_mut(7), ParkingError::SlotNotFound);
    }

    #[test]
    fn test_debit_succeeds_only_within_balance() {
        let mut facility = facility(1);
        facility.credit(500).unwrap();

        assert_parking_error(facility.debit(501), ParkingError::InsufficientBalance);
        assert_eq!(facility.balance, 500);

        facility.debit(200).unwrap();
        assert_eq!(facility.balance, 300);
        facility.debit(300).unwrap();
        assert_eq!(facility.balance, 0);
        facility.debit(0).unwrap();
    }

    #[test]
    fn test_credit_overflow() {
        let mut facility = facility(1);
        facility.credit(u64::MAX).unwrap();
        assert_parking_error(facility.credit(1), ParkingError::ArithmeticOverflow);
        assert_eq!(facility.balance, u64::MAX);
    }

    #[test]
    fn test_drain_empties_balance() {
        let mut facility = facility(1);
        facility.credit(750).unwrap();
        assert_eq!(facility.drain(), 750);
        assert_eq!(facility.balance, 0);
        assert_eq!(facility.drain(), 0);
    }
}
