use anchor_lang::prelude::*;

use crate::error::ParkingError;

/// Moves lamports between accounts by direct balance mutation.
/// `from` must be owned by this program and writable.
pub fn move_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let remaining = from
        .lamports()
        .checked_sub(amount)
        .ok_or(ParkingError::InsufficientBalance)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(ParkingError::ArithmeticOverflow)?;

    **from.try_borrow_mut_lamports()? = remaining;
    **to.try_borrow_mut_lamports()? = credited;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_parking_error;

    #[test]
    fn test_move_lamports() {
        let from_key = Pubkey::new_unique();
        let to_key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut from_lamports = 5_000u64;
        let mut to_lamports = 100u64;
        let mut from_data: Vec<u8> = Vec::new();
        let mut to_data: Vec<u8> = Vec::new();

        let from = AccountInfo::new(&from_key, false, true, &mut from_lamports, &mut from_data, &owner, false, 0);
        let to = AccountInfo::new(&to_key, true, true, &mut to_lamports, &mut to_data, &owner, false, 0);

        move_lamports(&from, &to, 1_500).unwrap();
        assert_eq!(from.lamports(), 3_500);
        assert_eq!(to.lamports(), 1_600);

        move_lamports(&from, &to, 0).unwrap();
        assert_eq!(from.lamports(), 3_500);
        assert_eq!(to.lamports(), 1_600);
    }

    #[test]
    fn test_move_lamports_insufficient() {
        let from_key = Pubkey::new_unique();
        let to_key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut from_lamports = 10u64;
        let mut to_lamports = 0u64;
        let mut from_data: Vec<u8> = Vec::new();
        let mut to_data: Vec<u8> = Vec::new();

        let from = AccountInfo::new(&from_key, false, true, &mut from_lamports, &mut from_data, &owner, false, 0);
        let to = AccountInfo::new(&to_key, true, true, &mut to_lamports, &mut to_data, &owner, false, 0);

        assert_parking_error(move_lamports(&from, &to, 11), ParkingError::InsufficientBalance);
        assert_eq!(from.lamports(), 10);
        assert_eq!(to.lamports(), 0);
    }
}
