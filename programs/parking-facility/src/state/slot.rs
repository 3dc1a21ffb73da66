use anchor_lang::prelude::*;

use crate::error::ParkingError;

/// A single parking space, stored inline in its facility's slot list.
///
/// Occupancy is a two-state toggle. `reserve` and `enter` both move a vacant
/// slot to occupied, only `enter` stamps `start_time`. A reserved cycle is
/// marked `untimed` so the previous cycle's `start_time` is never read as its
/// start. Timestamps are milliseconds since the unix epoch.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Slot {
    /// Facility-scoped id, assigned at creation and never reused
    pub id: u64,
    pub occupied: bool,
    pub start_time: u64,
    pub end_time: u64,
    /// Current or last cycle began with `reserve` and has no start time
    pub untimed: bool,
}

impl Slot {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn is_vacant(&self) -> bool {
        !self.occupied
    }

    pub fn reserve(&mut self) -> Result<()> {
        require!(self.is_vacant(), ParkingError::SlotUnavailable);
        self.occupied = true;
        self.untimed = true;
        Ok(())
    }

    pub fn enter(&mut self, now_ms: u64) -> Result<()> {
        require!(self.is_vacant(), ParkingError::SlotUnavailable);
        self.occupied = true;
        self.start_time = now_ms;
        self.untimed = false;
        Ok(())
    }

    pub fn exit(&mut self, now_ms: u64) -> Result<()> {
        require!(self.occupied, ParkingError::SlotUnavailable);
        // a completed timed cycle always satisfies end_time >= start_time
        if let Some(start_time) = self.cycle_start() {
            require!(now_ms >= start_time, ParkingError::InvalidTimeRange);
        }
        self.occupied = false;
        self.end_time = now_ms;
        Ok(())
    }

    /// Start of the current or last cycle, `None` when it began with `reserve`.
    pub fn cycle_start(&self) -> Option<u64> {
        (!self.untimed).then_some(self.start_time)
    }

    /// Length of the last completed occupancy cycle in milliseconds.
    /// Fails for untimed cycles, which have no start to measure from.
    pub fn duration(&self) -> Result<u64> {
        let start_time = self
            .cycle_start()
            .ok_or(ParkingError::InvalidTimeRange)?;
        self.end_time
            .checked_sub(start_time)
            .ok_or_else(|| error!(ParkingError::InvalidTimeRange))
    }
}
