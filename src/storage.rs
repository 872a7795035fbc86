//! High-score persistence in on-board flash.
//!
//! A single 8-byte record (magic tag + score) lives in the last 4 KiB sector
//! of the 2 MB flash, well clear of the program image. Loads default to 0 on
//! missing or corrupt data; saves are best-effort and must never stall the
//! game loop.

use embassy_rp::Peri;
use embassy_rp::flash::{Blocking, ERASE_SIZE, Error, Flash};
use embassy_rp::peripherals::FLASH;

/// Total flash size on the Pico board.
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// The record occupies the start of the last erase sector.
const RECORD_OFFSET: u32 = (FLASH_SIZE - ERASE_SIZE) as u32;

/// Tag marking an initialized record; anything else reads as "no score yet".
const MAGIC: u32 = 0x5350_494E; // "SPIN"

pub struct HighScoreStore<'d> {
    flash: Flash<'d, FLASH, Blocking, FLASH_SIZE>,
}

impl<'d> HighScoreStore<'d> {
    pub fn new(flash: Peri<'d, FLASH>) -> Self {
        Self {
            flash: Flash::new_blocking(flash),
        }
    }

    /// Read the persisted high score, defaulting to 0 on any failure.
    pub fn load(&mut self) -> u32 {
        let mut record = [0u8; 8];
        if self.flash.blocking_read(RECORD_OFFSET, &mut record).is_err() {
            return 0;
        }
        let magic = u32::from_le_bytes([record[0], record[1], record[2], record[3]]);
        if magic == MAGIC {
            u32::from_le_bytes([record[4], record[5], record[6], record[7]])
        } else {
            0
        }
    }

    /// Persist a new high score (erase + rewrite the reserved sector).
    pub fn save(&mut self, score: u32) -> Result<(), Error> {
        let mut record = [0u8; 8];
        record[0..4].copy_from_slice(&MAGIC.to_le_bytes());
        record[4..8].copy_from_slice(&score.to_le_bytes());
        self.flash
            .blocking_erase(RECORD_OFFSET, RECORD_OFFSET + ERASE_SIZE as u32)?;
        self.flash.blocking_write(RECORD_OFFSET, &record)
    }
}
