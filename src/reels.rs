//! Reel randomization and scoring.
//!
//! A spin draws nine independent uniform samples from the symbol range, three
//! per row. Only the middle row is ever scored; top and bottom rows are
//! decorative. The random source is injected as [`RngCore`] so spin sequences
//! are reproducible in tests and driven by the ROSC on hardware.

use rand_core::RngCore;

use crate::config::{REEL_COLUMNS, SYMBOL_MAX, SYMBOL_MIN};

/// One reel row: an ordered triple of symbols.
pub type ReelTriple = [u8; REEL_COLUMNS];

/// The three reel rows shown per frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReelRows {
    pub top: ReelTriple,
    pub mid: ReelTriple,
    pub bot: ReelTriple,
}

impl ReelRows {
    /// Draw all nine symbols for a fresh spin.
    pub fn spin<R: RngCore>(rng: &mut R) -> Self {
        Self {
            top: spin_row(rng),
            mid: spin_row(rng),
            bot: spin_row(rng),
        }
    }

    /// A winner is defined solely by middle-row equality.
    #[inline]
    pub const fn is_winner(&self) -> bool { self.mid[0] == self.mid[1] && self.mid[1] == self.mid[2] }

    /// Score awarded by this spin: the shared middle-row symbol value, or 0.
    #[inline]
    pub const fn score_delta(&self) -> u32 {
        if self.is_winner() { self.mid[0] as u32 } else { 0 }
    }
}

fn spin_row<R: RngCore>(rng: &mut R) -> ReelTriple {
    let mut row = [0u8; REEL_COLUMNS];
    for symbol in &mut row {
        *symbol = draw_symbol(rng);
    }
    row
}

/// Draw one symbol uniformly from `SYMBOL_MIN..=SYMBOL_MAX`.
#[inline]
fn draw_symbol<R: RngCore>(rng: &mut R) -> u8 {
    let span = u32::from(SYMBOL_MAX - SYMBOL_MIN + 1);
    SYMBOL_MIN + (rng.next_u32() % span) as u8
}

// =============================================================================
// Unit Tests
// =============================================================================
