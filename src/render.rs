//! Render request building.
//!
//! The state machine never draws; it emits a [`Screen`] value that fully
//! determines what the display layer must show. [`FrameDescription`] is built
//! by a pure function of the current session data and is never mutated after
//! construction - the same inputs always yield the same description.

use crate::reels::{ReelRows, ReelTriple};

/// Declarative description of one slot frame.
///
/// The winner flag is recomputed from the middle row on every build, never
/// cached from a stale spin.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameDescription {
    pub top: ReelTriple,
    pub mid: ReelTriple,
    pub bot: ReelTriple,
    pub score: u32,
    /// Whole seconds left, absent when no session clock is running.
    pub remaining_secs: Option<u32>,
    /// Two-frame handle alternation (up/down).
    pub toggle_phase: bool,
    pub winner: bool,
}

/// What the display collaborator must draw next.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    /// Title screen with the persisted high score.
    Main { high_score: u32 },
    /// Live slot view.
    Slot(FrameDescription),
    /// Pause overlay (time and score intentionally hidden).
    Paused,
    /// Time-up screen with the final score.
    GameOver { score: u32 },
}

/// Build a frame description from the current session state.
pub fn build_frame(rows: &ReelRows, score: u32, remaining_secs: Option<u32>, toggle_phase: bool) -> FrameDescription {
    FrameDescription {
        top: rows.top,
        mid: rows.mid,
        bot: rows.bot,
        score,
        remaining_secs,
        toggle_phase,
        winner: rows.is_winner(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
