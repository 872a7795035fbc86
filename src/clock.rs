//! Pause-aware session timing.
//!
//! [`SessionClock`] tracks wall-clock play time net of all pause intervals.
//! Callers pass the current time in explicitly (`now_ms`), so remaining time
//! is a pure function of its inputs and the same logic runs on hardware and
//! under the host test harness.
//!
//! Invariants:
//! - `accumulated_pause_ms` only grows, and only when a pause window closes.
//! - Remaining time is frozen at the pause start while paused, so no play
//!   time is lost to a paused interval.

use crate::config::GAME_DURATION_SECS;

/// Elapsed/remaining-time accounting for one session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SessionClock {
    start_ms: u64,
    accumulated_pause_ms: u64,
    /// Open pause window, present only while paused.
    pause_started_ms: Option<u64>,
}

impl SessionClock {
    /// Start the session clock at `now_ms`.
    pub const fn start(now_ms: u64) -> Self {
        Self {
            start_ms: now_ms,
            accumulated_pause_ms: 0,
            pause_started_ms: None,
        }
    }

    /// Open a pause window. No-op if already paused.
    pub fn pause(&mut self, now_ms: u64) {
        if self.pause_started_ms.is_none() {
            self.pause_started_ms = Some(now_ms);
        }
    }

    /// Close the pause window, folding its duration into the accumulator.
    /// No-op if not paused.
    pub fn resume(&mut self, now_ms: u64) {
        if let Some(started) = self.pause_started_ms.take() {
            self.accumulated_pause_ms += now_ms.saturating_sub(started);
        }
    }

    #[inline]
    pub const fn is_paused(&self) -> bool { self.pause_started_ms.is_some() }

    /// Total completed pause time in milliseconds.
    #[inline]
    pub const fn accumulated_pause_ms(&self) -> u64 { self.accumulated_pause_ms }

    /// Remaining play time in whole seconds, clamped at zero.
    ///
    /// While paused this reports the value frozen at the pause start.
    pub fn remaining_secs(&self, now_ms: u64) -> u32 {
        let effective_now = self.pause_started_ms.unwrap_or(now_ms);
        let elapsed_ms = effective_now
            .saturating_sub(self.start_ms)
            .saturating_sub(self.accumulated_pause_ms);
        GAME_DURATION_SECS.saturating_sub((elapsed_ms / 1000) as u32)
    }

    /// True once the countdown has reached zero.
    #[inline]
    pub fn is_expired(&self, now_ms: u64) -> bool { self.remaining_secs(now_ms) == 0 }
}

// =============================================================================
// Unit Tests
// =============================================================================
