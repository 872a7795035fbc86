//! Fixed compile-time configuration for the slot machine game.
//!
//! There is no runtime configuration surface: the device boots straight into
//! the title screen with these values baked in.

/// Length of one play session in seconds.
pub const GAME_DURATION_SECS: u32 = 120;

/// Lowest reel symbol (inclusive).
pub const SYMBOL_MIN: u8 = 1;

/// Highest reel symbol (inclusive).
pub const SYMBOL_MAX: u8 = 9;

/// Number of symbols per reel row.
pub const REEL_COLUMNS: usize = 3;

/// Main loop poll period in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 10;

/// How long a pin must stay asserted before a press event is emitted.
pub const SETTLE_MS: u64 = 50;

/// Minimum countdown redraw interval while playing and unpaused.
pub const REDRAW_INTERVAL_MS: u64 = 1000;

// =============================================================================
// Display geometry (Pico-LCD-1.14 driven in landscape)
// =============================================================================

/// Screen width in pixels.
pub const SCREEN_WIDTH: u32 = 240;

/// Screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 135;

/// Horizontal screen center.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Vertical screen center.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_range_is_nine_symbols() {
        assert_eq!(SYMBOL_MAX - SYMBOL_MIN + 1, 9);
    }

    #[test]
    fn test_settle_window_shorter_than_redraw() {
        // A press must settle well within one countdown redraw interval,
        // otherwise held buttons would starve the 1 Hz timer refresh.
        assert!(SETTLE_MS < REDRAW_INTERVAL_MS);
        assert!(TICK_INTERVAL_MS < SETTLE_MS);
    }
}
