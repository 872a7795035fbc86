//! RGB565 color constants and the reel symbol palette.
//!
//! Middle-row symbols are drawn in a fixed per-symbol color; the table is a
//! plain array covering the full symbol range, so every symbol the reel
//! generator can produce has an entry by construction.

use embedded_graphics::pixelcolor::Rgb565;

use crate::config::SYMBOL_MIN;

pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);
pub const RED: Rgb565 = Rgb565::new(31, 0, 0);
pub const ORANGE: Rgb565 = Rgb565::new(31, 41, 0);
pub const YELLOW: Rgb565 = Rgb565::new(31, 63, 0);
pub const GREEN: Rgb565 = Rgb565::new(0, 63, 0);
pub const BLUE: Rgb565 = Rgb565::new(0, 0, 31);
pub const CYAN: Rgb565 = Rgb565::new(0, 63, 31);
pub const PINK: Rgb565 = Rgb565::new(31, 26, 22);

/// Per-symbol colors for the middle row, indexed by `symbol - SYMBOL_MIN`.
pub const SYMBOL_COLORS: [Rgb565; 9] = [
    RED,    // 1
    ORANGE, // 2
    YELLOW, // 3
    BLUE,   // 4
    CYAN,   // 5
    GREEN,  // 6
    PINK,   // 7
    YELLOW, // 8
    CYAN,   // 9
];

/// Look up the display color for a middle-row symbol.
#[inline]
pub const fn symbol_color(symbol: u8) -> Rgb565 { SYMBOL_COLORS[(symbol - SYMBOL_MIN) as usize] }

// =============================================================================
// Unit Tests
// =============================================================================
