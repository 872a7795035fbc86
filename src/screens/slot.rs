//! Live slot view: three reel rows, two-frame handle art, score, countdown,
//! and the winner banner.
//!
//! The layout keeps the score and time at fixed x positions so they do not
//! jitter as the handle art changes width between the two frames.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use pico_slots::colors::{WHITE, symbol_color};
use pico_slots::reels::ReelTriple;
use pico_slots::render::FrameDescription;

use super::label;

const BORDER_X: i32 = 10;
const DIGITS_X: i32 = 26;
const DIGIT_STEP: i32 = 12;
const ART_X: i32 = DIGITS_X + 3 * DIGIT_STEP;
const STATUS_X: i32 = 150;

// Row baselines, top to bottom
const ROW_TOP_BORDER: i32 = 14;
const ROW_TOP: i32 = 32;
const ROW_MID: i32 = 50;
const ROW_BOT: i32 = 68;
const ROW_BOTTOM_BORDER: i32 = 86;
const ROW_HANDLE_KNOB: i32 = 104;
const ROW_WINNER: i32 = 122;

pub fn draw_slot<D>(display: &mut D, frame: &FrameDescription)
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut score: String<16> = String::new();
    write!(score, "Score: {}", frame.score).ok();

    // An absent countdown renders the same as an expired one.
    let remaining = frame.remaining_secs.unwrap_or(0);
    let mut time: String<16> = String::new();
    write!(time, "Time: {}:{:02}", remaining / 60, remaining % 60).ok();

    label(display, "=========", BORDER_X, ROW_TOP_BORDER);

    // Top row, with the handle knob while the handle is up
    label(display, "||", BORDER_X, ROW_TOP);
    draw_symbols(display, &frame.top, ROW_TOP, false);
    label(display, if frame.toggle_phase { "||" } else { "||  O" }, ART_X, ROW_TOP);
    label(display, &score, STATUS_X, ROW_TOP);

    // Middle row, per-symbol colors
    label(display, "|-", BORDER_X, ROW_MID);
    draw_symbols(display, &frame.mid, ROW_MID, true);
    label(display, if frame.toggle_phase { "-|" } else { "-| /" }, ART_X, ROW_MID);
    label(display, &time, STATUS_X, ROW_MID);

    // Bottom row
    label(display, "||", BORDER_X, ROW_BOT);
    draw_symbols(display, &frame.bot, ROW_BOT, false);
    label(display, if frame.toggle_phase { "||\\" } else { "||/" }, ART_X, ROW_BOT);

    if frame.toggle_phase {
        // Handle pulled down: the arm trails off the border to a knob below
        label(display, "========= \\", BORDER_X, ROW_BOTTOM_BORDER);
        label(display, "           O", BORDER_X, ROW_HANDLE_KNOB);
    } else {
        label(display, "=========", BORDER_X, ROW_BOTTOM_BORDER);
    }

    if frame.winner {
        label(display, "ding ding ding winner", BORDER_X, ROW_WINNER);
    }
}

/// Draw one reel row's symbols at fixed columns. The middle row is colored
/// per symbol; the decorative rows are plain white.
fn draw_symbols<D>(display: &mut D, row: &ReelTriple, y: i32, colored: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    for (i, &symbol) in row.iter().enumerate() {
        let mut digit: String<4> = String::new();
        write!(digit, "{symbol}").ok();

        let color = if colored { symbol_color(symbol) } else { WHITE };
        let style = MonoTextStyle::new(&FONT_6X10, color);
        let x = DIGITS_X + i as i32 * DIGIT_STEP;
        Text::new(&digit, Point::new(x, y), style).draw(display).ok();
    }
}
