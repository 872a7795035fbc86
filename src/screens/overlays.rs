//! Title, pause, and game-over screens.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use pico_slots::config::{CENTER_X, CENTER_Y};

use super::{CENTERED, LABEL_STYLE, TITLE_STYLE};

const TITLE_Y: i32 = 42;
const HINT_Y: i32 = 78;
const DETAIL_Y: i32 = 100;

pub fn draw_main<D>(display: &mut D, high_score: u32)
where
    D: DrawTarget<Color = Rgb565>,
{
    centered(display, "GAMBLING", TITLE_Y, TITLE_STYLE);
    centered(display, "Press A to start", HINT_Y, LABEL_STYLE);

    let mut line: String<24> = String::new();
    write!(line, "High Score: {high_score}").ok();
    centered(display, &line, DETAIL_Y, LABEL_STYLE);
}

pub fn draw_paused<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    // Time and score are intentionally hidden while paused.
    centered(display, "PAUSED", CENTER_Y + 8, TITLE_STYLE);
}

pub fn draw_game_over<D>(display: &mut D, score: u32)
where
    D: DrawTarget<Color = Rgb565>,
{
    centered(display, "TIME UP", TITLE_Y, TITLE_STYLE);

    let mut line: String<24> = String::new();
    write!(line, "Final Score: {score}").ok();
    centered(display, &line, HINT_Y, LABEL_STYLE);

    centered(display, "Press A to play again", DETAIL_Y, LABEL_STYLE);
}

fn centered<D>(display: &mut D, text: &str, y: i32, style: MonoTextStyle<'static, Rgb565>)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, Point::new(CENTER_X, y), style, CENTERED)
        .draw(display)
        .ok();
}
