//! Screen rendering for the slot machine.
//!
//! - `slot`: Live slot view (reel rows, handle art, score, countdown)
//! - `overlays`: Title, pause, and game-over screens
//!
//! There is no partial-update path: every emitted [`Screen`] clears the
//! framebuffer and redraws in full.

mod overlays;
mod slot;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Text, TextStyle, TextStyleBuilder};
use profont::PROFONT_18_POINT;

use pico_slots::colors::{BLACK, WHITE};
use pico_slots::render::Screen;

// Pre-computed text styles (const - zero runtime cost)

/// Centered text alignment, used by the overlay screens.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Small monospace style for reel rows and hints.
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Large style for screen titles.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Clear the framebuffer and draw the given screen in full.
pub fn draw_screen<D>(display: &mut D, screen: &Screen)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    match screen {
        Screen::Main { high_score } => overlays::draw_main(display, *high_score),
        Screen::Slot(frame) => slot::draw_slot(display, frame),
        Screen::Paused => overlays::draw_paused(display),
        Screen::GameOver { score } => overlays::draw_game_over(display, *score),
    }
}

/// Left-aligned label in the small style.
fn label<D>(display: &mut D, text: &str, x: i32, y: i32)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::new(text, Point::new(x, y), LABEL_STYLE).draw(display).ok();
}
