//! Main firmware loop.
//!
//! A single cooperative loop: every 10 ms it samples all three buttons,
//! collapses them into at most one input event, drives one state machine
//! transition (a button event, or `Tick` when idle), and draws whatever
//! screen the machine emitted. The machine never touches hardware; this
//! module owns the pins, the display, the flash store, and the ROSC random
//! source.

use defmt::{info, warn};
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Instant, Timer};

use pico_slots::config::TICK_INTERVAL_MS;
use pico_slots::input::{InputEvent, InputPoller, PinSample};
use pico_slots::session::{Event, SlotMachine};

use crate::screens::draw_screen;
use crate::st7789::{St7789Flusher, St7789Renderer, framebuffer};
use crate::storage::HighScoreStore;

/// SPI frequency for the ST7789 (datasheet maximum write clock).
const SPI_FREQ_HZ: u32 = 62_500_000;

pub async fn run() -> ! {
    let p = embassy_rp::init(Default::default());
    info!("Pico slots starting...");

    // Display pins (Waveshare Pico-LCD-1.14):
    // DC=8, CS=9, CLK=10, MOSI=11, RST=12, Backlight=13
    let dc = Output::new(p.PIN_8, Level::Low);
    let cs = Output::new(p.PIN_9, Level::High);
    let rst = Output::new(p.PIN_12, Level::High);
    let mut _backlight = Output::new(p.PIN_13, Level::High); // Turn on backlight

    // Async SPI with DMA (TX-only, the display has no MISO)
    let mut config = spi::Config::default();
    config.frequency = SPI_FREQ_HZ;
    let spi = Spi::new_txonly(p.SPI1, p.PIN_10, p.PIN_11, p.DMA_CH0, config);

    let mut flusher = St7789Flusher::new(spi, dc, cs, rst);
    flusher.init().await;
    info!("Display initialized");

    // Buttons (active-low with internal pull-up): A=15, B=17, joystick-up=2
    let btn_a = Input::new(p.PIN_15, Pull::Up);
    let btn_b = Input::new(p.PIN_17, Pull::Up);
    let joy_up = Input::new(p.PIN_2, Pull::Up);
    let mut poller = InputPoller::new();

    // High score is read exactly once at boot; any failure reads as 0.
    let mut store = HighScoreStore::new(p.FLASH);
    let high_score = store.load();
    info!("High score loaded: {}", high_score);

    let mut machine = SlotMachine::new(RoscRng, high_score);

    // SAFETY: the framebuffer is only referenced from this loop.
    let buffer = unsafe { framebuffer() };

    // Boot straight into the title screen.
    {
        let mut renderer = St7789Renderer::new(&mut buffer[..]);
        draw_screen(&mut renderer, &machine.boot_screen());
    }
    flusher.flush_buffer(&buffer[..]).await;

    info!("Main loop starting");

    loop {
        Timer::after_millis(TICK_INTERVAL_MS).await;
        let now_ms = Instant::now().as_millis();

        let sample = PinSample {
            action_a: btn_a.is_low(),
            alt_action: joy_up.is_low(),
            pause: btn_b.is_low(),
        };

        // At most one transition per iteration: a debounced button event
        // wins, otherwise the periodic tick keeps the countdown live.
        let event = match poller.poll(sample, now_ms) {
            Some(InputEvent::Spin) => Event::Spin,
            Some(InputEvent::PauseToggle) => Event::PauseToggle,
            None => Event::Tick,
        };
        let output = machine.handle(event, now_ms);

        if let Some(screen) = output.screen {
            let mut renderer = St7789Renderer::new(&mut buffer[..]);
            draw_screen(&mut renderer, &screen);
            flusher.flush_buffer(&buffer[..]).await;
        }

        // Best-effort persistence: a failed save never stalls the game.
        if let Some(score) = output.save_high_score {
            match store.save(score) {
                Ok(()) => info!("High score persisted: {}", score),
                Err(_) => warn!("High score save failed"),
            }
        }
    }
}
