//! ST7789 display driver for the Waveshare Pico-LCD-1.14 (135x240 panel).
//!
//! The driver is split into two components, following the renderer/flusher
//! pattern:
//! - [`St7789Renderer`]: Implements `DrawTarget`, writes to the framebuffer
//! - [`St7789Flusher`]: Owns the SPI peripheral, handles reset, init, and
//!   async DMA transfers
//!
//! The game redraws at most a handful of frames per second, so a single
//! 64.8 KB framebuffer is enough; every frame clears and redraws in full and
//! is then flushed through a pre-configured full-screen window.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Async, Spi};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;

use pico_slots::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Display dimensions (landscape mode after rotation).
pub const WIDTH: usize = SCREEN_WIDTH as usize;
pub const HEIGHT: usize = SCREEN_HEIGHT as usize;
const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

/// The 135x240 glass sits inside the controller's 240x320 RAM.
const X_OFFSET: u16 = 40;
const Y_OFFSET: u16 = 53;

/// Upper bound on a single SPI transfer during a flush.
const FLUSH_CHUNK: usize = 4096;

/// Static framebuffer (64,800 bytes).
static mut FRAMEBUFFER: [u8; BUFFER_SIZE] = [0u8; BUFFER_SIZE];

// ST7789 Commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MX: u8 = 0x40; // Column address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange
const MADCTL_ML: u8 = 0x10; // Line refresh order

/// Get the static framebuffer.
///
/// # Safety
/// Must only be called once; the buffer is owned by the single render/flush
/// loop.
pub unsafe fn framebuffer() -> &'static mut [u8] { unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER) } }

/// ST7789 flusher - owns SPI and the control pins, pushes framebuffers to the
/// panel via async DMA transfers.
pub struct St7789Flusher<'d> {
    spi: Spi<'d, SPI1, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
    rst: Output<'d>,
}

impl<'d> St7789Flusher<'d> {
    pub fn new(spi: Spi<'d, SPI1, Async>, dc: Output<'d>, cs: Output<'d>, rst: Output<'d>) -> Self {
        Self { spi, dc, cs, rst }
    }

    /// Hardware reset pulse followed by the init sequence.
    pub async fn init(&mut self) {
        self.rst.set_low();
        Timer::after_millis(50).await;
        self.rst.set_high();
        Timer::after_millis(50).await;

        // Software reset
        self.write_command(SWRESET).await;
        Timer::after_millis(150).await;

        // Exit sleep mode
        self.write_command(SLPOUT).await;
        Timer::after_millis(120).await;

        // Set pixel format to RGB565 (16-bit)
        self.write_command(COLMOD).await;
        self.write_data(&[0x55]).await;

        // Memory access control for landscape orientation
        self.write_command(MADCTL).await;
        self.write_data(&[MADCTL_MX | MADCTL_MV | MADCTL_ML]).await;

        // Inversion on (required for this panel)
        self.write_command(INVON).await;
        Timer::after_millis(10).await;

        // Normal display mode
        self.write_command(NORON).await;
        Timer::after_millis(10).await;

        // Display on
        self.write_command(DISPON).await;
        Timer::after_millis(50).await;

        // Pre-set window to the full visible area; RAMWR resets the write
        // pointer to the window start on every flush.
        self.set_window(X_OFFSET, Y_OFFSET, WIDTH as u16, HEIGHT as u16).await;
    }

    /// Send a command byte (DC low, CS low during transfer).
    async fn write_command(&mut self, cmd: u8) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        self.cs.set_high();
    }

    /// Send data bytes (DC high, CS low during transfer).
    async fn write_data(&mut self, data: &[u8]) {
        self.cs.set_low();
        self.dc.set_high();
        self.spi.write(data).await.ok();
        self.cs.set_high();
    }

    /// Set the drawing window (absolute controller coordinates).
    async fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16) {
        let x1 = x + w - 1;
        let y1 = y + h - 1;

        self.write_command(CASET).await;
        self.write_data(&[(x >> 8) as u8, x as u8, (x1 >> 8) as u8, x1 as u8])
            .await;

        self.write_command(RASET).await;
        self.write_data(&[(y >> 8) as u8, y as u8, (y1 >> 8) as u8, y1 as u8])
            .await;
    }

    /// Flush a framebuffer to the display in bounded DMA chunks.
    pub async fn flush_buffer(&mut self, buffer: &[u8]) {
        self.cs.set_low();
        self.dc.set_low();
        // Single-byte command: blocking write is faster than DMA setup
        self.spi.blocking_write(&[RAMWR]).ok();
        self.dc.set_high();
        for chunk in buffer.chunks(FLUSH_CHUNK) {
            self.spi.write(chunk).await.ok();
        }
        self.cs.set_high();
    }
}

/// ST7789 renderer - implements `DrawTarget` over a framebuffer reference.
///
/// Does not own any hardware; create one per frame over the static buffer.
pub struct St7789Renderer<'a> {
    framebuffer: &'a mut [u8],
}

impl<'a> St7789Renderer<'a> {
    pub fn new(framebuffer: &'a mut [u8]) -> Self { Self { framebuffer } }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let idx = (y as usize * WIDTH + x as usize) * 2;
            let raw: RawU16 = color.into();
            let bytes = raw.into_inner().to_be_bytes();
            self.framebuffer[idx] = bytes[0];
            self.framebuffer[idx + 1] = bytes[1];
        }
    }
}

impl OriginDimensions for St7789Renderer<'_> {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl DrawTarget for St7789Renderer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        for pixel in self.framebuffer.chunks_exact_mut(2) {
            pixel[0] = bytes[0];
            pixel[1] = bytes[1];
        }
        Ok(())
    }
}
