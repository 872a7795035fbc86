//! Slot machine firmware for Raspberry Pi Pico (RP2040)
//!
//! Runs the slot machine game on a Waveshare Pico-LCD-1.14 (ST7789, 135x240).
//!
//! # Button Controls
//!
//! - **A** (GP15): Spin / start / restart
//! - **B** (GP17): Pause toggle
//! - **Joystick up** (GP2): Alternate spin button
//!
//! # Architecture
//!
//! A single cooperative loop polls the inputs every 10 ms, drives at most one
//! state transition per iteration through `pico_slots::session::SlotMachine`,
//! and redraws the full frame whenever the machine emits a screen. All game
//! logic lives in the host-testable library; this binary only wires up pins,
//! the display, flash persistence, and the hardware random source.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod app;
#[cfg(target_arch = "arm")]
mod screens;
#[cfg(target_arch = "arm")]
mod st7789;
#[cfg(target_arch = "arm")]
mod storage;

#[cfg(target_arch = "arm")]
use {defmt_rtt as _, panic_probe as _};

// Program metadata for `picotool info`
#[cfg(target_arch = "arm")]
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico-slots"),
    embassy_rp::binary_info::rp_program_description!(c"Slot machine game for the Pico-LCD-1.14"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(_spawner: embassy_executor::Spawner) { app::run().await }

/// The firmware entry point only exists for the ARM target; host builds of
/// this binary are a stub so `cargo test` works without a cross toolchain.
#[cfg(not(target_arch = "arm"))]
fn main() {}
