//! Slot machine game library - testable core for the Pico slots firmware.
//!
//! This library contains the game logic that can be tested on the host
//! machine. The binary (`main.rs`) uses this library and adds the
//! embedded-specific code (display driver, flash storage, pin setup).
//!
//! All time-dependent logic takes an explicit `now_ms: u64` instead of
//! sampling a shared clock, so sessions, pause accounting, and input
//! debouncing run identically under the host test harness and on hardware.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

// Timing engine
pub mod clock;

// Configuration
pub mod config;

// Input debouncing and edge detection
pub mod input;

// Reel randomization and scoring
pub mod reels;

// Render request building (frame descriptions and screens)
pub mod render;

// Session state machine
pub mod session;

// UI palette and the symbol -> color table
pub mod colors;
