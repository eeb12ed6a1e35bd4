//! Battery power-latch firmware for RP2040.
//!
//! This crate provides the embedded implementation of the smart-battery
//! power board: it gates boot on a pack-voltage probe and a button hold,
//! drives the charge-tier LEDs and a status panel, and owns the
//! power-latch line.
//!
//! # Overview
//!
//! The firmware runs on an RP2040 carrier and, at power-on:
//! 1. Probes the fuel gauge's pack voltage over SMBus
//! 2. Runs the button-hold evaluation window if no external power shows
//! 3. Either continues into monitoring or cuts the power latch for good
//!
//! # Hardware Configuration
//!
//! | Function  | GPIO  | Description |
//! |-----------|-------|-------------|
//! | Gauge SDA | 4     | Fuel gauge SMBus data (I2C0) |
//! | Gauge SCL | 5     | Fuel gauge SMBus clock (I2C0) |
//! | Button    | 6     | Power button (active-low, internal pull-up) |
//! | LED 1-5   | 10-14 | Charge-tier indicators, first to fifth |
//! | PWR_EN    | 15    | Power-latch enable (high = powered) |
//! | Panel SDA | 2     | Status panel I2C data (I2C1) |
//! | Panel SCL | 3     | Status panel I2C clock (I2C1) |
//!
//! # Architecture
//!
//! Boot runs single-task: the power-latch controller owns every
//! peripheral until its decision is made. On the boot-continuing paths
//! the peripherals are decomposed and monitoring starts as two loops: a
//! gauge poll task publishing the latest [`TelemetrySample`] through an
//! Embassy [`Signal`](embassy_sync::signal::Signal) ("latest value
//! wins"), and the main task consuming it to refresh the LEDs and the
//! panel.
//!
//! # Modules
//!
//! - [`smbus`]: SMBus shim with PEC checking ([`SmbusDevice`])
//! - [`controls`]: GPIO button/LED/latch impls ([`GpioButton`], [`GpioStatusLeds`], [`GpioPowerLatch`])
//! - [`display`]: SSD1306 status panel ([`OledStatus`])
//! - [`clock`]: embassy time source ([`EmbassyClock`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//!
//! # Re-exports
//!
//! This crate re-exports the public items from [`bms_core`] for
//! convenience, so consumers only need to depend on this crate.

#![no_std]

// Re-export core types for convenience
pub use bms_core::{
    charge_pattern, BootDecision, FuelGauge, HoldPolicy, LatchConfig, MonotonicClock,
    PowerButton, PowerLatch, PowerLatchController, ProbeError, SmbusTransport, StatusDisplay,
    StatusIndicator, StatusLeds, TelemetrySource, TransportError, LED_COUNT,
};
pub use sbs_proto::TelemetrySample;

pub mod clock;
pub mod controls;
pub mod display;
pub mod smbus;

pub use clock::EmbassyClock;
pub use controls::{GpioButton, GpioPowerLatch, GpioStatusLeds};
pub use display::OledStatus;
pub use smbus::SmbusDevice;
