//! Platform-agnostic battery power-latch control logic.
//!
//! This crate provides the control core for a smart-battery power
//! board: telemetry polling, charge-tier LED indication, and the
//! button-hold power-down state machine. It has no platform
//! dependencies; hardware enters through small traits, so the same
//! logic runs on the board and under host tests.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`transport`]: SMBus device trait ([`SmbusTransport`])
//! - [`gauge`]: fuel gauge client ([`FuelGauge`], [`TelemetrySource`])
//! - [`indicator`]: charge-tier LEDs ([`StatusIndicator`], [`charge_pattern`])
//! - [`display`]: text panel trait ([`StatusDisplay`])
//! - [`controls`]: button and latch traits ([`PowerButton`], [`PowerLatch`])
//! - [`clock`]: injectable time source ([`MonotonicClock`])
//! - [`policy`]: button-hold accounting ([`HoldPolicy`], [`HoldWindow`])
//! - [`controller`]: the state machine ([`PowerLatchController`])
//!
//! # Boot flow
//!
//! ```text
//! ProbingPackVoltage -> { EarlyExit, Sampling }
//! Sampling           -> { Continue, PoweringDown }
//! PoweringDown       -> Halted (never returns)
//! ```
//!
//! The boot sequence constructs a [`PowerLatchController`] over the
//! board's peripherals and awaits [`run`](PowerLatchController::run)
//! once. A returned [`BootDecision`] means boot continues; on the
//! powered-down path the call never returns and only a hardware power
//! cycle recovers.
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod clock;
pub mod controller;
pub mod controls;
pub mod display;
pub mod gauge;
pub mod indicator;
pub mod policy;
pub mod transport;

// Re-export main types at crate root
pub use clock::MonotonicClock;
pub use controller::{BootDecision, LatchConfig, PowerLatchController};
pub use controls::{PowerButton, PowerLatch};
pub use display::{NullStatusDisplay, StatusDisplay};
pub use gauge::{FuelGauge, ProbeError, TelemetrySource};
pub use indicator::{charge_pattern, StatusIndicator, StatusLeds, LED_COUNT, SHUTDOWN_PATTERN};
pub use policy::{HoldPolicy, HoldWindow};
pub use transport::{SmbusTransport, TransportError};
