//! Smart Battery System (SBS) protocol support for the power-latch firmware.
//!
//! This crate provides everything needed to talk to a bq40z80-class smart
//! battery over SMBus, without any platform-specific dependencies:
//!
//! - **Registers**: SBS command codes and word scaling
//!   - [`registers`] - command constants ([`REG_VOLTAGE`], [`REG_CURRENT`], ...)
//!   - [`scale_voltage`], [`scale_current`], [`scale_relative_soc`]
//!
//! - **Types**: decoded telemetry
//!   - [`TelemetrySample`] - one voltage/current/state-of-charge snapshot
//!
//! - **Block access**: ManufacturerBlockAccess framing and decoding
//!   - [`mac::command_bytes`] - little-endian subcommand encoding
//!   - [`mac::strip_echo`] - remove and verify the echoed subcommand header
//!   - [`mac::pack_voltage_mv`] - pack voltage from a DAStatus1 payload
//!
//! - **PEC**: SMBus Packet Error Code (CRC-8/SMBUS)
//!   - [`pec`] - batch and incremental checksum over addressed transactions
//!
//! # Wire format
//!
//! SBS words are little-endian and read with the SMBus Read Word protocol.
//! ManufacturerBlockAccess (command 0x44) is a two-step transaction: a
//! block-write of the 2-byte subcommand, then a block-read whose payload
//! starts with the subcommand echoed back:
//!
//! ```text
//! block-write: [0x44] [len=2] [cmd_lo] [cmd_hi] [pec]
//! block-read:  [0x44] -> [len] [cmd_lo] [cmd_hi] <payload...> [pec]
//! ```
//!
//! For DAStatus1 (0x0071) the payload is 32 bytes; pack voltage sits at
//! payload bytes 10-11, LSB first, in millivolts.
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

pub mod mac;
pub mod pec;
pub mod registers;
pub mod types;

// Re-export the common items at the crate root for convenience
pub use pec::{pec, PecDigest};
pub use registers::{
    scale_current, scale_relative_soc, scale_voltage, GAUGE_ADDRESS, REG_CURRENT,
    REG_MANUFACTURER_BLOCK_ACCESS, REG_RELATIVE_SOC, REG_VOLTAGE,
};
pub use types::TelemetrySample;
