//! SBS command codes and raw-word scaling.
//!
//! The Smart Battery Data Specification names each SMBus command a
//! "function"; this module keeps the subset the firmware polls, plus the
//! scaling from raw register words to engineering units.

/// 7-bit SMBus address of the pack-side fuel gauge.
pub const GAUGE_ADDRESS: u8 = 0x0B;

/// Voltage() - pack terminal voltage in mV.
pub const REG_VOLTAGE: u8 = 0x09;

/// Current() - instantaneous current in mA, signed (negative = discharge).
pub const REG_CURRENT: u8 = 0x0A;

/// RelativeStateOfCharge() - predicted remaining capacity in percent,
/// scaled by 100 on the wire.
pub const REG_RELATIVE_SOC: u8 = 0x0D;

/// ManufacturerBlockAccess() - vendor subcommand tunnel (block protocol).
pub const REG_MANUFACTURER_BLOCK_ACCESS: u8 = 0x44;

/// Scale a raw Voltage() word to volts.
///
/// The gauge reports millivolts; 12000 reads as 12.0 V.
pub fn scale_voltage(raw: u16) -> f32 {
    raw as f32 / 1000.0
}

/// Scale a raw Current() word to milliamps.
///
/// The word is a two's-complement signed quantity. Discharge is negative,
/// charge positive. No divisor applies.
pub fn scale_current(raw: u16) -> f32 {
    raw as i16 as f32
}

/// Scale a raw RelativeStateOfCharge() word to percent.
///
/// The gauge reports hundredths of a percent; 5000 reads as 50.0 %.
pub fn scale_relative_soc(raw: u16) -> f32 {
    raw as f32 / 100.0
}
