//! Decoded telemetry types shared by the core logic and the firmware.

/// One decoded snapshot of the pack state.
///
/// Values are in engineering units: volts, milliamps, percent. A sample is
/// produced by scaling the raw SBS words with the helpers in
/// [`crate::registers`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetrySample {
    /// Pack terminal voltage in volts.
    pub voltage_v: f32,
    /// Instantaneous pack current in milliamps, negative when discharging.
    pub current_ma: f32,
    /// Relative state of charge in percent, 0.0 to 100.0.
    pub soc_percent: f32,
}

impl TelemetrySample {
    /// An all-zero sample, used before the first successful poll.
    pub const fn zeroed() -> Self {
        Self {
            voltage_v: 0.0,
            current_ma: 0.0,
            soc_percent: 0.0,
        }
    }

    /// Build a sample from the three raw SBS register words.
    pub fn from_raw(voltage: u16, current: u16, relative_soc: u16) -> Self {
        Self {
            voltage_v: crate::registers::scale_voltage(voltage),
            current_ma: crate::registers::scale_current(current),
            soc_percent: crate::registers::scale_relative_soc(relative_soc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_applies_register_scaling() {
        let sample = TelemetrySample::from_raw(16800, 0xFC18, 8750);
        assert_eq!(sample.voltage_v, 16.8);
        assert_eq!(sample.current_ma, -1000.0);
        assert_eq!(sample.soc_percent, 87.5);
    }

    #[test]
    fn zeroed_is_default() {
        assert_eq!(TelemetrySample::zeroed(), TelemetrySample::default());
    }
}
