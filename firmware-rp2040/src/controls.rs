//! GPIO implementations of the button, LED, and latch traits.

use bms_core::{PowerButton, PowerLatch, StatusLeds, LED_COUNT};
use embassy_rp::gpio::{Input, Output};

/// The power button input. The line is active-low with the internal
/// pull-up enabled, so a pressed button reads low.
pub struct GpioButton<'d> {
    pin: Input<'d>,
}

impl<'d> GpioButton<'d> {
    #[must_use]
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl PowerButton for GpioButton<'_> {
    fn is_held(&mut self) -> bool {
        self.pin.is_low()
    }
}

/// The five charge-tier LED lines, first to fifth.
pub struct GpioStatusLeds<'d> {
    lines: [Output<'d>; LED_COUNT],
}

impl<'d> GpioStatusLeds<'d> {
    #[must_use]
    pub fn new(lines: [Output<'d>; LED_COUNT]) -> Self {
        Self { lines }
    }
}

impl StatusLeds for GpioStatusLeds<'_> {
    fn set(&mut self, lit: [bool; LED_COUNT]) {
        for (line, on) in self.lines.iter_mut().zip(lit) {
            if on {
                line.set_high();
            } else {
                line.set_low();
            }
        }
    }
}

/// The power-latch enable line.
///
/// Construct the output already asserted (`Level::High`); this type only
/// ever drives it low, and the pin must stay configured for as long as
/// the board is meant to stay up.
pub struct GpioPowerLatch<'d> {
    line: Output<'d>,
}

impl<'d> GpioPowerLatch<'d> {
    #[must_use]
    pub fn new(line: Output<'d>) -> Self {
        Self { line }
    }
}

impl PowerLatch for GpioPowerLatch<'_> {
    fn release(&mut self) {
        self.line.set_low();
    }
}
