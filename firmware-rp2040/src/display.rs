//! SSD1306 status panel client.
//!
//! Drives a 128x32 panel in terminal mode with three fixed-width lines:
//! pack voltage, current, and state of charge. The panel is optional
//! hardware; if it fails to initialize the client goes inert and the
//! rest of the firmware carries on.

use core::fmt::Write;

use bms_core::StatusDisplay;
use defmt::{warn, Debug2Format};
use embassy_rp::i2c::{Blocking, I2c};
use heapless::String;
use sbs_proto::TelemetrySample;
use ssd1306::mode::TerminalMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

type Panel<'d> = Ssd1306<I2CInterface<I2c<'d, Blocking>>, DisplaySize128x32, TerminalMode>;

/// Status panel on the secondary I2C bus.
pub struct OledStatus<'d> {
    panel: Option<Panel<'d>>,
}

impl<'d> OledStatus<'d> {
    /// Bring up the panel. A panel that does not answer leaves an inert
    /// client; boot must not depend on the display being fitted.
    #[must_use]
    pub fn new(bus: I2c<'d, Blocking>) -> Self {
        let interface = I2CDisplayInterface::new(bus);
        let mut panel =
            Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
                .into_terminal_mode();

        match panel.init().and_then(|_| panel.clear()) {
            Ok(()) => Self { panel: Some(panel) },
            Err(e) => {
                warn!("status panel init failed: {}", Debug2Format(&e));
                Self { panel: None }
            }
        }
    }

    /// Whether a panel answered at bring-up.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.panel.is_some()
    }

    fn render(&mut self, sample: &TelemetrySample) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };

        // Fixed-width lines so shorter values overwrite longer ones
        let mut line: String<16> = String::new();
        let _ = write!(line, "BAT {:7.2} V", sample.voltage_v);
        let _ = panel.set_position(0, 0);
        let _ = panel.write_str(&line);

        line.clear();
        let _ = write!(line, "CUR {:6.0} mA", sample.current_ma);
        let _ = panel.set_position(0, 1);
        let _ = panel.write_str(&line);

        line.clear();
        let _ = write!(line, "SOC {:6.1} %", sample.soc_percent);
        let _ = panel.set_position(0, 2);
        let _ = panel.write_str(&line);
    }

    fn blank(&mut self) {
        if let Some(panel) = self.panel.as_mut() {
            if let Err(e) = panel.set_display_on(false) {
                warn!("status panel off failed: {}", Debug2Format(&e));
            }
        }
    }
}

impl StatusDisplay for OledStatus<'_> {
    async fn update_status(&mut self, sample: &TelemetrySample) {
        self.render(sample);
    }

    async fn display_off(&mut self) {
        self.blank();
    }
}
