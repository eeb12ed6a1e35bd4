//! PowerLatchController: the button-hold power-down state machine.
//!
//! On entry the controller probes the pack voltage once. A live pack or
//! charger (or a probe that cannot be trusted) means power stays on and
//! boot proceeds immediately. Otherwise it runs a fixed evaluation
//! window, polling telemetry and the button each tick, and at expiry
//! either returns control to the boot sequence or cuts system power for
//! good.

use crate::clock::MonotonicClock;
use crate::controls::{PowerButton, PowerLatch};
use crate::display::StatusDisplay;
use crate::gauge::TelemetrySource;
use crate::indicator::{StatusIndicator, StatusLeds};
use crate::policy::{HoldPolicy, HoldWindow};

/// Evaluation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LatchConfig {
    /// Evaluation window duration in microseconds.
    pub window_us: u64,
    /// Nominal spacing between button samples in microseconds.
    pub tick_interval_us: u64,
    /// Pack voltage above which boot proceeds without a button check.
    pub pack_voltage_threshold_v: f32,
    /// Button-hold accounting rule.
    pub policy: HoldPolicy,
}

impl Default for LatchConfig {
    fn default() -> Self {
        Self {
            window_us: 3_000_000,
            tick_interval_us: 100_000,
            pack_voltage_threshold_v: 3.5,
            policy: HoldPolicy::default(),
        }
    }
}

/// Outcome of one power-latch evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootDecision {
    /// A charger or live pack is attached (or the probe failed and we
    /// fail open). Boot proceeds without a button check.
    ExternallyPowered {
        /// Probed pack voltage, `None` when the probe failed.
        pack_voltage_v: Option<f32>,
    },
    /// The window elapsed with the button sufficiently held.
    ButtonConfirmed { held_ticks: u32, ticks: u32 },
    /// The hold was insufficient; system power has been cut.
    PowerShutdown { held_ticks: u32, ticks: u32 },
}

/// The power-latch state machine.
///
/// Owns every peripheral it touches for the duration of the evaluation:
/// the fuel gauge, the LED indicator, the display, the button, the
/// latch line, and the clock. State flow:
///
/// ```text
/// ProbingPackVoltage -> { EarlyExit, Sampling }
/// Sampling           -> { Continue, PoweringDown }
/// PoweringDown       -> Halted (never returns)
/// ```
///
/// [`evaluate`](Self::evaluate) runs the machine through its decision,
/// side effects included; [`run`](Self::run) additionally parks forever
/// on the powered-down path, matching the hardware reality that the
/// board is already dead.
pub struct PowerLatchController<G, L, D, B, P, C> {
    gauge: G,
    indicator: StatusIndicator<L>,
    display: D,
    button: B,
    latch: P,
    clock: C,
    config: LatchConfig,
}

impl<G, L, D, B, P, C> PowerLatchController<G, L, D, B, P, C>
where
    G: TelemetrySource,
    L: StatusLeds,
    D: StatusDisplay,
    B: PowerButton,
    P: PowerLatch,
    C: MonotonicClock,
{
    /// Build a controller around its peripherals.
    pub fn new(
        gauge: G,
        indicator: StatusIndicator<L>,
        display: D,
        button: B,
        latch: P,
        clock: C,
        config: LatchConfig,
    ) -> Self {
        Self {
            gauge,
            indicator,
            display,
            button,
            latch,
            clock,
            config,
        }
    }

    /// Run one full evaluation and return the decision.
    ///
    /// All side effects happen here, the latch release included; the
    /// caller decides what "never returns" means. Production code wants
    /// [`run`](Self::run).
    pub async fn evaluate(&mut self) -> BootDecision {
        match self.gauge.probe_pack_voltage().await {
            Ok(v) if v > self.config.pack_voltage_threshold_v => {
                return BootDecision::ExternallyPowered {
                    pack_voltage_v: Some(v),
                };
            }
            Ok(_) => {}
            Err(_) => {
                // Unreliable sensor must not brick the board
                return BootDecision::ExternallyPowered {
                    pack_voltage_v: None,
                };
            }
        }

        let mut window = HoldWindow::new(
            self.config.policy,
            self.config.window_us,
            self.clock.now_us(),
        );

        loop {
            let sample = self.gauge.sample().await;
            self.indicator.update(sample.soc_percent);
            self.display.update_status(&sample).await;

            self.clock.delay_us(self.config.tick_interval_us).await;

            let held = self.button.is_held();
            let now = self.clock.now_us();
            window.record(held, now);
            if window.is_expired(now) {
                break;
            }
        }

        let (held_ticks, ticks) = (window.held_ticks(), window.ticks());
        if window.sufficiently_held() {
            BootDecision::ButtonConfirmed { held_ticks, ticks }
        } else {
            self.power_down().await;
            BootDecision::PowerShutdown { held_ticks, ticks }
        }
    }

    /// Evaluate, and on the powered-down path never return.
    ///
    /// The boot sequence calls this once: a return value means boot
    /// continues.
    pub async fn run(&mut self) -> BootDecision {
        let decision = self.evaluate().await;
        if matches!(decision, BootDecision::PowerShutdown { .. }) {
            // Power is out; only a hardware power cycle ends this task
            loop {
                core::future::pending::<()>().await;
            }
        }
        decision
    }

    // Ordering contract: the latch release is the last observable
    // effect, after the display is dark and the shutdown pattern shows.
    async fn power_down(&mut self) {
        self.display.display_off().await;
        self.indicator.show_shutdown();
        self.latch.release();
    }

    /// Decompose into the peripherals, for reuse after a boot-continuing
    /// decision.
    pub fn into_parts(self) -> (G, StatusIndicator<L>, D, B, P, C) {
        (
            self.gauge,
            self.indicator,
            self.display,
            self.button,
            self.latch,
            self.clock,
        )
    }
}
