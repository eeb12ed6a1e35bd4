#![no_std]
#![no_main]

use bms_rp2040::{
    BootDecision, EmbassyClock, FuelGauge, GpioButton, GpioPowerLatch, GpioStatusLeds,
    LatchConfig, OledStatus, PowerLatchController, SmbusDevice, StatusDisplay, StatusIndicator,
    TelemetrySample, TelemetrySource,
};
use defmt::{info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Async, Config as I2cConfig, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use sbs_proto::GAUGE_ADDRESS;
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => embassy_rp::i2c::InterruptHandler<I2C0>;
});

/// Post-boot pack poll period.
const POLL_INTERVAL_MS: u64 = 250;

/// Settle time between peripheral bring-up and the first gauge
/// transaction.
const STARTUP_SETTLE_US: u64 = 10_000;

type TelemetrySignal = Signal<CriticalSectionRawMutex, TelemetrySample>;

/// Signal for passing samples from the gauge poll task to the status loop.
/// Using Signal instead of Channel provides "latest value wins" semantics,
/// which is appropriate for telemetry where only the most recent sample matters.
static TELEMETRY_SIGNAL: StaticCell<TelemetrySignal> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("power-latch firmware starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Fuel gauge SMBus (I2C0, async) ---
    let mut gauge_config = I2cConfig::default();
    gauge_config.frequency = 100_000;
    let gauge_i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, gauge_config);
    let gauge = FuelGauge::new(SmbusDevice::new(gauge_i2c, GAUGE_ADDRESS));

    // --- Status panel (I2C1, blocking) ---
    let mut panel_config = I2cConfig::default();
    panel_config.frequency = 100_000;
    let panel_i2c = I2c::new_blocking(p.I2C1, p.PIN_3, p.PIN_2, panel_config);

    // --- GPIO ---
    let button = GpioButton::new(Input::new(p.PIN_6, Pull::Up));
    let leds = GpioStatusLeds::new([
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_14, Level::Low),
    ]);
    // PWR_EN comes up asserted; the controller is the only thing that
    // may ever drop it
    let latch = GpioPowerLatch::new(Output::new(p.PIN_15, Level::High));

    // The gauge needs a moment after pack insertion before its first
    // transaction
    Timer::after_micros(STARTUP_SETTLE_US).await;

    let display = OledStatus::new(panel_i2c);
    if !display.is_present() {
        warn!("no status panel fitted, continuing without one");
    }

    let mut controller = PowerLatchController::new(
        gauge,
        StatusIndicator::new(leds),
        display,
        button,
        latch,
        EmbassyClock,
        LatchConfig::default(),
    );

    // Never returns on the powered-down path
    let decision = controller.run().await;
    match decision {
        BootDecision::ExternallyPowered {
            pack_voltage_v: Some(v),
        } => info!("pack voltage {} V, boot continues", v),
        BootDecision::ExternallyPowered {
            pack_voltage_v: None,
        } => warn!("pack voltage probe failed, boot continues"),
        BootDecision::ButtonConfirmed { held_ticks, ticks } => {
            info!("button hold confirmed ({}/{} ticks)", held_ticks, ticks);
        }
        BootDecision::PowerShutdown { .. } => defmt::unreachable!(),
    }

    let (gauge, mut indicator, mut display, button, latch, _clock) = controller.into_parts();

    let signal = TELEMETRY_SIGNAL.init(Signal::new());
    spawner.spawn(gauge_task(gauge, signal)).unwrap();

    info!("monitoring pack...");

    // PWR_EN stays asserted only while its Output stays configured;
    // both pins park here for the life of the firmware
    let _latch = latch;
    let _button = button;

    loop {
        let sample = signal.wait().await;
        indicator.update(sample.soc_percent);
        display.update_status(&sample).await;
    }
}

/// Gauge poll task - samples the pack and signals the latest telemetry.
#[embassy_executor::task]
async fn gauge_task(
    mut gauge: FuelGauge<SmbusDevice<I2c<'static, Async>>>,
    signal: &'static TelemetrySignal,
) {
    loop {
        let sample = gauge.sample().await;
        signal.signal(sample);
        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}
