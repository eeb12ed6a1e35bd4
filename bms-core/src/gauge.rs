//! Fuel gauge client: telemetry polling and the pack-voltage probe.

use core::future::Future;

use sbs_proto::mac::{self, MacError};
use sbs_proto::{registers, TelemetrySample};

use crate::transport::{SmbusTransport, TransportError};

/// Error type for the pack-voltage probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProbeError {
    /// The underlying SMBus transaction failed.
    Transport(TransportError),
    /// The response arrived but could not be decoded.
    Malformed,
}

impl From<TransportError> for ProbeError {
    fn from(err: TransportError) -> Self {
        ProbeError::Transport(err)
    }
}

impl From<MacError> for ProbeError {
    fn from(_: MacError) -> Self {
        ProbeError::Malformed
    }
}

/// Async trait for the controller's view of the battery.
///
/// [`FuelGauge`] is the real implementation; tests substitute mocks.
pub trait TelemetrySource {
    /// Poll voltage, current, and state of charge.
    ///
    /// Always yields a sample. Fields whose register read failed keep
    /// their previous value.
    fn sample(&mut self) -> impl Future<Output = TelemetrySample>;

    /// One-shot pack-voltage probe in volts.
    fn probe_pack_voltage(&mut self) -> impl Future<Output = Result<f32, ProbeError>>;
}

/// Smart-battery fuel gauge client.
///
/// Generic over the SMBus transport; the transport is already bound to
/// the gauge's bus and address when the client is constructed. Telemetry
/// reads follow stale-read semantics: a failed word read leaves that
/// field at its previous value, with no retry.
pub struct FuelGauge<B> {
    bus: B,
    last: TelemetrySample,
}

impl<B: SmbusTransport> FuelGauge<B> {
    /// Create a client over an opened transport.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            last: TelemetrySample::zeroed(),
        }
    }

    /// The most recent sample without touching the bus.
    pub fn last_sample(&self) -> TelemetrySample {
        self.last
    }

    /// Release the transport.
    pub fn into_bus(self) -> B {
        self.bus
    }

    async fn read_telemetry(&mut self) -> TelemetrySample {
        if let Ok(raw) = self.bus.read_word(registers::REG_VOLTAGE).await {
            self.last.voltage_v = registers::scale_voltage(raw);
        }
        if let Ok(raw) = self.bus.read_word(registers::REG_CURRENT).await {
            self.last.current_ma = registers::scale_current(raw);
        }
        if let Ok(raw) = self.bus.read_word(registers::REG_RELATIVE_SOC).await {
            self.last.soc_percent = registers::scale_relative_soc(raw);
        }
        self.last
    }

    async fn read_pack_voltage(&mut self) -> Result<f32, ProbeError> {
        let command = mac::command_bytes(mac::MAC_DASTATUS1);
        self.bus
            .block_write(registers::REG_MANUFACTURER_BLOCK_ACCESS, &command)
            .await?;

        let mut response = [0u8; mac::MAC_RESPONSE_LEN];
        let len = self
            .bus
            .block_read(registers::REG_MANUFACTURER_BLOCK_ACCESS, &mut response)
            .await?;

        let body = mac::strip_echo(mac::MAC_DASTATUS1, &response[..len])?;
        let mv = mac::pack_voltage_mv(body)?;
        Ok(registers::scale_voltage(mv))
    }
}

impl<B: SmbusTransport> TelemetrySource for FuelGauge<B> {
    fn sample(&mut self) -> impl Future<Output = TelemetrySample> {
        self.read_telemetry()
    }

    fn probe_pack_voltage(&mut self) -> impl Future<Output = Result<f32, ProbeError>> {
        self.read_pack_voltage()
    }
}
