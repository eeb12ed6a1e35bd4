//! SMBus transport trait and error types.

use core::future::Future;

/// Error type for SMBus transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Bus-level I/O error (arbitration loss, timeout, ...).
    Bus,
    /// The device did not acknowledge its address or a data byte.
    Nack,
    /// Packet Error Code mismatch on a read.
    Pec,
    /// The device returned more payload than the caller's buffer holds.
    BufferOverflow,
}

/// Async trait for an SMBus-addressed device.
///
/// Implementations are bound to one bus and one device address; the
/// control logic above never sees either. Any `Err` means "transaction
/// failed"; the core does not interpret specific codes.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait SmbusTransport {
    /// SMBus Read Word: read a little-endian 16-bit register.
    fn read_word(&mut self, command: u8) -> impl Future<Output = Result<u16, TransportError>>;

    /// SMBus Block Write: write `data` under `command` with a length prefix.
    fn block_write(
        &mut self,
        command: u8,
        data: &[u8],
    ) -> impl Future<Output = Result<(), TransportError>>;

    /// SMBus Block Read: read a length-prefixed block into `out`.
    ///
    /// Returns the number of payload bytes written to `out`.
    fn block_read(
        &mut self,
        command: u8,
        out: &mut [u8],
    ) -> impl Future<Output = Result<usize, TransportError>>;
}
