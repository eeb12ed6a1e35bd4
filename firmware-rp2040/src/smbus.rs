//! SMBus device shim over an async I2C bus.
//!
//! Implements the word and block protocols the fuel gauge speaks, with
//! Packet Error Code checking on reads and a PEC appended to writes.
//! Block reads clock the full maximum frame and trust the device's
//! length byte only after the PEC has verified it.

use bms_core::{SmbusTransport, TransportError};
use embedded_hal_async::i2c::{Error as I2cError, ErrorKind, I2c};
use sbs_proto::pec::{self, PecDigest};

/// Largest block payload the gauge returns (the ManufacturerBlockAccess
/// echo plus the DAStatus1 body).
const MAX_BLOCK_PAYLOAD: usize = sbs_proto::mac::MAC_RESPONSE_LEN;

/// Convert I2C errors to [`TransportError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan rule
/// issues (both error types are defined in external crates).
#[inline]
fn i2c_error_to_transport_error<E: I2cError>(e: E) -> TransportError {
    match e.kind() {
        ErrorKind::NoAcknowledge(_) => TransportError::Nack,
        _ => TransportError::Bus,
    }
}

/// One SMBus-addressed device on an I2C bus.
pub struct SmbusDevice<I> {
    bus: I,
    address: u8,
}

impl<I: I2c> SmbusDevice<I> {
    /// Bind a device address on the given bus.
    #[must_use]
    pub fn new(bus: I, address: u8) -> Self {
        Self { bus, address }
    }

    async fn read_word_checked(&mut self, command: u8) -> Result<u16, TransportError> {
        // lo, hi, pec
        let mut frame = [0u8; 3];
        self.bus
            .write_read(self.address, &[command], &mut frame)
            .await
            .map_err(i2c_error_to_transport_error)?;

        let word = [frame[0], frame[1]];
        if pec::read_word_pec(self.address, command, &word) != frame[2] {
            return Err(TransportError::Pec);
        }
        Ok(u16::from_le_bytes(word))
    }

    async fn block_write_checked(
        &mut self,
        command: u8,
        data: &[u8],
    ) -> Result<(), TransportError> {
        if data.len() > MAX_BLOCK_PAYLOAD {
            return Err(TransportError::BufferOverflow);
        }

        // cmd, len, payload, pec
        let mut frame = [0u8; 2 + MAX_BLOCK_PAYLOAD + 1];
        frame[0] = command;
        frame[1] = data.len() as u8;
        frame[2..2 + data.len()].copy_from_slice(data);

        let mut digest = PecDigest::new();
        digest.update(pec::addr_write(self.address));
        digest.update_slice(&frame[..2 + data.len()]);
        frame[2 + data.len()] = digest.finalize();

        self.bus
            .write(self.address, &frame[..2 + data.len() + 1])
            .await
            .map_err(i2c_error_to_transport_error)
    }

    async fn block_read_checked(
        &mut self,
        command: u8,
        out: &mut [u8],
    ) -> Result<usize, TransportError> {
        // len, payload (max), pec; bytes clocked past the device's
        // actual frame are junk and ignored
        let mut frame = [0u8; 1 + MAX_BLOCK_PAYLOAD + 1];
        self.bus
            .write_read(self.address, &[command], &mut frame)
            .await
            .map_err(i2c_error_to_transport_error)?;

        let len = frame[0] as usize;
        if len > MAX_BLOCK_PAYLOAD {
            return Err(TransportError::BufferOverflow);
        }

        let mut digest = PecDigest::new();
        digest.update(pec::addr_write(self.address));
        digest.update(command);
        digest.update(pec::addr_read(self.address));
        digest.update_slice(&frame[..1 + len]);
        if digest.finalize() != frame[1 + len] {
            return Err(TransportError::Pec);
        }

        if len > out.len() {
            return Err(TransportError::BufferOverflow);
        }
        out[..len].copy_from_slice(&frame[1..1 + len]);
        Ok(len)
    }
}

impl<I: I2c> SmbusTransport for SmbusDevice<I> {
    async fn read_word(&mut self, command: u8) -> Result<u16, TransportError> {
        self.read_word_checked(command).await
    }

    async fn block_write(&mut self, command: u8, data: &[u8]) -> Result<(), TransportError> {
        self.block_write_checked(command, data).await
    }

    async fn block_read(&mut self, command: u8, out: &mut [u8]) -> Result<usize, TransportError> {
        self.block_read_checked(command, out).await
    }
}
