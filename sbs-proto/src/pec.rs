//! SMBus Packet Error Code (PEC).
//!
//! The PEC is a CRC-8/SMBUS checksum appended to SMBus transactions. It
//! covers every byte on the wire including the addressed slave bytes, so
//! verifying a read means hashing `[addr+W, cmd, addr+R, data...]` and
//! comparing against the trailing byte.

use crc::{Crc, CRC_8_SMBUS};

/// CRC-8/SMBUS calculator with 256-byte lookup table.
const PEC8: Crc<u8> = Crc::<u8>::new(&CRC_8_SMBUS);

/// The addressed byte for a write phase (address shifted, R/W bit clear).
#[inline]
#[must_use]
pub const fn addr_write(address: u8) -> u8 {
    address << 1
}

/// The addressed byte for a read phase (address shifted, R/W bit set).
#[inline]
#[must_use]
pub const fn addr_read(address: u8) -> u8 {
    (address << 1) | 1
}

/// Calculate the PEC of a byte slice.
#[inline]
#[must_use]
pub fn pec(data: &[u8]) -> u8 {
    PEC8.checksum(data)
}

/// PEC digest for incremental calculation.
///
/// Use this when hashing a transaction phase-by-phase (address bytes,
/// command, then payload) without assembling it in one buffer.
pub struct PecDigest {
    digest: crc::Digest<'static, u8>,
}

impl PecDigest {
    /// Create a new PEC digest.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            digest: PEC8.digest(),
        }
    }

    /// Update the digest with a single byte.
    #[inline]
    pub fn update(&mut self, byte: u8) {
        self.digest.update(&[byte]);
    }

    /// Update the digest with a byte slice.
    #[inline]
    pub fn update_slice(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    /// Finalize and return the checksum value.
    #[inline]
    #[must_use]
    pub fn finalize(self) -> u8 {
        self.digest.finalize()
    }
}

impl Default for PecDigest {
    fn default() -> Self {
        Self::new()
    }
}

/// PEC over an SMBus Read Word transaction.
///
/// Covers `[addr+W, cmd, addr+R, lo, hi]` as seen on the wire.
#[must_use]
pub fn read_word_pec(address: u8, command: u8, word: &[u8; 2]) -> u8 {
    let mut digest = PecDigest::new();
    digest.update(addr_write(address));
    digest.update(command);
    digest.update(addr_read(address));
    digest.update_slice(word);
    digest.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pec_empty() {
        assert_eq!(pec(&[]), 0x00);
    }

    #[test]
    fn test_pec_check_value() {
        // CRC-8/SMBUS check value from the catalogue of parametrised CRCs
        assert_eq!(pec(b"123456789"), 0xF4);
    }

    #[test]
    fn test_pec_digest_matches_batch() {
        let data = [0x16, 0x09, 0x17, 0xE0, 0x2E];
        let batch = pec(&data);

        let mut digest = PecDigest::new();
        for &b in &data {
            digest.update(b);
        }
        let incremental = digest.finalize();

        assert_eq!(batch, incremental);
    }

    #[test]
    fn test_pec_digest_slice() {
        let data = [0x16, 0x44, 0x02, 0x71, 0x00];
        let batch = pec(&data);

        let mut digest = PecDigest::new();
        digest.update_slice(&data);
        let slice = digest.finalize();

        assert_eq!(batch, slice);
    }

    #[test]
    fn test_addressed_bytes() {
        assert_eq!(addr_write(0x0B), 0x16);
        assert_eq!(addr_read(0x0B), 0x17);
    }

    #[test]
    fn test_read_word_pec_matches_flat_buffer() {
        let word = [0xE0, 0x2E];
        let flat = [0x16, 0x09, 0x17, 0xE0, 0x2E];
        assert_eq!(read_word_pec(0x0B, 0x09, &word), pec(&flat));
    }
}
