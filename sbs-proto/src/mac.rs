//! ManufacturerBlockAccess (MAC) subcommand framing.
//!
//! bq40z80-class gauges tunnel vendor subcommands through the SBS
//! ManufacturerBlockAccess register (0x44). The host block-writes the
//! 2-byte subcommand, then block-reads the response; the response payload
//! begins with the subcommand echoed back, little-endian.
//!
//! The one subcommand the firmware uses is DAStatus1, whose 32-byte body
//! carries per-cell voltages and the pack voltage.

/// DAStatus1 subcommand code.
pub const MAC_DASTATUS1: u16 = 0x0071;

/// Length of the subcommand echo at the front of every MAC response.
pub const MAC_COMMAND_LEN: usize = 2;

/// Length of the DAStatus1 body, after the echo has been stripped.
pub const DASTATUS1_LEN: usize = 32;

/// Length of a full DAStatus1 block read, echo included.
pub const MAC_RESPONSE_LEN: usize = MAC_COMMAND_LEN + DASTATUS1_LEN;

/// Byte offset of the pack voltage word within the DAStatus1 body.
///
/// The body is sixteen little-endian u16 fields; cell voltages 1-4 occupy
/// offsets 0-7, then two reserved words, then PackVoltage at 10.
pub const PACK_VOLTAGE_OFFSET: usize = 10;

/// Error type for MAC response decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacError {
    /// The response is shorter than the echo plus the expected body.
    ResponseTooShort,
    /// The echoed subcommand does not match the one that was written.
    CommandMismatch,
}

impl core::fmt::Display for MacError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ResponseTooShort => write!(f, "response too short"),
            Self::CommandMismatch => write!(f, "subcommand echo mismatch"),
        }
    }
}

/// Encode a subcommand for the block write, little-endian.
#[inline]
#[must_use]
pub const fn command_bytes(command: u16) -> [u8; MAC_COMMAND_LEN] {
    command.to_le_bytes()
}

/// Strip and verify the subcommand echo from a MAC block-read payload.
///
/// Returns the body that follows the echo.
///
/// # Errors
///
/// Returns [`MacError::ResponseTooShort`] if the payload cannot hold the
/// echo, or [`MacError::CommandMismatch`] if the echoed subcommand differs
/// from `command`.
pub fn strip_echo(command: u16, response: &[u8]) -> Result<&[u8], MacError> {
    if response.len() < MAC_COMMAND_LEN {
        return Err(MacError::ResponseTooShort);
    }
    let echo = u16::from_le_bytes([response[0], response[1]]);
    if echo != command {
        return Err(MacError::CommandMismatch);
    }
    Ok(&response[MAC_COMMAND_LEN..])
}

/// Extract the pack voltage in millivolts from a DAStatus1 body.
///
/// `body` is the payload returned by [`strip_echo`] for
/// [`MAC_DASTATUS1`].
///
/// # Errors
///
/// Returns [`MacError::ResponseTooShort`] if the body is shorter than the
/// 32 bytes DAStatus1 defines.
pub fn pack_voltage_mv(body: &[u8]) -> Result<u16, MacError> {
    if body.len() < DASTATUS1_LEN {
        return Err(MacError::ResponseTooShort);
    }
    Ok(u16::from_le_bytes([
        body[PACK_VOLTAGE_OFFSET],
        body[PACK_VOLTAGE_OFFSET + 1],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dastatus1_response(pack_mv: u16) -> [u8; MAC_RESPONSE_LEN] {
        let mut resp = [0u8; MAC_RESPONSE_LEN];
        resp[..MAC_COMMAND_LEN].copy_from_slice(&command_bytes(MAC_DASTATUS1));
        let mv = pack_mv.to_le_bytes();
        resp[MAC_COMMAND_LEN + PACK_VOLTAGE_OFFSET] = mv[0];
        resp[MAC_COMMAND_LEN + PACK_VOLTAGE_OFFSET + 1] = mv[1];
        resp
    }

    #[test]
    fn test_command_bytes_little_endian() {
        assert_eq!(command_bytes(MAC_DASTATUS1), [0x71, 0x00]);
        assert_eq!(command_bytes(0x0E34), [0x34, 0x0E]);
    }

    #[test]
    fn test_strip_echo_returns_body() {
        let resp = dastatus1_response(3636);
        let body = strip_echo(MAC_DASTATUS1, &resp).unwrap();
        assert_eq!(body.len(), DASTATUS1_LEN);
        assert_eq!(body[PACK_VOLTAGE_OFFSET], 0x34);
        assert_eq!(body[PACK_VOLTAGE_OFFSET + 1], 0x0E);
    }

    #[test]
    fn test_strip_echo_rejects_wrong_command() {
        let mut resp = dastatus1_response(3636);
        resp[0] = 0x72;
        assert_eq!(
            strip_echo(MAC_DASTATUS1, &resp),
            Err(MacError::CommandMismatch)
        );
    }

    #[test]
    fn test_strip_echo_rejects_short_response() {
        assert_eq!(
            strip_echo(MAC_DASTATUS1, &[0x71]),
            Err(MacError::ResponseTooShort)
        );
        assert_eq!(strip_echo(MAC_DASTATUS1, &[]), Err(MacError::ResponseTooShort));
    }

    #[test]
    fn test_pack_voltage_decodes_lsb_first() {
        let resp = dastatus1_response(3636);
        let body = strip_echo(MAC_DASTATUS1, &resp).unwrap();
        assert_eq!(pack_voltage_mv(body), Ok(3636));
    }

    #[test]
    fn test_pack_voltage_rejects_truncated_body() {
        let body = [0u8; PACK_VOLTAGE_OFFSET + 1];
        assert_eq!(pack_voltage_mv(&body), Err(MacError::ResponseTooShort));
    }

    #[test]
    fn test_full_decode_path() {
        // 0x0E34 = 3636 mV, just above a 3.5 V floor
        let resp = dastatus1_response(0x0E34);
        let body = strip_echo(MAC_DASTATUS1, &resp).unwrap();
        let mv = pack_voltage_mv(body).unwrap();
        assert_eq!(mv, 3636);
        assert!(crate::registers::scale_voltage(mv) > 3.5);
    }
}
