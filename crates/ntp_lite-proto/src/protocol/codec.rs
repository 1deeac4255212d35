//! Request construction and response decoding.
//!
//! The codec is stateless. It does not check where a response came from or
//! look at stratum, leap indicator or mode; callers decide whether a datagram
//! is worth decoding.

use byteorder::{BigEndian, ByteOrder};

use crate::error::ParseError;

use super::{FromBytes, Header, PACKET_SIZE, TRANSMIT_TIMESTAMP_OFFSET, TimestampFormat};

/// Build the 48-byte client request.
///
/// Every byte is zero except the first, which carries [`Header::CLIENT_REQUEST`]
/// (`0xE3` on the wire).
pub fn encode_request() -> [u8; PACKET_SIZE] {
    let mut buf = [0u8; PACKET_SIZE];
    buf[0] = Header::CLIENT_REQUEST.to_byte();
    buf
}

/// Read the transmit timestamp seconds (bytes 40..44, big-endian) from a response.
///
/// The fixed-size argument guarantees the length; origin and content are the
/// caller's concern.
pub fn decode_transmit_timestamp(buf: &[u8; PACKET_SIZE]) -> u32 {
    BigEndian::read_u32(&buf[TRANSMIT_TIMESTAMP_OFFSET..TRANSMIT_TIMESTAMP_OFFSET + 4])
}

/// Checked variant of [`decode_transmit_timestamp`] for a received datagram.
///
/// Returns the full transmit timestamp (seconds and fraction). Fails with
/// [`ParseError::InvalidLength`] unless `datagram` is exactly [`PACKET_SIZE`]
/// bytes; extension fields and MACs are not expected by this client.
pub fn transmit_timestamp(datagram: &[u8]) -> Result<TimestampFormat, ParseError> {
    if datagram.len() != PACKET_SIZE {
        return Err(ParseError::InvalidLength {
            expected: PACKET_SIZE,
            received: datagram.len(),
        });
    }
    TimestampFormat::from_bytes(&datagram[TRANSMIT_TIMESTAMP_OFFSET..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::CLIENT_REQUEST_MARKER;

    #[test]
    fn request_is_marker_then_zeros() {
        let buf = encode_request();
        assert_eq!(buf.len(), 48);
        assert_eq!(buf[0], CLIENT_REQUEST_MARKER);
        assert_eq!(buf[0], 0xE3);
        assert!(buf[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn decode_reads_bytes_40_to_43() {
        let mut buf = [0u8; PACKET_SIZE];
        buf[40..44].copy_from_slice(&[0xE9, 0x0C, 0xA4, 0x80]);
        // Fraction and the rest of the packet must not leak into the result.
        buf[44..48].copy_from_slice(&[0xFF; 4]);
        buf[0] = 0x24;
        buf[39] = 0xAA;
        assert_eq!(decode_transmit_timestamp(&buf), 0xE90C_A480);
    }

    #[test]
    fn checked_decode_rejects_wrong_sizes() {
        assert_eq!(
            transmit_timestamp(&[0u8; 47]),
            Err(ParseError::InvalidLength {
                expected: 48,
                received: 47
            })
        );
        assert_eq!(
            transmit_timestamp(&[0u8; 68]),
            Err(ParseError::InvalidLength {
                expected: 48,
                received: 68
            })
        );
    }

    #[test]
    fn checked_decode_matches_fixed_decode() {
        let mut buf = [0u8; PACKET_SIZE];
        buf[40..48].copy_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x80, 0x00, 0x00, 0x00]);
        let ts = transmit_timestamp(&buf).unwrap();
        assert_eq!(ts.seconds, decode_transmit_timestamp(&buf));
        assert_eq!(ts.seconds, 1);
        assert_eq!(ts.fraction, 0x8000_0000);
    }
}
