//! Types and constants for the slice of the NTP packet this client touches.
//!
//! A request is 48 bytes with only the first byte (leap indicator, version and
//! mode) set. From a response only the seconds of the transmit timestamp, at
//! bytes 40 to 43, are read. Everything else on the wire is zero on send and
//! ignored on receive.
//!
//! Documentation is largely derived from IETF RFC 5905 and RFC 4330.

/// NTP server port number.
pub const PORT: u16 = 123;

/// Size of an NTP packet header without extension fields or MAC.
pub const PACKET_SIZE: usize = 48;

/// Byte offset of the transmit timestamp within the packet.
pub const TRANSMIT_TIMESTAMP_OFFSET: usize = 40;

/// First byte of every client request: LI = 3 (unsynchronized), VN = 4, Mode = 3 (client).
pub const CLIENT_REQUEST_MARKER: u8 = 0b1110_0011;

mod bytes;
mod codec;
mod traits;
mod types;

pub use self::codec::*;
pub use self::traits::*;
pub use self::types::*;
