use super::ConstPackedSizeBytes;
use crate::error::ParseError;

/// 64-bit NTP timestamp: seconds since 1900-01-01 00:00:00 UTC plus a binary
/// fraction of a second (units of 2^-32 s).
///
/// The client only acts on `seconds`; `fraction` is decoded so a timestamp
/// read off the wire is complete.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimestampFormat {
    /// Whole seconds in the current NTP era.
    pub seconds: u32,
    /// Fraction of a second.
    pub fraction: u32,
}

/// Leap second warning carried in the top two bits of the header byte.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum LeapIndicator {
    /// No leap second pending.
    #[default]
    NoWarning = 0,
    /// The last minute of the month has 61 seconds.
    AddOne = 1,
    /// The last minute of the month has 59 seconds.
    SubOne = 2,
    /// Sender's clock is not synchronized. A client that has never been set sends this.
    Unknown = 3,
}

impl LeapIndicator {
    /// Decode the low two bits of `bits`. Every pattern is a valid indicator.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => LeapIndicator::NoWarning,
            1 => LeapIndicator::AddOne,
            2 => LeapIndicator::SubOne,
            _ => LeapIndicator::Unknown,
        }
    }
}

/// Protocol version, three bits wide on the wire. Zero is not a version.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Version(u8);

impl Version {
    /// NTPv3.
    pub const V3: Self = Version(3);
    /// NTPv4 / SNTPv4, what this client speaks.
    pub const V4: Self = Version(4);

    /// `None` unless `v` is in `1..=7`.
    pub const fn new(v: u8) -> Option<Self> {
        if matches!(v, 1..=7) { Some(Version(v)) } else { None }
    }

    /// The version number.
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Association mode, the low three bits of the header byte.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    /// 0, reserved.
    Reserved = 0,
    /// 1, symmetric active.
    SymmetricActive = 1,
    /// 2, symmetric passive.
    SymmetricPassive = 2,
    /// 3, client request.
    #[default]
    Client = 3,
    /// 4, server response.
    Server = 4,
    /// 5, broadcast.
    Broadcast = 5,
    /// 6, control message.
    Control = 6,
    /// 7, private use.
    Private = 7,
}

impl Mode {
    /// Decode the low three bits of `bits`. Every pattern is a valid mode.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Mode::Reserved,
            1 => Mode::SymmetricActive,
            2 => Mode::SymmetricPassive,
            3 => Mode::Client,
            4 => Mode::Server,
            5 => Mode::Broadcast,
            6 => Mode::Control,
            _ => Mode::Private,
        }
    }
}

/// The first byte of every NTP packet, packed as `LI(2) VN(3) Mode(3)`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Header {
    /// Leap second warning.
    pub leap: LeapIndicator,
    /// Protocol version.
    pub version: Version,
    /// Association mode.
    pub mode: Mode,
}

impl Header {
    /// What an SNTPv4 client that has never been synchronized sends: `0xE3`.
    pub const CLIENT_REQUEST: Header = Header {
        leap: LeapIndicator::Unknown,
        version: Version::V4,
        mode: Mode::Client,
    };

    /// Pack into a single byte.
    pub const fn to_byte(self) -> u8 {
        (self.leap as u8) << 6 | (self.version.0 & 0b111) << 3 | self.mode as u8
    }

    /// Unpack a header byte. Fails only for version 0.
    pub fn from_byte(byte: u8) -> Result<Self, ParseError> {
        let vn = (byte >> 3) & 0b111;
        let version = Version::new(vn).ok_or(ParseError::InvalidField {
            field: "version",
            value: u32::from(vn),
        })?;
        Ok(Header {
            leap: LeapIndicator::from_bits(byte >> 6),
            version,
            mode: Mode::from_bits(byte),
        })
    }
}

impl ConstPackedSizeBytes for TimestampFormat {
    const PACKED_SIZE_BYTES: usize = 8;
}

impl ConstPackedSizeBytes for Header {
    const PACKED_SIZE_BYTES: usize = 1;
}
