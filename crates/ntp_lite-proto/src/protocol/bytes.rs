use byteorder::{BigEndian, ByteOrder};

use crate::error::ParseError;

use super::traits::ensure_fits;
use super::{FromBytes, Header, TimestampFormat, ToBytes};

impl FromBytes for TimestampFormat {
    fn from_bytes(buf: &[u8]) -> Result<Self, ParseError> {
        ensure_fits::<Self>(buf.len())?;
        Ok(TimestampFormat {
            seconds: BigEndian::read_u32(&buf[..4]),
            fraction: BigEndian::read_u32(&buf[4..8]),
        })
    }
}

impl ToBytes for TimestampFormat {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<(), ParseError> {
        ensure_fits::<Self>(buf.len())?;
        BigEndian::write_u32(&mut buf[..4], self.seconds);
        BigEndian::write_u32(&mut buf[4..8], self.fraction);
        Ok(())
    }
}

impl FromBytes for Header {
    fn from_bytes(buf: &[u8]) -> Result<Self, ParseError> {
        ensure_fits::<Self>(buf.len())?;
        Header::from_byte(buf[0])
    }
}

impl ToBytes for Header {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<(), ParseError> {
        ensure_fits::<Self>(buf.len())?;
        buf[0] = self.to_byte();
        Ok(())
    }
}
