use crate::error::ParseError;

/// Fixed on-wire width of a packet field.
pub trait ConstPackedSizeBytes {
    /// Bytes the field occupies.
    const PACKED_SIZE_BYTES: usize;
}

/// Decode a fixed-width field from the front of a buffer.
///
/// Bytes past [`PACKED_SIZE_BYTES`](ConstPackedSizeBytes::PACKED_SIZE_BYTES)
/// are ignored, so callers can pass the tail of a packet.
pub trait FromBytes: ConstPackedSizeBytes + Sized {
    /// Read `Self` from `buf`, or [`ParseError::BufferTooShort`].
    fn from_bytes(buf: &[u8]) -> Result<Self, ParseError>;
}

/// Encode a fixed-width field into the front of a buffer.
pub trait ToBytes: ConstPackedSizeBytes {
    /// Write `self` into `buf`, or [`ParseError::BufferTooShort`].
    fn to_bytes(&self, buf: &mut [u8]) -> Result<(), ParseError>;
}

/// `Ok` when `available` bytes are enough to hold a `T`.
pub(crate) fn ensure_fits<T: ConstPackedSizeBytes>(available: usize) -> Result<(), ParseError> {
    if available < T::PACKED_SIZE_BYTES {
        return Err(ParseError::BufferTooShort {
            needed: T::PACKED_SIZE_BYTES,
            available,
        });
    }
    Ok(())
}
