// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Errors from reading and writing packet bytes.
//!
//! [`ParseError`] carries only sizes and static names, so it works without
//! `std` or an allocator. With `std` it is a [`std::error::Error`] and
//! converts into [`std::io::Error`].

use core::fmt;

/// A packet or field could not be read or written.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A field needs more bytes than the buffer holds.
    BufferTooShort {
        /// Bytes the field needs.
        needed: usize,
        /// Bytes the buffer holds.
        available: usize,
    },
    /// A datagram is not exactly one NTP packet long.
    InvalidLength {
        /// Packet size.
        expected: usize,
        /// Datagram size.
        received: usize,
    },
    /// A header field holds a value with no meaning.
    InvalidField {
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: u32,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BufferTooShort { needed, available } => {
                write!(f, "need {needed} bytes but only {available} available")
            }
            ParseError::InvalidLength { expected, received } => {
                write!(f, "expected a {expected}-byte packet, got {received} bytes")
            }
            ParseError::InvalidField { field, value } => write!(f, "invalid {field} {value}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(feature = "std")]
impl From<ParseError> for std::io::Error {
    fn from(err: ParseError) -> std::io::Error {
        let kind = if matches!(err, ParseError::BufferTooShort { .. }) {
            std::io::ErrorKind::UnexpectedEof
        } else {
            std::io::ErrorKind::InvalidData
        };
        std::io::Error::new(kind, err)
    }
}
