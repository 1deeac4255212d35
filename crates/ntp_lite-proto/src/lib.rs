// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Wire format, epoch conversion and calendar math for a minimal SNTP client.
//!
//! This crate is `no_std` when built without the default `std` feature and
//! performs no allocation. It holds the pure parts of the client: building
//! the 48-byte request, reading the transmit timestamp out of a response,
//! bridging the 1900 and 1970 epochs, and splitting an epoch into calendar
//! fields.
//!
//! ```
//! use ntp_lite_proto::{calendar::DateTime, protocol, unix_time};
//!
//! let request = protocol::encode_request();
//! assert_eq!(request[0], 0xE3);
//!
//! let unix = unix_time::ntp_to_unix_seconds(3_908_988_800);
//! let dt = DateTime::from_unix(unix as u64);
//! assert_eq!((dt.year, dt.month, dt.day), (2023, 11, 14));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Error types for buffer-based packet parsing and serialization.
pub mod error;

/// NTP packet layout, header types and the request/response codec.
pub mod protocol;

/// Conversion between NTP (1900) and Unix (1970) epoch seconds.
pub mod unix_time;

/// Proleptic Gregorian calendar decomposition of Unix epoch seconds.
pub mod calendar;
