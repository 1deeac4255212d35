// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Custom error types for the client.
//!
//! Fallible public APIs return `io::Result<T>`. Internally, errors are
//! constructed as `NtpError` variants and converted to `io::Error` via
//! `From<NtpError> for io::Error`, so callers who need to match on them can
//! downcast:
//!
//! ```
//! use std::net::Ipv4Addr;
//! use ntp_lite::error::{ConfigError, NtpError};
//! use ntp_lite::{ClientConfig, NtpClient};
//!
//! let mut client = NtpClient::with_udp(ClientConfig::default());
//! let err = client.set_pool_server_ip(Ipv4Addr::new(192, 0, 2, 1).into()).unwrap_err();
//! let inner = err.get_ref().and_then(|e| e.downcast_ref::<NtpError>());
//! assert!(matches!(inner, Some(NtpError::Config(ConfigError::AddressModeFixed { .. }))));
//! ```
//!
//! [`NtpClient::tick`](crate::NtpClient::tick) and
//! [`NtpClient::force_update`](crate::NtpClient::force_update) never surface
//! these; a failed cycle is logged and reported as `false`.

pub use ntp_lite_proto::error::ParseError;

use std::fmt;
use std::io;

/// Errors that can occur during client operations.
#[derive(Debug)]
pub enum NtpError {
    /// The transport could not bind the local port.
    Bind(io::Error),
    /// The server hostname could not be resolved.
    Resolve(ResolveError),
    /// No valid response arrived in time.
    Timeout(TimeoutError),
    /// Invalid configuration.
    Config(ConfigError),
    /// An update cycle was attempted before `start`.
    NotStarted,
    /// Underlying I/O error while sending.
    Io(io::Error),
}

/// Hostname resolution failure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolveError {
    /// The hostname that failed to resolve.
    pub host: String,
}

/// Timeout errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TimeoutError {
    /// No 48-byte response within the response timeout.
    Response {
        /// Milliseconds waited since the request was sent.
        waited_ms: u64,
    },
}

/// Configuration errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The server was configured by hostname and an IP was given, or vice versa.
    AddressModeFixed {
        /// `"hostname"` or `"ip"`: the mode fixed at construction.
        mode: &'static str,
    },
    /// A random port range with `min > max`.
    InvalidPortRange {
        /// Lower bound.
        min: u16,
        /// Upper bound.
        max: u16,
    },
}

// ── Display implementations ─────────────────────────────────────────

impl fmt::Display for NtpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NtpError::Bind(e) => write!(f, "failed to bind local port: {e}"),
            NtpError::Resolve(e) => write!(f, "{e}"),
            NtpError::Timeout(e) => write!(f, "NTP timeout: {e}"),
            NtpError::Config(e) => write!(f, "NTP config error: {e}"),
            NtpError::NotStarted => write!(f, "NTP client has not been started"),
            NtpError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not resolve NTP server {}", self.host)
    }
}

impl fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeoutError::Response { waited_ms } => {
                write!(f, "no response after {waited_ms} ms")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::AddressModeFixed { mode } => {
                write!(f, "server address mode is fixed to {mode} for this client")
            }
            ConfigError::InvalidPortRange { min, max } => {
                write!(f, "invalid port range {min}..={max}")
            }
        }
    }
}

// ── Error trait implementations ─────────────────────────────────────

impl std::error::Error for NtpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NtpError::Bind(e) | NtpError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for ResolveError {}
impl std::error::Error for TimeoutError {}
impl std::error::Error for ConfigError {}

// ── From conversions ────────────────────────────────────────────────

impl From<NtpError> for io::Error {
    fn from(err: NtpError) -> io::Error {
        let kind = match &err {
            NtpError::Bind(e) => e.kind(),
            NtpError::Resolve(_) => io::ErrorKind::NotFound,
            NtpError::Timeout(_) => io::ErrorKind::TimedOut,
            NtpError::Config(_) => io::ErrorKind::InvalidInput,
            NtpError::NotStarted => io::ErrorKind::NotConnected,
            NtpError::Io(e) => e.kind(),
        };
        // Preserve the original io::Error directly for the Io variant.
        if let NtpError::Io(e) = err {
            return e;
        }
        io::Error::new(kind, err)
    }
}

impl From<io::Error> for NtpError {
    fn from(err: io::Error) -> NtpError {
        NtpError::Io(err)
    }
}

impl From<ConfigError> for NtpError {
    fn from(err: ConfigError) -> NtpError {
        NtpError::Config(err)
    }
}

// ── Tests ───────────────────────────────────────────────────────────
