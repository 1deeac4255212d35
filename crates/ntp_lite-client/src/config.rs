// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Client configuration.
//!
//! A [`ClientConfig`] is plain data: every field can be set at construction,
//! through [`NtpClientBuilder`](crate::NtpClientBuilder), or later through the
//! setters on [`NtpClient`](crate::NtpClient). Changes take effect on the next
//! update cycle, except the local port, which is read by the next `start`.

use std::net::IpAddr;
use std::ops::RangeInclusive;

use crate::error::ConfigError;

/// Default time server hostname.
pub const DEFAULT_POOL_SERVER: &str = "pool.ntp.org";

/// Default local UDP port.
pub const DEFAULT_LOCAL_PORT: u16 = 1337;

/// Default minimum time between update attempts (milliseconds).
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 60_000;

/// Default time to wait for a response before abandoning a cycle (milliseconds).
pub const DEFAULT_RESPONSE_TIMEOUT_MS: u64 = 1_000;

/// Default language tag for names in formatted dates.
pub const DEFAULT_DATE_LANGUAGE: &str = "en";

/// Dynamic/private port range used when no explicit random range is given.
pub const RANDOM_PORT_RANGE: RangeInclusive<u16> = 49152..=65535;

/// How the time server is addressed.
///
/// The variant is fixed for the lifetime of a client: a hostname client
/// re-resolves on every request, an IP client never resolves.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ServerAddress {
    /// Resolved through the transport before each request.
    Hostname(String),
    /// Used as-is.
    Ip(IpAddr),
}

impl ServerAddress {
    /// Name of the addressing mode, for diagnostics.
    pub fn mode(&self) -> &'static str {
        match self {
            ServerAddress::Hostname(_) => "hostname",
            ServerAddress::Ip(_) => "ip",
        }
    }
}

impl Default for ServerAddress {
    fn default() -> Self {
        ServerAddress::Hostname(DEFAULT_POOL_SERVER.to_owned())
    }
}

/// Settings for an [`NtpClient`](crate::NtpClient).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientConfig {
    /// Time server.
    pub server: ServerAddress,
    /// Time server UDP port.
    pub server_port: u16,
    /// Local UDP port bound by `start`.
    pub local_port: u16,
    /// Signed offset in seconds added to the server time (timezone).
    pub time_offset: i32,
    /// Minimum milliseconds between update attempts.
    pub update_interval_ms: u64,
    /// Milliseconds to wait for a response.
    pub response_timeout_ms: u64,
    /// Language tag used for weekday and month names.
    pub date_language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server: ServerAddress::default(),
            server_port: crate::protocol::PORT,
            local_port: DEFAULT_LOCAL_PORT,
            time_offset: 0,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            response_timeout_ms: DEFAULT_RESPONSE_TIMEOUT_MS,
            date_language: DEFAULT_DATE_LANGUAGE.to_owned(),
        }
    }
}

/// Pick a pseudo-random port from `min..=max`.
///
/// Returns [`ConfigError::InvalidPortRange`] when `min > max`.
pub fn random_port(min: u16, max: u16) -> Result<u16, ConfigError> {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};

    if min > max {
        return Err(ConfigError::InvalidPortRange { min, max });
    }

    // RandomState is seeded per process from OS entropy; mixing in the wall
    // clock keeps successive calls apart.
    let noise = {
        let s = RandomState::new();
        let mut h = s.build_hasher();
        if let Ok(now) = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            h.write_u64(now.as_secs());
            h.write_u32(now.subsec_nanos());
        }
        h.finish()
    };

    let span = u64::from(max - min) + 1;
    Ok(min + (noise % span) as u16)
}
