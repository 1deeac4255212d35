// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Tick-driven SNTP client.
//!
//! [`NtpClient`] owns a [`Transport`] and a [`Clock`] and walks an explicit
//! state machine:
//!
//! ```text
//! Uninitialized --start--> Idle --due--> SendRequest --sent--> WaitResponse
//!                            ^                |                     |
//!                            +----- failed ---+-- answer/timeout ---+
//! ```
//!
//! [`tick`](NtpClient::tick) advances it by at most one non-blocking poll and
//! reports whether a fresh server time was applied. Between exchanges the
//! epoch is extrapolated from the clock's uptime.
//!
//! The timezone offset is added to the server time when a response is
//! applied, so changing it only shows up after the next successful exchange.
//!
//! # Examples
//!
//! ```no_run
//! use std::net::Ipv4Addr;
//! use ntp_lite::{NtpClient, SystemClock, UdpTransport};
//!
//! let mut client = NtpClient::builder(UdpTransport::new(), SystemClock::new())
//!     .server_ip(Ipv4Addr::new(192, 0, 2, 123).into())
//!     .random_port(49152, 65535)
//!     .update_interval(300_000)
//!     .build()?;
//! client.start()?;
//! if client.force_update() {
//!     println!("{}", client.formatted_time());
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io;
use std::net::{IpAddr, SocketAddr};

use log::{debug, trace, warn};

use crate::calendar::DateTime;
use crate::clock::{Clock, SystemClock};
use crate::config::{self, ClientConfig, ServerAddress};
use crate::error::{ConfigError, NtpError, ResolveError, TimeoutError};
use crate::format;
use crate::locale::DateLanguage;
use crate::protocol;
use crate::transport::{Transport, UdpTransport};

/// Delay between polls while [`NtpClient::force_update`] waits.
pub const FORCE_POLL_DELAY_MS: u64 = 10;

/// Receive buffer size. Larger than a packet so oversized datagrams are
/// recognised instead of silently truncated to 48 bytes.
const RECV_BUFFER_SIZE: usize = 64;

/// Upper bound on datagrams discarded before a send.
const MAX_STALE_DATAGRAMS: usize = 16;

/// Where the client is in its update cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UpdateState {
    /// Not started, or stopped with [`NtpClient::end`].
    Uninitialized,
    /// Bound and waiting for the next update to fall due.
    Idle,
    /// About to resolve the server and send a request.
    SendRequest,
    /// A request is in flight.
    WaitResponse {
        /// Uptime (ms) when the request was sent.
        sent_at: u64,
    },
}

/// SNTP client driven by repeated calls to [`tick`](NtpClient::tick).
#[derive(Debug)]
pub struct NtpClient<T, C> {
    transport: T,
    clock: C,
    config: ClientConfig,
    state: UpdateState,
    /// Unix seconds at `last_update`, offset applied.
    current_epoch: u32,
    last_update: Option<u64>,
    last_request: Option<u64>,
}

impl NtpClient<UdpTransport, SystemClock> {
    /// A client on a host UDP socket and the system monotonic clock.
    pub fn with_udp(config: ClientConfig) -> Self {
        NtpClient::new(UdpTransport::new(), SystemClock::new(), config)
    }
}

impl<T: Transport, C: Clock> NtpClient<T, C> {
    /// Create an unstarted client.
    pub fn new(transport: T, clock: C, config: ClientConfig) -> Self {
        NtpClient {
            transport,
            clock,
            config,
            state: UpdateState::Uninitialized,
            current_epoch: 0,
            last_update: None,
            last_request: None,
        }
    }

    /// Start configuring a client with the default [`ClientConfig`].
    pub fn builder(transport: T, clock: C) -> NtpClientBuilder<T, C> {
        NtpClientBuilder::new(transport, clock)
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Bind the configured local port and enter `Idle`.
    pub fn start(&mut self) -> io::Result<()> {
        self.start_on(self.config.local_port)
    }

    /// Bind `local_port` and enter `Idle`.
    ///
    /// Restarting a running client releases the old binding first and forgets
    /// the previously received time. On bind failure the client is left
    /// `Uninitialized`.
    pub fn start_on(&mut self, local_port: u16) -> io::Result<()> {
        if self.state != UpdateState::Uninitialized {
            self.transport.unbind();
        }
        self.state = UpdateState::Uninitialized;
        self.current_epoch = 0;
        self.last_update = None;
        self.last_request = None;
        self.config.local_port = local_port;

        if let Err(e) = self.transport.bind(local_port) {
            warn!("failed to bind local port {local_port}: {e}");
            return Err(NtpError::Bind(e).into());
        }
        debug!("NTP client started on local port {local_port}");
        self.state = UpdateState::Idle;
        Ok(())
    }

    /// Release the transport and return to `Uninitialized`.
    ///
    /// The last received time stays readable until the next `start`.
    pub fn end(&mut self) {
        if self.state != UpdateState::Uninitialized {
            debug!("NTP client stopped");
        }
        self.transport.unbind();
        self.state = UpdateState::Uninitialized;
    }

    // ── Update cycle ────────────────────────────────────────────────

    /// Advance the update cycle. Never blocks.
    ///
    /// Returns `true` only on the call that applied a fresh server time.
    pub fn tick(&mut self) -> bool {
        match self.advance() {
            Ok(updated) => updated,
            Err(NtpError::NotStarted) => false,
            Err(e) => {
                warn!("NTP update failed: {e}");
                false
            }
        }
    }

    /// Like [`tick`](Self::tick), but reports why a cycle failed.
    ///
    /// A client that was never started (or was stopped with
    /// [`end`](Self::end)) yields [`NtpError::NotStarted`].
    pub fn try_tick(&mut self) -> io::Result<bool> {
        self.advance().map_err(Into::into)
    }

    fn advance(&mut self) -> Result<bool, NtpError> {
        if self.state == UpdateState::Uninitialized {
            return Err(NtpError::NotStarted);
        }
        let now = self.clock.millis();
        self.step(now, false)
    }

    /// Run a full update cycle now, ignoring the update interval.
    ///
    /// Blocks until a response is applied or the response timeout elapses,
    /// polling every [`FORCE_POLL_DELAY_MS`]. A cycle already in flight is
    /// awaited rather than restarted.
    pub fn force_update(&mut self) -> bool {
        if self.state == UpdateState::Uninitialized {
            return false;
        }
        debug!("forcing NTP update");
        let mut force = true;
        loop {
            let now = self.clock.millis();
            match self.step(now, force) {
                Ok(true) => return true,
                Ok(false) if matches!(self.state, UpdateState::WaitResponse { .. }) => {}
                Ok(false) => return false,
                Err(e) => {
                    warn!("forced NTP update failed: {e}");
                    return false;
                }
            }
            force = false;
            self.clock.sleep_ms(FORCE_POLL_DELAY_MS);
        }
    }

    /// One pass through the machine: start a cycle if one is due (or
    /// `force`d), send if needed, then poll once.
    fn step(&mut self, now: u64, force: bool) -> Result<bool, NtpError> {
        if self.state == UpdateState::Idle && (force || self.update_due(now)) {
            trace!("NTP update due at {now} ms");
            self.state = UpdateState::SendRequest;
        }
        if self.state == UpdateState::SendRequest {
            if let Err(e) = self.send_request(now) {
                self.state = UpdateState::Idle;
                return Err(e);
            }
        }
        match self.state {
            UpdateState::WaitResponse { sent_at } => self.poll_response(now, sent_at),
            UpdateState::Uninitialized => Err(NtpError::NotStarted),
            UpdateState::Idle | UpdateState::SendRequest => Ok(false),
        }
    }

    fn update_due(&self, now: u64) -> bool {
        let Some(anchor) = self.last_update.max(self.last_request) else {
            return true;
        };
        now.saturating_sub(anchor) >= self.config.update_interval_ms
    }

    fn send_request(&mut self, now: u64) -> Result<(), NtpError> {
        self.discard_stale();
        self.last_request = Some(now);

        let target = SocketAddr::new(self.server_ip()?, self.config.server_port);
        let request = protocol::encode_request();
        self.transport.send_to(&request, target)?;
        debug!("sent NTP request to {target}");

        self.state = UpdateState::WaitResponse { sent_at: now };
        Ok(())
    }

    fn server_ip(&mut self) -> Result<IpAddr, NtpError> {
        match &self.config.server {
            ServerAddress::Ip(ip) => Ok(*ip),
            ServerAddress::Hostname(host) => self.transport.resolve(host).ok_or_else(|| {
                NtpError::Resolve(ResolveError {
                    host: host.clone(),
                })
            }),
        }
    }

    /// Empty the receive queue so a late answer to an abandoned request is
    /// not taken as the answer to the next one.
    fn discard_stale(&mut self) {
        let mut buf = [0u8; RECV_BUFFER_SIZE];
        for _ in 0..MAX_STALE_DATAGRAMS {
            match self.transport.poll_recv(&mut buf) {
                Ok(Some(len)) => trace!("discarding stale {len}-byte datagram"),
                Ok(None) | Err(_) => break,
            }
        }
    }

    fn poll_response(&mut self, now: u64, sent_at: u64) -> Result<bool, NtpError> {
        let mut buf = [0u8; RECV_BUFFER_SIZE];
        match self.transport.poll_recv(&mut buf) {
            Ok(Some(len)) => {
                let datagram = &buf[..len.min(RECV_BUFFER_SIZE)];
                match protocol::transmit_timestamp(datagram) {
                    Ok(timestamp) => {
                        self.apply(timestamp.unix_seconds(), now);
                        return Ok(true);
                    }
                    Err(e) => trace!("discarding datagram: {e}"),
                }
            }
            Ok(None) => {}
            Err(e) => debug!("NTP receive failed: {e}"),
        }

        let waited_ms = now.saturating_sub(sent_at);
        if waited_ms >= self.config.response_timeout_ms {
            self.state = UpdateState::Idle;
            return Err(NtpError::Timeout(TimeoutError::Response { waited_ms }));
        }
        Ok(false)
    }

    fn apply(&mut self, server_unix: u32, now: u64) {
        self.current_epoch = server_unix.wrapping_add_signed(self.config.time_offset);
        self.last_update = Some(now);
        self.state = UpdateState::Idle;
        debug!(
            "NTP time applied: {} (offset {} s)",
            self.current_epoch, self.config.time_offset
        );
    }

    // ── Time queries ────────────────────────────────────────────────

    /// Whether a server time has been applied since the last `start`.
    pub fn is_time_set(&self) -> bool {
        self.last_update.is_some()
    }

    /// Current Unix time in seconds, offset included. 0 until the first
    /// successful update.
    pub fn epoch_time(&self) -> u32 {
        match self.last_update {
            Some(at) => {
                let elapsed_secs = self.clock.millis().saturating_sub(at) / 1000;
                self.current_epoch.wrapping_add(elapsed_secs as u32)
            }
            None => 0,
        }
    }

    /// [`epoch_time`](Self::epoch_time) split into calendar fields.
    pub fn date_time(&self) -> DateTime {
        DateTime::from_unix(u64::from(self.epoch_time()))
    }

    /// Hour of the day, 0 to 23.
    pub fn hours(&self) -> u8 {
        self.date_time().hour
    }

    /// Minute of the hour, 0 to 59.
    pub fn minutes(&self) -> u8 {
        self.date_time().minute
    }

    /// Second of the minute, 0 to 59.
    pub fn seconds(&self) -> u8 {
        self.date_time().second
    }

    /// Day of the month, 1 to 31.
    pub fn day(&self) -> u8 {
        self.date_time().day
    }

    /// Day of the week, 0 (Sunday) to 6.
    pub fn day_of_week(&self) -> u8 {
        self.date_time().weekday
    }

    /// Month, 1 to 12.
    pub fn month(&self) -> u8 {
        self.date_time().month
    }

    /// Four-digit year.
    pub fn year(&self) -> u32 {
        self.date_time().year
    }

    /// `HH:MM:SS`.
    pub fn formatted_time(&self) -> String {
        format::format_time(&self.date_time())
    }

    /// Expand `format` with the codes described in [`crate::format`], using
    /// the configured language for names.
    pub fn formatted_date_time(&self, format: &str) -> String {
        let lang = DateLanguage::lookup(&self.config.date_language);
        format::format_date_time(&self.date_time(), lang, format)
    }

    // ── Configuration ───────────────────────────────────────────────

    /// Seconds added to the server time. Applied on the next update.
    pub fn set_time_offset(&mut self, offset_secs: i32) {
        self.config.time_offset = offset_secs;
    }

    /// Minimum milliseconds between update attempts.
    pub fn set_update_interval(&mut self, interval_ms: u64) {
        self.config.update_interval_ms = interval_ms;
    }

    /// Milliseconds to wait for a response.
    pub fn set_response_timeout(&mut self, timeout_ms: u64) {
        self.config.response_timeout_ms = timeout_ms;
    }

    /// Replace the server hostname. Rejected for a client built with an IP.
    pub fn set_pool_server_name(&mut self, name: impl Into<String>) -> io::Result<()> {
        match &mut self.config.server {
            ServerAddress::Hostname(host) => {
                *host = name.into();
                Ok(())
            }
            server @ ServerAddress::Ip(_) => Err(address_mode_fixed(server)),
        }
    }

    /// Replace the server IP. Rejected for a client built with a hostname.
    pub fn set_pool_server_ip(&mut self, ip: IpAddr) -> io::Result<()> {
        match &mut self.config.server {
            ServerAddress::Ip(current) => {
                *current = ip;
                Ok(())
            }
            server @ ServerAddress::Hostname(_) => Err(address_mode_fixed(server)),
        }
    }

    /// Language tag for `%a %A %b %B`. Unknown tags render in English.
    pub fn set_date_language(&mut self, tag: impl Into<String>) {
        self.config.date_language = tag.into();
    }

    /// Choose a new random local port in `min..=max`, used by the next
    /// [`start`](Self::start).
    pub fn set_random_port(&mut self, min: u16, max: u16) -> io::Result<()> {
        let port = config::random_port(min, max).map_err(NtpError::Config)?;
        debug!("selected random local port {port}");
        self.config.local_port = port;
        Ok(())
    }

    /// [`set_random_port`](Self::set_random_port) over
    /// [`RANDOM_PORT_RANGE`](config::RANDOM_PORT_RANGE).
    pub fn set_default_random_port(&mut self) -> io::Result<()> {
        let range = config::RANDOM_PORT_RANGE;
        self.set_random_port(*range.start(), *range.end())
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Current state.
    pub fn state(&self) -> UpdateState {
        self.state
    }

    /// Current configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Uptime (ms) of the last applied response.
    pub fn last_update(&self) -> Option<u64> {
        self.last_update
    }

    /// Uptime (ms) of the last request attempt, successful or not.
    pub fn last_request(&self) -> Option<u64> {
        self.last_request
    }

    /// The transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The transport, mutably.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// The clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Take the collaborators back.
    pub fn into_parts(self) -> (T, C) {
        (self.transport, self.clock)
    }
}

fn address_mode_fixed(server: &ServerAddress) -> io::Error {
    NtpError::Config(ConfigError::AddressModeFixed {
        mode: server.mode(),
    })
    .into()
}

/// Builder for an [`NtpClient`]. Starts from [`ClientConfig::default`].
#[derive(Debug)]
pub struct NtpClientBuilder<T, C> {
    transport: T,
    clock: C,
    config: ClientConfig,
    random_port: Option<(u16, u16)>,
}

impl<T: Transport, C: Clock> NtpClientBuilder<T, C> {
    fn new(transport: T, clock: C) -> Self {
        NtpClientBuilder {
            transport,
            clock,
            config: ClientConfig::default(),
            random_port: None,
        }
    }

    /// Address the server by hostname (default: `pool.ntp.org`).
    pub fn server_name(mut self, name: impl Into<String>) -> Self {
        self.config.server = ServerAddress::Hostname(name.into());
        self
    }

    /// Address the server by IP; no resolution is performed.
    pub fn server_ip(mut self, ip: IpAddr) -> Self {
        self.config.server = ServerAddress::Ip(ip);
        self
    }

    /// Server UDP port (default: 123).
    pub fn server_port(mut self, port: u16) -> Self {
        self.config.server_port = port;
        self
    }

    /// Local UDP port (default: 1337). Clears any earlier `random_port`.
    pub fn local_port(mut self, port: u16) -> Self {
        self.config.local_port = port;
        self.random_port = None;
        self
    }

    /// Pick the local port at random from `min..=max` when building.
    pub fn random_port(mut self, min: u16, max: u16) -> Self {
        self.random_port = Some((min, max));
        self
    }

    /// Timezone offset in seconds (default: 0).
    pub fn time_offset(mut self, offset_secs: i32) -> Self {
        self.config.time_offset = offset_secs;
        self
    }

    /// Minimum milliseconds between updates (default: 60000).
    pub fn update_interval(mut self, interval_ms: u64) -> Self {
        self.config.update_interval_ms = interval_ms;
        self
    }

    /// Milliseconds to wait for a response (default: 1000).
    pub fn response_timeout(mut self, timeout_ms: u64) -> Self {
        self.config.response_timeout_ms = timeout_ms;
        self
    }

    /// Language tag for names in formatted dates (default: `"en"`).
    pub fn date_language(mut self, tag: impl Into<String>) -> Self {
        self.config.date_language = tag.into();
        self
    }

    /// Build the client. Fails only on an inverted random port range.
    pub fn build(mut self) -> io::Result<NtpClient<T, C>> {
        if let Some((min, max)) = self.random_port {
            self.config.local_port = config::random_port(min, max).map_err(NtpError::Config)?;
        }
        Ok(NtpClient::new(self.transport, self.clock, self.config))
    }
}
