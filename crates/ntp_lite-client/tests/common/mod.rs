// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for integration tests.

// Integration test helpers are `pub` so each `tests/*.rs` file can import them
// via `mod common`, but clippy flags them as unreachable outside the crate.
#![allow(unreachable_pub, dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::rc::Rc;

use ntp_lite::unix_time::unix_to_ntp_seconds;
use ntp_lite::{ClientConfig, Clock, NtpClient, Transport};

/// Address the fake resolver hands out by default (TEST-NET-1).
pub const RESOLVED_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));

/// Everything the fake network has seen, and what it will do next.
#[derive(Debug)]
pub struct FakeNet {
    pub bound: Option<u16>,
    pub bind_error: Option<io::ErrorKind>,
    pub send_error: Option<io::ErrorKind>,
    pub resolve_to: Option<IpAddr>,
    pub resolved: Vec<String>,
    pub sent: Vec<(Vec<u8>, SocketAddr)>,
    pub inbox: VecDeque<Vec<u8>>,
    /// When set, every send is answered immediately with a response
    /// carrying this Unix time.
    pub responder: Option<u32>,
    pub unbinds: usize,
}

impl Default for FakeNet {
    fn default() -> Self {
        FakeNet {
            bound: None,
            bind_error: None,
            send_error: None,
            resolve_to: Some(RESOLVED_IP),
            resolved: Vec::new(),
            sent: Vec::new(),
            inbox: VecDeque::new(),
            responder: None,
            unbinds: 0,
        }
    }
}

/// Scripted [`Transport`]. Clones share state, so a test keeps one handle
/// while the client owns another.
#[derive(Clone, Debug, Default)]
pub struct FakeTransport {
    net: Rc<RefCell<FakeNet>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        FakeTransport::default()
    }

    pub fn net(&self) -> std::cell::RefMut<'_, FakeNet> {
        self.net.borrow_mut()
    }

    pub fn sends(&self) -> usize {
        self.net.borrow().sent.len()
    }

    pub fn push_datagram(&self, datagram: Vec<u8>) {
        self.net.borrow_mut().inbox.push_back(datagram);
    }
}

impl Transport for FakeTransport {
    fn bind(&mut self, local_port: u16) -> io::Result<()> {
        let mut net = self.net.borrow_mut();
        if let Some(kind) = net.bind_error {
            return Err(io::Error::from(kind));
        }
        net.bound = Some(local_port);
        Ok(())
    }

    fn send_to(&mut self, buf: &[u8], target: SocketAddr) -> io::Result<usize> {
        let mut net = self.net.borrow_mut();
        if let Some(kind) = net.send_error {
            return Err(io::Error::from(kind));
        }
        net.sent.push((buf.to_vec(), target));
        if let Some(unix) = net.responder {
            net.inbox.push_back(response_for_unix(unix));
        }
        Ok(buf.len())
    }

    fn poll_recv(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>> {
        let mut net = self.net.borrow_mut();
        Ok(net.inbox.pop_front().map(|datagram| {
            let n = datagram.len().min(buf.len());
            buf[..n].copy_from_slice(&datagram[..n]);
            datagram.len()
        }))
    }

    fn resolve(&mut self, host: &str) -> Option<IpAddr> {
        let mut net = self.net.borrow_mut();
        net.resolved.push(host.to_string());
        net.resolve_to
    }

    fn unbind(&mut self) {
        let mut net = self.net.borrow_mut();
        net.bound = None;
        net.unbinds += 1;
    }
}

/// Uptime the test moves by hand. `sleep_ms` advances it.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock::default()
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn millis(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&self, ms: u64) {
        self.advance(ms);
    }
}

/// A 48-byte server response whose transmit timestamp is `ntp_secs`.
pub fn response(ntp_secs: u32) -> Vec<u8> {
    let mut buf = vec![0u8; 48];
    buf[0] = 0x24; // LI=0, VN=4, Mode=4 (server)
    buf[1] = 2;
    buf[40..44].copy_from_slice(&ntp_secs.to_be_bytes());
    buf
}

/// A server response carrying Unix time `unix_secs`.
pub fn response_for_unix(unix_secs: u32) -> Vec<u8> {
    response(unix_to_ntp_seconds(unix_secs))
}

pub type TestClient = NtpClient<FakeTransport, ManualClock>;

/// A started client on fakes with the default configuration.
pub fn started_client() -> (TestClient, FakeTransport, ManualClock) {
    started_client_with(ClientConfig::default())
}

/// A started client on fakes with `config`.
pub fn started_client_with(config: ClientConfig) -> (TestClient, FakeTransport, ManualClock) {
    let transport = FakeTransport::new();
    let clock = ManualClock::new();
    let mut client = NtpClient::new(transport.clone(), clock.clone(), config);
    client.start().expect("fake bind cannot fail");
    (client, transport, clock)
}
