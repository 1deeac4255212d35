// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Datagram transport used by the client.
//!
//! The client needs exactly five things from the network: bind a local port,
//! send a datagram, check for a datagram without blocking, resolve a hostname
//! and release the port. [`Transport`] captures that, so the state machine
//! runs unchanged over a host UDP socket, an embedded network stack or a
//! scripted fake in tests.

use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use log::{debug, trace};

/// Non-blocking datagram I/O plus name resolution.
pub trait Transport {
    /// Bind `local_port`, replacing any previous binding.
    fn bind(&mut self, local_port: u16) -> io::Result<()>;

    /// Send one datagram to `target`.
    fn send_to(&mut self, buf: &[u8], target: SocketAddr) -> io::Result<usize>;

    /// Copy the next pending datagram into `buf`.
    ///
    /// Returns `Ok(None)` when nothing is waiting. Must not block. A datagram
    /// longer than `buf` is truncated; the returned length is its full size
    /// when the transport knows it.
    fn poll_recv(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>>;

    /// Resolve `host` to an address, or `None` on failure.
    fn resolve(&mut self, host: &str) -> Option<IpAddr>;

    /// Release the local port. Idempotent.
    fn unbind(&mut self);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn bind(&mut self, local_port: u16) -> io::Result<()> {
        (**self).bind(local_port)
    }

    fn send_to(&mut self, buf: &[u8], target: SocketAddr) -> io::Result<usize> {
        (**self).send_to(buf, target)
    }

    fn poll_recv(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>> {
        (**self).poll_recv(buf)
    }

    fn resolve(&mut self, host: &str) -> Option<IpAddr> {
        (**self).resolve(host)
    }

    fn unbind(&mut self) {
        (**self).unbind()
    }
}

/// [`Transport`] over a non-blocking [`std::net::UdpSocket`].
///
/// Binds the IPv4 wildcard address. Datagrams whose source IP differs from
/// the last send target are dropped, so a stray packet on the port cannot be
/// mistaken for the server's answer.
#[derive(Debug)]
pub struct UdpTransport {
    bind_ip: IpAddr,
    socket: Option<UdpSocket>,
    peer: Option<SocketAddr>,
}

impl UdpTransport {
    /// An unbound transport on the IPv4 wildcard address.
    pub fn new() -> Self {
        UdpTransport::with_bind_ip(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
    }

    /// An unbound transport that will bind on `bind_ip`.
    pub fn with_bind_ip(bind_ip: IpAddr) -> Self {
        UdpTransport {
            bind_ip,
            socket: None,
            peer: None,
        }
    }

    /// Local address of the bound socket.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket()?.local_addr()
    }

    fn socket(&self) -> io::Result<&UdpSocket> {
        self.socket.as_ref().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotConnected, "UDP transport is not bound")
        })
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        UdpTransport::new()
    }
}

impl Transport for UdpTransport {
    fn bind(&mut self, local_port: u16) -> io::Result<()> {
        self.unbind();
        let socket = UdpSocket::bind(SocketAddr::new(self.bind_ip, local_port))?;
        socket.set_nonblocking(true)?;
        debug!("bound UDP socket on {}", socket.local_addr()?);
        self.socket = Some(socket);
        Ok(())
    }

    fn send_to(&mut self, buf: &[u8], target: SocketAddr) -> io::Result<usize> {
        let sent = self.socket()?.send_to(buf, target)?;
        self.peer = Some(target);
        Ok(sent)
    }

    fn poll_recv(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>> {
        let socket = self.socket()?;
        match socket.recv_from(buf) {
            Ok((len, src)) => {
                if let Some(peer) = self.peer {
                    if src.ip() != peer.ip() {
                        trace!("ignoring {len}-byte datagram from unexpected source {src}");
                        return Ok(None);
                    }
                }
                Ok(Some(len))
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn resolve(&mut self, host: &str) -> Option<IpAddr> {
        let addrs: Vec<SocketAddr> = match (host, 0).to_socket_addrs() {
            Ok(addrs) => addrs.collect(),
            Err(e) => {
                debug!("resolving {host} failed: {e}");
                return None;
            }
        };
        // Prefer an address of the same family as the bound socket.
        addrs
            .iter()
            .find(|a| a.is_ipv4() == self.bind_ip.is_ipv4())
            .or_else(|| addrs.first())
            .map(SocketAddr::ip)
    }

    fn unbind(&mut self) {
        if self.socket.take().is_some() {
            debug!("released UDP socket");
        }
        self.peer = None;
    }
}
