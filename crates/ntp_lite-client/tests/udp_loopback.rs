// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! `UdpTransport` and `SystemClock` against a local UDP server.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use std::thread;
use std::time::{Duration, Instant};

use ntp_lite::unix_time::unix_to_ntp_seconds;
use ntp_lite::{NtpClient, SystemClock, UdpTransport};

const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Answer `requests` client packets with `unix_secs`, then exit.
fn spawn_server(unix_secs: u32, requests: usize) -> (u16, thread::JoinHandle<Vec<u8>>) {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    socket
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let port = socket.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let mut first = Vec::new();
        for _ in 0..requests {
            let mut buf = [0u8; 128];
            let (len, src) = socket.recv_from(&mut buf).unwrap();
            if first.is_empty() {
                first = buf[..len].to_vec();
            }
            let mut reply = [0u8; 48];
            reply[0] = 0x24;
            reply[40..44].copy_from_slice(&unix_to_ntp_seconds(unix_secs).to_be_bytes());
            socket.send_to(&reply, src).unwrap();
        }
        first
    });
    (port, handle)
}

fn client_for(port: u16) -> NtpClient<UdpTransport, SystemClock> {
    NtpClient::builder(UdpTransport::with_bind_ip(LOCALHOST), SystemClock::new())
        .server_ip(LOCALHOST)
        .server_port(port)
        .local_port(0)
        .build()
        .unwrap()
}

#[test]
fn force_update_over_loopback() {
    let (port, server) = spawn_server(1_700_000_000, 1);
    let mut client = client_for(port);
    client.start().unwrap();

    assert!(client.force_update());
    assert!(client.is_time_set());
    let epoch = client.epoch_time();
    assert!((1_700_000_000..1_700_000_002).contains(&epoch));

    let request = server.join().unwrap();
    assert_eq!(request.len(), 48);
    assert_eq!(request[0], 0xE3);
    assert!(request[1..].iter().all(|&b| b == 0));
}

#[test]
fn tick_over_loopback() {
    let (port, server) = spawn_server(1_000_000_000, 1);
    let mut client = client_for(port);
    client.start().unwrap();

    let deadline = Instant::now() + Duration::from_secs(2);
    let mut updated = false;
    while Instant::now() < deadline {
        if client.tick() {
            updated = true;
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }
    assert!(updated);
    assert_eq!(client.year(), 2001);
    server.join().unwrap();
}

#[test]
fn silent_server_times_out() {
    // Bound but never answers.
    let silent = UdpSocket::bind("127.0.0.1:0").unwrap();
    let port = silent.local_addr().unwrap().port();

    let mut client = client_for(port);
    client.set_response_timeout(200);
    client.start().unwrap();

    let started = Instant::now();
    assert!(!client.force_update());
    let waited = started.elapsed();
    assert!(waited >= Duration::from_millis(200));
    assert!(waited < Duration::from_secs(2));
    assert!(!client.is_time_set());
    assert_eq!(client.epoch_time(), 0);
}

#[test]
fn start_twice_rebinds() {
    let (port, server) = spawn_server(1_700_000_000, 1);
    let mut client = client_for(port);
    client.start().unwrap();
    client.start().unwrap();
    assert!(client.transport().local_addr().is_ok());
    assert!(client.force_update());
    server.join().unwrap();
    client.end();
    assert!(client.transport().local_addr().is_err());
}
