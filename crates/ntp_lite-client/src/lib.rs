// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

/*!
Tick-driven SNTP client for devices with a single, intermittent network link.

The client keeps an approximate wall-clock time by exchanging one 48-byte
packet with a time server every update interval and advancing the last answer
with local uptime in between. It never blocks in [`NtpClient::tick`]; the host
application calls it from its main loop.

# Example

```rust,no_run
use ntp_lite::{ClientConfig, NtpClient};

let mut client = NtpClient::with_udp(ClientConfig {
    time_offset: 3600,
    ..ClientConfig::default()
});
client.start()?;

loop {
    if client.tick() {
        println!("{}", client.formatted_date_time("%A %d %B %Y, %H:%M:%S"));
    }
    std::thread::sleep(std::time::Duration::from_millis(50));
}
# Ok::<(), std::io::Error>(())
```

Networking and uptime are injected through the [`Transport`] and [`Clock`]
traits. [`UdpTransport`] and [`SystemClock`] cover hosts with `std`; embedded
targets and tests supply their own.
*/

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Re-export protocol types from ntp_lite_proto for convenience.
pub use ntp_lite_proto::{calendar, protocol, unix_time};

/// Error types for the client.
pub mod error;

/// Client configuration and defaults.
pub mod config;

/// Datagram transport abstraction and the `std::net` implementation.
pub mod transport;

/// Device uptime abstraction.
pub mod clock;

/// Weekday and month names per language.
pub mod locale;

/// The `%`-code date/time format mini-language.
pub mod format;

/// The update state machine.
pub mod client;

pub use client::{NtpClient, NtpClientBuilder, UpdateState};
pub use clock::{Clock, SystemClock};
pub use config::{ClientConfig, ServerAddress};
pub use transport::{Transport, UdpTransport};
