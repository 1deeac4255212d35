// Print the local time once per second, refreshing from an NTP server in the
// background of the main loop.
//
// Usage:
//   cargo run -p ntp_lite-client --example clock_display -- [server] [offset-seconds] [language]
//
// Example:
//   RUST_LOG=debug cargo run -p ntp_lite-client --example clock_display -- time.nist.gov 3600 de

use std::time::Duration;

use ntp_lite::{ClientConfig, NtpClient, ServerAddress};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let server = args.get(1).map_or("pool.ntp.org", String::as_str);
    let offset: i32 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(0);
    let language = args.get(3).map_or("en", String::as_str);

    let server = match server.parse() {
        Ok(ip) => ServerAddress::Ip(ip),
        Err(_) => ServerAddress::Hostname(server.to_string()),
    };
    let mut client = NtpClient::with_udp(ClientConfig {
        server,
        time_offset: offset,
        date_language: language.to_string(),
        ..ClientConfig::default()
    });
    client.set_default_random_port()?;
    client.start()?;

    if !client.force_update() {
        eprintln!("initial update failed; will keep trying every minute");
    }

    let mut last_printed = None;
    loop {
        client.tick();
        let now = client.epoch_time();
        if client.is_time_set() && last_printed != Some(now) {
            println!("{}", client.formatted_date_time("%A %d %B %Y  %H:%M:%S"));
            last_printed = Some(now);
        }
        std::thread::sleep(Duration::from_millis(50));
    }
}
