//! Bridging NTP seconds (since 1900-01-01) and Unix seconds (since 1970-01-01).
//!
//! Both directions use wrapping 32-bit arithmetic, matching the width of the
//! on-wire seconds field. Values stay correct until the NTP era rolls over on
//! 2036-02-07 06:28:16 UTC; after that the result wraps instead of failing,
//! the same way a 32-bit embedded client would.

use crate::protocol::TimestampFormat;

/// The number of seconds from 1st January 1900 UTC to the start of the Unix epoch.
pub const EPOCH_DELTA: u32 = 2_208_988_800;

/// Convert NTP seconds to Unix seconds (`ntp - 2_208_988_800`, wrapping).
pub const fn ntp_to_unix_seconds(ntp_seconds: u32) -> u32 {
    ntp_seconds.wrapping_sub(EPOCH_DELTA)
}

/// Convert Unix seconds to NTP seconds (`unix + 2_208_988_800`, wrapping).
pub const fn unix_to_ntp_seconds(unix_seconds: u32) -> u32 {
    unix_seconds.wrapping_add(EPOCH_DELTA)
}

impl TimestampFormat {
    /// Seconds of this timestamp relative to the Unix epoch. The fraction is dropped.
    pub fn unix_seconds(&self) -> u32 {
        ntp_to_unix_seconds(self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_delta_maps_to_zero() {
        assert_eq!(ntp_to_unix_seconds(2_208_988_800), 0);
        assert_eq!(unix_to_ntp_seconds(0), 2_208_988_800);
    }

    #[test]
    fn zero_wraps_like_a_32_bit_client() {
        assert_eq!(ntp_to_unix_seconds(0), 2_085_978_496);
        assert_eq!(ntp_to_unix_seconds(0), 0u32.wrapping_sub(2_208_988_800));
    }

    #[test]
    fn era_end() {
        // 2036-02-07 06:28:15 UTC
        assert_eq!(ntp_to_unix_seconds(u32::MAX), 2_085_978_495);
    }

    #[test]
    fn known_instant() {
        // 2023-11-14 22:13:20 UTC
        let ts = TimestampFormat {
            seconds: 3_908_988_800,
            fraction: 0xFFFF_FFFF,
        };
        assert_eq!(ts.unix_seconds(), 1_700_000_000);
    }
}
