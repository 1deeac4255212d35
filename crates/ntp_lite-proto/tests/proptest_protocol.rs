use chrono::{Datelike, TimeZone, Timelike, Utc};
use ntp_lite_proto::calendar::DateTime;
use ntp_lite_proto::protocol::{
    FromBytes, Header, TimestampFormat, ToBytes, decode_transmit_timestamp, transmit_timestamp,
};
use ntp_lite_proto::unix_time::{ntp_to_unix_seconds, unix_to_ntp_seconds};
use proptest::prelude::*;

/// Strategy that generates exactly 48 random bytes.
fn arb_48_bytes() -> impl Strategy<Value = [u8; 48]> {
    prop::collection::vec(any::<u8>(), 48).prop_map(|v| {
        let mut buf = [0u8; 48];
        buf.copy_from_slice(&v);
        buf
    })
}

proptest! {
    #[test]
    fn timestamp_format_roundtrip(seconds in any::<u32>(), fraction in any::<u32>()) {
        let ts = TimestampFormat { seconds, fraction };
        let mut buf = [0u8; 8];
        ts.to_bytes(&mut buf).unwrap();
        prop_assert_eq!(TimestampFormat::from_bytes(&buf).unwrap(), ts);
    }

    /// Every header byte with a non-zero version unpacks and packs back unchanged.
    #[test]
    fn header_byte_roundtrip(byte in any::<u8>()) {
        match Header::from_byte(byte) {
            Ok(header) => prop_assert_eq!(header.to_byte(), byte),
            Err(_) => prop_assert_eq!((byte >> 3) & 0b111, 0),
        }
    }

    /// Only bytes 40..44 determine the decoded seconds.
    #[test]
    fn decode_reads_only_transmit_seconds(noise in arb_48_bytes(), seconds in any::<u32>()) {
        let mut buf = noise;
        buf[40..44].copy_from_slice(&seconds.to_be_bytes());
        prop_assert_eq!(decode_transmit_timestamp(&buf), seconds);
        prop_assert_eq!(transmit_timestamp(&buf).unwrap().seconds, seconds);
    }

    /// Datagrams of any size other than 48 are rejected without panicking.
    #[test]
    fn checked_decode_rejects_other_lengths(len in 0usize..256) {
        prop_assume!(len != 48);
        let buf = vec![0u8; len];
        prop_assert!(transmit_timestamp(&buf).is_err());
    }

    #[test]
    fn epoch_conversion_is_wrapping_subtraction(ntp in any::<u32>()) {
        prop_assert_eq!(ntp_to_unix_seconds(ntp), ntp.wrapping_sub(2_208_988_800));
        prop_assert_eq!(unix_to_ntp_seconds(ntp_to_unix_seconds(ntp)), ntp);
    }

    /// Calendar decomposition agrees with chrono across the 32-bit epoch range.
    #[test]
    fn calendar_matches_chrono(secs in 0u64..=u32::MAX as u64) {
        let dt = DateTime::from_unix(secs);
        let expected = Utc.timestamp_opt(secs as i64, 0).unwrap();
        prop_assert_eq!(dt.year as i32, expected.year());
        prop_assert_eq!(dt.month as u32, expected.month());
        prop_assert_eq!(dt.day as u32, expected.day());
        prop_assert_eq!(dt.hour as u32, expected.hour());
        prop_assert_eq!(dt.minute as u32, expected.minute());
        prop_assert_eq!(dt.second as u32, expected.second());
        prop_assert_eq!(dt.weekday as u32, expected.weekday().num_days_from_sunday());
    }

    #[test]
    fn calendar_roundtrip(secs in 0u64..=u32::MAX as u64) {
        prop_assert_eq!(DateTime::from_unix(secs).to_unix(), secs);
    }
}
