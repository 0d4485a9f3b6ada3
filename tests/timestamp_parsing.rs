use chrono::{DateTime, Duration, TimeZone, Utc};
use freshness_core::decay::{age_in_days, parse_instant, Timestamp, TimestampError};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn bare_date_is_midnight_utc() {
    assert_eq!(parse_instant("2025-01-01").unwrap(), utc(2025, 1, 1, 0, 0, 0));
}

#[test]
fn naive_datetime_is_treated_as_utc() {
    assert_eq!(
        parse_instant("2025-01-01T12:30:00").unwrap(),
        utc(2025, 1, 1, 12, 30, 0)
    );
    // space separator
    assert_eq!(
        parse_instant("2025-01-01 12:30:00").unwrap(),
        utc(2025, 1, 1, 12, 30, 0)
    );
    // fractional seconds
    let with_fraction = parse_instant("2025-01-01T12:30:00.500").unwrap();
    assert_eq!(
        with_fraction - utc(2025, 1, 1, 12, 30, 0),
        Duration::milliseconds(500)
    );
}

#[test]
fn trailing_z_designator_is_accepted() {
    assert_eq!(
        parse_instant("2025-01-01T12:30:00Z").unwrap(),
        utc(2025, 1, 1, 12, 30, 0)
    );
}

#[test]
fn explicit_offset_is_normalized_to_utc() {
    assert_eq!(
        parse_instant("2025-01-01T12:00:00+02:00").unwrap(),
        utc(2025, 1, 1, 10, 0, 0)
    );
}

#[test]
fn garbage_is_unparseable() {
    for raw in ["not a date", "2025-13-40", "yesterday", "01/02/2025"] {
        assert!(
            matches!(parse_instant(raw), Err(TimestampError::Unparseable(_))),
            "{raw:?} should not parse"
        );
    }
}

#[test]
fn age_counts_86400_second_days() {
    let now = utc(2025, 1, 10, 0, 0, 0);
    assert_eq!(age_in_days(now - Duration::days(1), now), 1.0);
    assert_eq!(age_in_days(now - Duration::hours(36), now), 1.5);
    assert_eq!(age_in_days(now, now), 0.0);
}

#[test]
fn future_instant_is_floored_at_zero() {
    let now = utc(2025, 1, 10, 0, 0, 0);
    assert_eq!(age_in_days(now + Duration::days(7), now), 0.0);
}

#[test]
fn timestamp_enum_resolves_both_variants() {
    let instant = utc(2024, 6, 1, 0, 0, 0);
    assert_eq!(Timestamp::from(instant).instant().unwrap(), instant);
    assert_eq!(
        Timestamp::from("2024-06-01").instant().unwrap(),
        utc(2024, 6, 1, 0, 0, 0)
    );
    assert!(Timestamp::from("junk").instant().is_err());
}
