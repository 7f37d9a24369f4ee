//! Display values derived from raw forecast numbers and timestamps.

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{ForecastError, Result};

const CLOCK_TIME: &str = "%-I:%M %p";
const HOUR_LABEL: &str = "%-I %p";
const DAY_OF_WEEK: &str = "%A";

/// Round a temperature to the nearest whole degree, halves away from zero.
pub fn rounded_temperature(temp_f: f64) -> i32 {
    temp_f.round() as i32
}

/// Convert a 0..1 probability into a whole percentage.
pub fn precip_percent(fraction: f64) -> i32 {
    (fraction * 100.0).round() as i32
}

/// `h:mm AM/PM` in the given timezone, e.g. `12:00 PM`.
pub fn formatted_clock_time(epoch_seconds: i64, timezone: &str) -> Result<String> {
    let tz = parse_timezone(timezone)?;
    Ok(in_zone(epoch_seconds, &tz)?.format(CLOCK_TIME).to_string())
}

/// `h AM/PM` in the local timezone of the running process, e.g. `3 PM`.
///
/// Unlike the other formatters this ignores the forecast's timezone.
pub fn formatted_hour_label(epoch_seconds: i64) -> Result<String> {
    hour_label_in(epoch_seconds, &Local)
}

/// Full weekday name in the given timezone, e.g. `Thursday`.
pub fn formatted_day_of_week(epoch_seconds: i64, timezone: &str) -> Result<String> {
    let tz = parse_timezone(timezone)?;
    Ok(in_zone(epoch_seconds, &tz)?.format(DAY_OF_WEEK).to_string())
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| ForecastError::UnknownTimezone(name.to_string()))
}

fn hour_label_in<Z: TimeZone>(epoch_seconds: i64, zone: &Z) -> Result<String>
where
    Z::Offset: std::fmt::Display,
{
    Ok(in_zone(epoch_seconds, zone)?.format(HOUR_LABEL).to_string())
}

fn in_zone<Z: TimeZone>(epoch_seconds: i64, zone: &Z) -> Result<DateTime<Z>> {
    DateTime::<Utc>::from_timestamp(epoch_seconds, 0)
        .map(|utc| utc.with_timezone(zone))
        .ok_or_else(|| {
            ForecastError::MalformedPayload(format!("timestamp {epoch_seconds} is out of range"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2015-08-10T12:00:00-07:00 (19:00 UTC)
    const NOON_LA: i64 = 1_439_233_200;
    // 2015-08-10T18:00:00Z
    const ELEVEN_AM_LA: i64 = 1_439_229_600;

    #[test]
    fn temperature_rounds_to_nearest() {
        assert_eq!(rounded_temperature(98.6), 99);
        assert_eq!(rounded_temperature(98.4), 98);
        assert_eq!(rounded_temperature(72.5), 73);
        assert_eq!(rounded_temperature(0.0), 0);
    }

    #[test]
    fn precip_is_whole_percent() {
        assert_eq!(precip_percent(0.73), 73);
        assert_eq!(precip_percent(0.0), 0);
        assert_eq!(precip_percent(1.0), 100);
        assert_eq!(precip_percent(0.005), 1);
    }

    #[test]
    fn clock_time_uses_forecast_timezone() {
        assert_eq!(formatted_clock_time(NOON_LA, "America/Los_Angeles").unwrap(), "12:00 PM");
        assert_eq!(formatted_clock_time(NOON_LA, "America/New_York").unwrap(), "3:00 PM");
        assert_eq!(formatted_clock_time(NOON_LA, "UTC").unwrap(), "7:00 PM");
    }

    #[test]
    fn clock_time_one_hour_before_noon() {
        assert_eq!(formatted_clock_time(ELEVEN_AM_LA, "America/Los_Angeles").unwrap(), "11:00 AM");
        assert_eq!(formatted_clock_time(ELEVEN_AM_LA, "UTC").unwrap(), "6:00 PM");
        assert_eq!(formatted_day_of_week(ELEVEN_AM_LA, "America/Los_Angeles").unwrap(), "Monday");
    }

    #[test]
    fn day_of_week_uses_forecast_timezone() {
        assert_eq!(formatted_day_of_week(NOON_LA, "America/Los_Angeles").unwrap(), "Monday");
        // 2015-08-10T21:00 LA is already Tuesday in Tokyo
        assert_eq!(formatted_day_of_week(NOON_LA + 9 * 3600, "Asia/Tokyo").unwrap(), "Tuesday");
    }

    #[test]
    fn unknown_timezone_is_reported() {
        let err = formatted_clock_time(NOON_LA, "Mars/Phobos").unwrap_err();
        assert_eq!(err, ForecastError::UnknownTimezone("Mars/Phobos".into()));

        let err = formatted_day_of_week(NOON_LA, "").unwrap_err();
        assert!(matches!(err, ForecastError::UnknownTimezone(_)));
    }

    #[test]
    fn hour_label_has_no_minutes() {
        assert_eq!(hour_label_in(NOON_LA, &Utc).unwrap(), "7 PM");
        assert_eq!(hour_label_in(NOON_LA - 19 * 3600, &Utc).unwrap(), "12 AM");
        assert_eq!(hour_label_in(ELEVEN_AM_LA, &Utc).unwrap(), "6 PM");

        let local = formatted_hour_label(NOON_LA).unwrap();
        assert!(!local.contains(':'));
        assert!(local.ends_with(" AM") || local.ends_with(" PM"), "{local}");
    }

    #[test]
    fn out_of_range_timestamp_is_malformed() {
        let err = formatted_clock_time(i64::MAX, "UTC").unwrap_err();
        assert!(matches!(err, ForecastError::MalformedPayload(_)));
    }
}
