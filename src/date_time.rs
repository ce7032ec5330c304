// ⏱️ Time Formatters - elapsed time, durations, clocks and dates
//
// Three families:
// 1. Ladders: a single value scaled to the best fitting time unit ("1.5 s")
// 2. Durations: humanized multi-unit text ("1 hour, 2 minutes")
// 3. Clock/date: fixed-layout renderings of elapsed or epoch milliseconds

use chrono::{DateTime, Utc};

use crate::numeric::{to_fixed, to_fixed_scaled, DecimalCount, PLACEHOLDER};

// ============================================================================
// UNITS
// ============================================================================

/// Input unit for the time ladders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    /// Hundredths of a second
    TimeTicks,
}

/// Calendar-ish intervals used by the humanized durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Interval {
    /// Largest to smallest
    pub const ALL: [Interval; 8] = [
        Interval::Year,
        Interval::Month,
        Interval::Week,
        Interval::Day,
        Interval::Hour,
        Interval::Minute,
        Interval::Second,
        Interval::Millisecond,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Year => "year",
            Interval::Month => "month",
            Interval::Week => "week",
            Interval::Day => "day",
            Interval::Hour => "hour",
            Interval::Minute => "minute",
            Interval::Second => "second",
            Interval::Millisecond => "millisecond",
        }
    }

    /// Length in seconds (a month is 30 days, a year 365).
    pub fn seconds(&self) -> f64 {
        match self {
            Interval::Year => 31_536_000.0,
            Interval::Month => 2_592_000.0,
            Interval::Week => 604_800.0,
            Interval::Day => 86_400.0,
            Interval::Hour => 3_600.0,
            Interval::Minute => 60.0,
            Interval::Second => 1.0,
            Interval::Millisecond => 0.001,
        }
    }
}

/// Layout for epoch-millisecond values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYY-MM-DD HH:mm:ss`
    Iso,
    /// `MM/DD/YYYY h:mm:ss a`
    Us,
    /// Relative to now (`5 minutes ago`)
    FromNow,
}

// ============================================================================
// LADDERS
// ============================================================================

pub fn to_nanoseconds(size: f64, decimals: DecimalCount, scaled: DecimalCount) -> String {
    let abs = size.abs();
    if abs < 1e3 {
        format!("{} ns", to_fixed(size, decimals))
    } else if abs < 1e6 {
        to_fixed_scaled(size / 1e3, decimals, scaled, 3, " µs")
    } else if abs < 1e9 {
        to_fixed_scaled(size / 1e6, decimals, scaled, 6, " ms")
    } else if abs < 60e9 {
        to_fixed_scaled(size / 1e9, decimals, scaled, 9, " s")
    } else {
        to_fixed_scaled(size / 60e9, decimals, scaled, 12, " min")
    }
}

pub fn to_microseconds(size: f64, decimals: DecimalCount, scaled: DecimalCount) -> String {
    let abs = size.abs();
    if abs < 1e3 {
        format!("{} µs", to_fixed(size, decimals))
    } else if abs < 1e6 {
        to_fixed_scaled(size / 1e3, decimals, scaled, 3, " ms")
    } else {
        to_fixed_scaled(size / 1e6, decimals, scaled, 6, " s")
    }
}

pub fn to_milliseconds(size: f64, decimals: DecimalCount, scaled: DecimalCount) -> String {
    let abs = size.abs();
    if abs < 1_000.0 {
        format!("{} ms", to_fixed(size, decimals))
    } else if abs < 60_000.0 {
        to_fixed_scaled(size / 1_000.0, decimals, scaled, 3, " s")
    } else if abs < 3_600_000.0 {
        to_fixed_scaled(size / 60_000.0, decimals, scaled, 5, " min")
    } else if abs < 86_400_000.0 {
        to_fixed_scaled(size / 3_600_000.0, decimals, scaled, 7, " hour")
    } else if abs < 31_536_000_000.0 {
        to_fixed_scaled(size / 86_400_000.0, decimals, scaled, 8, " day")
    } else {
        to_fixed_scaled(size / 31_536_000_000.0, decimals, scaled, 10, " year")
    }
}

pub fn to_seconds(size: f64, decimals: DecimalCount, scaled: DecimalCount) -> String {
    let abs = size.abs();
    let extra = decimals.unwrap_or(0);

    // sub-second values scale down rather than up
    if size != 0.0 && abs < 1e-6 {
        return to_fixed_scaled(size * 1e9, decimals, scaled, extra, " ns");
    }
    if size != 0.0 && abs < 1e-3 {
        return to_fixed_scaled(size * 1e6, decimals, scaled, extra, " µs");
    }
    if size != 0.0 && abs < 1.0 {
        return to_fixed_scaled(size * 1e3, decimals, scaled, extra, " ms");
    }

    if abs < 60.0 {
        format!("{} s", to_fixed(size, decimals))
    } else if abs < 3_600.0 {
        to_fixed_scaled(size / 60.0, decimals, scaled, 1, " min")
    } else if abs < 86_400.0 {
        to_fixed_scaled(size / 3_600.0, decimals, scaled, 4, " hour")
    } else if abs < 604_800.0 {
        to_fixed_scaled(size / 86_400.0, decimals, scaled, 5, " day")
    } else if abs < 31_536_000.0 {
        to_fixed_scaled(size / 604_800.0, decimals, scaled, 6, " week")
    } else {
        to_fixed_scaled(size / 3.15569e7, decimals, scaled, 7, " year")
    }
}

pub fn to_minutes(size: f64, decimals: DecimalCount, scaled: DecimalCount) -> String {
    let abs = size.abs();
    if abs < 60.0 {
        format!("{} min", to_fixed(size, decimals))
    } else if abs < 1_440.0 {
        to_fixed_scaled(size / 60.0, decimals, scaled, 2, " hour")
    } else if abs < 10_080.0 {
        to_fixed_scaled(size / 1_440.0, decimals, scaled, 3, " day")
    } else if abs < 604_800.0 {
        to_fixed_scaled(size / 10_080.0, decimals, scaled, 4, " week")
    } else {
        to_fixed_scaled(size / 5.25948e5, decimals, scaled, 5, " year")
    }
}

pub fn to_hours(size: f64, decimals: DecimalCount, scaled: DecimalCount) -> String {
    let abs = size.abs();
    if abs < 24.0 {
        format!("{} hour", to_fixed(size, decimals))
    } else if abs < 168.0 {
        to_fixed_scaled(size / 24.0, decimals, scaled, 5, " day")
    } else if abs < 8_760.0 {
        to_fixed_scaled(size / 168.0, decimals, scaled, 6, " week")
    } else {
        to_fixed_scaled(size / 8_760.0, decimals, scaled, 7, " year")
    }
}

pub fn to_days(size: f64, decimals: DecimalCount, scaled: DecimalCount) -> String {
    let abs = size.abs();
    if abs < 7.0 {
        format!("{} day", to_fixed(size, decimals))
    } else if abs < 365.0 {
        to_fixed_scaled(size / 7.0, decimals, scaled, 1, " week")
    } else {
        to_fixed_scaled(size / 365.0, decimals, scaled, 2, " year")
    }
}

/// Hundredths of a second, rendered through the seconds ladder.
pub fn to_time_ticks(size: f64, decimals: DecimalCount, scaled: DecimalCount) -> String {
    to_seconds(size / 100.0, decimals, scaled)
}

/// Dispatch a ladder by input unit.
pub fn format_time(unit: TimeUnit, size: f64, decimals: DecimalCount, scaled: DecimalCount) -> String {
    if !size.is_finite() {
        return PLACEHOLDER.to_string();
    }
    match unit {
        TimeUnit::Nanoseconds => to_nanoseconds(size, decimals, scaled),
        TimeUnit::Microseconds => to_microseconds(size, decimals, scaled),
        TimeUnit::Milliseconds => to_milliseconds(size, decimals, scaled),
        TimeUnit::Seconds => to_seconds(size, decimals, scaled),
        TimeUnit::Minutes => to_minutes(size, decimals, scaled),
        TimeUnit::Hours => to_hours(size, decimals, scaled),
        TimeUnit::Days => to_days(size, decimals, scaled),
        TimeUnit::TimeTicks => to_time_ticks(size, decimals, scaled),
    }
}

// ============================================================================
// HUMANIZED DURATIONS
// ============================================================================

/// Multi-unit rendering such as `"2 days, 3 hours"`.
///
/// The first non-zero unit is always printed, followed by `decimals` more
/// units (zero when unspecified). Negative values get an ` ago` suffix.
pub fn to_duration(size: f64, decimals: DecimalCount, time_scale: Interval) -> String {
    if !size.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if size == 0.0 {
        return format!("0 {}s", time_scale.as_str());
    }
    if size < 0.0 {
        return format!("{} ago", to_duration(-size, decimals, time_scale));
    }

    let mut remaining = size * time_scale.seconds() * 1000.0;
    if !remaining.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let mut budget = decimals.unwrap_or(0);
    let mut started = false;
    let mut parts = Vec::new();

    for interval in Interval::ALL {
        if budget < 0 {
            break;
        }
        let interval_ms = interval.seconds() * 1000.0;
        let value = remaining / interval_ms;
        if value >= 1.0 || started {
            started = true;
            let whole = value.floor();
            let plural = if whole == 1.0 { "" } else { "s" };
            parts.push(format!("{} {}{}", whole, interval.as_str(), plural));
            remaining %= interval_ms;
            budget -= 1;
        }
    }

    if parts.is_empty() {
        // below one millisecond
        return format!("0 {}s", Interval::Millisecond.as_str());
    }
    parts.join(", ")
}

/// `hh:mm:ss` for a number of seconds.
pub fn to_duration_hms(size: f64) -> String {
    if !size.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if size < 0.0 {
        let magnitude = to_duration_hms(-size);
        if magnitude == PLACEHOLDER {
            return magnitude;
        }
        return format!("{} ago", magnitude);
    }

    let hours = (size / 3_600.0).floor();
    if hours >= u64::MAX as f64 {
        return PLACEHOLDER.to_string();
    }
    let minutes = ((size % 3_600.0) / 60.0).floor();
    let seconds = (size % 60.0).floor();

    format!("{:02}:{:02}:{:02}", hours as u64, minutes as u64, seconds as u64)
}

// ============================================================================
// CLOCK
// ============================================================================

/// Elapsed milliseconds as clock components (`01h:02m:03s:004ms`).
///
/// `decimals` trims the trailing components; unspecified keeps them all.
/// Negative values are rendered from their magnitude with a leading `-`.
pub fn to_clock(size_ms: f64, decimals: DecimalCount) -> String {
    if !size_ms.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if size_ms < 0.0 {
        let magnitude = to_clock(-size_ms, decimals);
        if magnitude == PLACEHOLDER {
            return magnitude;
        }
        return format!("-{}", magnitude);
    }

    // the millisecond count itself must fit
    if size_ms >= u64::MAX as f64 {
        return PLACEHOLDER.to_string();
    }
    let total = size_ms.trunc() as u64;
    let millis = total % 1_000;
    let seconds = (total / 1_000) % 60;
    let minutes = (total / 60_000) % 60;
    let hours = total / 3_600_000;

    if total < 1_000 {
        return format!("{:03}ms", millis);
    }

    if total < 60_000 {
        return match decimals {
            Some(0) => format!("{:02}s", seconds),
            _ => format!("{:02}s:{:03}ms", seconds, millis),
        };
    }

    if total < 3_600_000 {
        return match decimals {
            Some(0) => format!("{:02}m", minutes),
            Some(1) => format!("{:02}m:{:02}s", minutes, seconds),
            _ => format!("{:02}m:{:02}s:{:03}ms", minutes, seconds, millis),
        };
    }

    let hours = format!("{:02}h", hours);
    match decimals {
        Some(0) => hours,
        Some(1) => format!("{}:{:02}m", hours, minutes),
        Some(2) => format!("{}:{:02}m:{:02}s", hours, minutes, seconds),
        _ => format!("{}:{:02}m:{:02}s:{:03}ms", hours, minutes, seconds, millis),
    }
}

// ============================================================================
// DATES
// ============================================================================

/// Render epoch milliseconds in UTC relative to `now`.
pub fn format_date_at(style: DateStyle, epoch_ms: f64, now: DateTime<Utc>) -> String {
    if !epoch_ms.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let Some(time) = DateTime::<Utc>::from_timestamp_millis(epoch_ms.trunc() as i64) else {
        return PLACEHOLDER.to_string();
    };

    let same_day = time.date_naive() == now.date_naive();
    match style {
        DateStyle::Iso if same_day => time.format("%H:%M:%S").to_string(),
        DateStyle::Iso => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        DateStyle::Us if same_day => time.format("%-I:%M:%S %P").to_string(),
        DateStyle::Us => time.format("%m/%d/%Y %-I:%M:%S %P").to_string(),
        DateStyle::FromNow => from_now(time, now),
    }
}

/// Humanized distance between `time` and `now` (`in 3 hours`, `a day ago`).
pub fn from_now(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta_ms = (time - now).num_milliseconds() as f64;
    let future = delta_ms > 0.0;

    let secs = delta_ms.abs() / 1_000.0;
    let seconds = secs.round();
    let minutes = (secs / 60.0).round();
    let hours = (secs / 3_600.0).round();
    let days = (secs / 86_400.0).round();
    let months = (secs / 86_400.0 / 30.436875).round();
    let years = (secs / 86_400.0 / 365.2425).round();

    let text = if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes)
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", hours)
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", days)
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{} months", months)
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    };

    if future {
        format!("in {}", text)
    } else {
        format!("{} ago", text)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_milliseconds_ladder() {
        assert_eq!(to_milliseconds(500.0, None, None), "500 ms");
        assert_eq!(to_milliseconds(1500.0, Some(1), None), "1.5 s");
        assert_eq!(to_milliseconds(90_000.0, Some(1), None), "1.5 min");
        assert_eq!(to_milliseconds(7_200_000.0, None, None), "2 hour");
        assert_eq!(to_milliseconds(172_800_000.0, None, None), "2 day");
        assert_eq!(to_milliseconds(63_072_000_000.0, None, None), "2 year");
    }

    #[test]
    fn test_seconds_ladder_scales_down() {
        assert_eq!(to_seconds(0.5, None, None), "500 ms");
        assert_eq!(to_seconds(0.0005, None, None), "500 µs");
        assert_eq!(to_seconds(5e-7, None, None), "500 ns");
        assert_eq!(to_seconds(0.0, None, None), "0 s");
        assert_eq!(to_seconds(30.0, None, None), "30 s");
        assert_eq!(to_seconds(120.0, None, None), "2 min");
        assert_eq!(to_seconds(-7_200.0, None, None), "-2 hour");
    }

    #[test]
    fn test_nano_and_micro_ladders() {
        assert_eq!(to_nanoseconds(999.0, None, None), "999 ns");
        assert_eq!(to_nanoseconds(1_000.0, None, None), "1 µs");
        assert_eq!(to_nanoseconds(120e9, None, None), "2 min");
        assert_eq!(to_microseconds(2_500.0, Some(1), None), "2.5 ms");
        assert_eq!(to_microseconds(3e6, None, None), "3 s");
    }

    #[test]
    fn test_coarse_ladders() {
        assert_eq!(to_minutes(30.0, None, None), "30 min");
        assert_eq!(to_minutes(90.0, Some(1), None), "1.5 hour");
        assert_eq!(to_hours(48.0, None, None), "2 day");
        assert_eq!(to_days(14.0, None, None), "2 week");
        assert_eq!(to_days(730.0, None, None), "2 year");
    }

    #[test]
    fn test_time_ticks() {
        assert_eq!(to_time_ticks(12_000.0, None, None), "2 min");
        assert_eq!(format_time(TimeUnit::TimeTicks, f64::NAN, None, None), PLACEHOLDER);
    }

    #[test]
    fn test_duration_humanized() {
        assert_eq!(to_duration(3_720.0, Some(1), Interval::Second), "1 hour, 2 minutes");
        assert_eq!(to_duration(3_720.0, Some(0), Interval::Second), "1 hour");
        assert_eq!(to_duration(1.0, None, Interval::Second), "1 second");
        assert_eq!(to_duration(2_500.0, Some(1), Interval::Millisecond), "2 seconds, 500 milliseconds");
    }

    #[test]
    fn test_duration_edge_cases() {
        assert_eq!(to_duration(0.0, None, Interval::Second), "0 seconds");
        assert_eq!(to_duration(-60.0, None, Interval::Second), "1 minute ago");
        assert_eq!(to_duration(0.1, None, Interval::Millisecond), "0 milliseconds");
        assert_eq!(to_duration(f64::INFINITY, None, Interval::Second), PLACEHOLDER);
    }

    #[test]
    fn test_duration_hms() {
        assert_eq!(to_duration_hms(3_723.0), "01:02:03");
        assert_eq!(to_duration_hms(0.0), "00:00:00");
        assert_eq!(to_duration_hms(36_000.0), "10:00:00");
        assert_eq!(to_duration_hms(-61.0), "00:01:01 ago");
    }

    #[test]
    fn test_duration_hms_overflow_is_placeholder() {
        assert_eq!(to_duration_hms(1e30), PLACEHOLDER);
        assert_eq!(to_duration_hms(-1e30), PLACEHOLDER);
        // largest hour count that still fits
        assert!(to_duration_hms(6.0e22).starts_with("16666666666666666"));
    }

    #[test]
    fn test_clock() {
        assert_eq!(to_clock(42.0, None), "042ms");
        assert_eq!(to_clock(12_345.0, None), "12s:345ms");
        assert_eq!(to_clock(12_345.0, Some(0)), "12s");
        assert_eq!(to_clock(125_000.0, Some(1)), "02m:05s");
        assert_eq!(to_clock(3_723_004.0, None), "01h:02m:03s:004ms");
        assert_eq!(to_clock(3_723_004.0, Some(0)), "01h");
        assert_eq!(to_clock(3_723_004.0, Some(2)), "01h:02m:03s");
        assert_eq!(to_clock(-42.0, None), "-042ms");
    }

    #[test]
    fn test_clock_keeps_hours_past_99() {
        // 100 hours
        assert_eq!(to_clock(360_000_000.0, Some(0)), "100h");
    }

    #[test]
    fn test_clock_overflow_is_placeholder() {
        assert_eq!(to_clock(1e30, None), PLACEHOLDER);
        assert_eq!(to_clock(u64::MAX as f64, Some(0)), PLACEHOLDER);
        assert_eq!(to_clock(-1e30, None), PLACEHOLDER);
        assert_eq!(to_clock(1.8e19, Some(0)), "5000000000000h");
    }

    #[test]
    fn test_date_iso_and_us() {
        let now = fixed_now();
        let earlier_today = Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 7).unwrap();
        let last_year = Utc.with_ymd_and_hms(2023, 12, 1, 15, 4, 5).unwrap();

        let today_ms = earlier_today.timestamp_millis() as f64;
        let old_ms = last_year.timestamp_millis() as f64;

        assert_eq!(format_date_at(DateStyle::Iso, today_ms, now), "09:05:07");
        assert_eq!(format_date_at(DateStyle::Iso, old_ms, now), "2023-12-01 15:04:05");
        assert_eq!(format_date_at(DateStyle::Us, today_ms, now), "9:05:07 am");
        assert_eq!(format_date_at(DateStyle::Us, old_ms, now), "12/01/2023 3:04:05 pm");
    }

    #[test]
    fn test_date_out_of_range() {
        assert_eq!(format_date_at(DateStyle::Iso, 1e300, fixed_now()), PLACEHOLDER);
        assert_eq!(format_date_at(DateStyle::Iso, f64::NAN, fixed_now()), PLACEHOLDER);
    }

    #[test]
    fn test_from_now() {
        let now = fixed_now();
        let ms = |secs: i64| (now.timestamp_millis() + secs * 1_000) as f64;

        assert_eq!(format_date_at(DateStyle::FromNow, ms(-10), now), "a few seconds ago");
        assert_eq!(format_date_at(DateStyle::FromNow, ms(-300), now), "5 minutes ago");
        assert_eq!(format_date_at(DateStyle::FromNow, ms(3 * 3_600), now), "in 3 hours");
        assert_eq!(format_date_at(DateStyle::FromNow, ms(-86_400), now), "a day ago");
        assert_eq!(format_date_at(DateStyle::FromNow, ms(-10 * 86_400), now), "10 days ago");
        assert_eq!(format_date_at(DateStyle::FromNow, ms(-3 * 365 * 86_400), now), "3 years ago");
    }
}
