// 🎛️ Value Formatter - one enum variant per formatting strategy
//
// Formats are values, not closures: a descriptor can be compared, cloned and
// printed, and the registry table stays inspectable.

use chrono::{DateTime, Utc};

use crate::arithmetic;
use crate::date_time::{self, DateStyle, Interval, TimeUnit};
use crate::numeric::{self, DecimalCount, PLACEHOLDER};
use crate::symbols;

/// How a number becomes a display string.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueFormatter {
    /// Plain rounded number
    Fixed,
    /// Number, space, fixed unit
    FixedUnit(String),
    /// Magnitude ladder: divide by `factor` per step, append `suffixes[step]`
    Scaled { factor: f64, suffixes: Vec<String> },
    /// Thousands ladder followed by a symbol (`1.5K ops`)
    Count(String),
    /// Symbol followed by thousands ladder (`$1.5K`)
    Currency(String),
    Percent,
    PercentUnit,
    Hex,
    Hex0x,
    Scientific,
    Locale,
    Time(TimeUnit),
    Duration(Interval),
    DurationHms,
    /// Clock rendering of a value in milliseconds (`false`) or seconds (`true`)
    Clock { seconds: bool },
    Date(DateStyle),
}

impl ValueFormatter {
    /// Fixed unit (`toFixedUnit`)
    pub fn fixed_unit(unit: impl Into<String>) -> Self {
        ValueFormatter::FixedUnit(unit.into())
    }

    /// Arbitrary ladder (`scaledUnits`)
    pub fn scaled<S: Into<String>>(factor: f64, suffixes: impl IntoIterator<Item = S>) -> Self {
        ValueFormatter::Scaled {
            factor,
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Decimal SI ladder; `offset` is the prefix the input is already in.
    pub fn decimal_si(unit: &str, offset: i32) -> Self {
        ValueFormatter::Scaled {
            factor: symbols::DECIMAL_FACTOR,
            suffixes: symbols::decimal_si_suffixes(unit, offset),
        }
    }

    /// IEC binary ladder; `offset` is the prefix the input is already in.
    pub fn binary_si(unit: &str, offset: i32) -> Self {
        ValueFormatter::Scaled {
            factor: symbols::BINARY_FACTOR,
            suffixes: symbols::binary_si_suffixes(unit, offset),
        }
    }

    pub fn count(symbol: impl Into<String>) -> Self {
        ValueFormatter::Count(symbol.into())
    }

    pub fn currency(symbol: impl Into<String>) -> Self {
        ValueFormatter::Currency(symbol.into())
    }

    /// Format against the current wall clock.
    pub fn format(&self, value: f64, decimals: DecimalCount, scaled_decimals: DecimalCount) -> String {
        self.format_at(value, decimals, scaled_decimals, Utc::now())
    }

    /// Format with an explicit "now" for the date renderings.
    ///
    /// Total over `f64`: non-finite input yields the placeholder and every
    /// result is non-empty.
    pub fn format_at(
        &self,
        value: f64,
        decimals: DecimalCount,
        scaled_decimals: DecimalCount,
        now: DateTime<Utc>,
    ) -> String {
        if !value.is_finite() {
            return PLACEHOLDER.to_string();
        }

        match self {
            ValueFormatter::Fixed => numeric::to_fixed(value, decimals),
            ValueFormatter::FixedUnit(unit) => numeric::to_fixed_unit(value, decimals, unit),
            ValueFormatter::Scaled { factor, suffixes } => {
                numeric::scaled_units(value, decimals, scaled_decimals, *factor, suffixes)
            }
            ValueFormatter::Count(symbol) => {
                numeric::simple_count_unit(value, decimals, scaled_decimals, symbol)
            }
            ValueFormatter::Currency(symbol) => {
                numeric::currency(value, decimals, scaled_decimals, symbol)
            }
            ValueFormatter::Percent => arithmetic::to_percent(value, decimals),
            ValueFormatter::PercentUnit => arithmetic::to_percent_unit(value, decimals),
            ValueFormatter::Hex => arithmetic::to_hex(value, decimals),
            ValueFormatter::Hex0x => arithmetic::to_hex_0x(value, decimals),
            ValueFormatter::Scientific => arithmetic::sci(value, decimals),
            ValueFormatter::Locale => numeric::locale(value, decimals),
            ValueFormatter::Time(unit) => {
                date_time::format_time(*unit, value, decimals, scaled_decimals)
            }
            ValueFormatter::Duration(interval) => date_time::to_duration(value, decimals, *interval),
            ValueFormatter::DurationHms => date_time::to_duration_hms(value),
            ValueFormatter::Clock { seconds: false } => date_time::to_clock(value, decimals),
            ValueFormatter::Clock { seconds: true } => date_time::to_clock(value * 1000.0, decimals),
            ValueFormatter::Date(style) => date_time::format_date_at(*style, value, now),
        }
    }

    /// Short label for listings (`scaled`, `time`, ...).
    pub fn kind(&self) -> &'static str {
        match self {
            ValueFormatter::Fixed => "fixed",
            ValueFormatter::FixedUnit(_) => "fixed_unit",
            ValueFormatter::Scaled { .. } => "scaled",
            ValueFormatter::Count(_) => "count",
            ValueFormatter::Currency(_) => "currency",
            ValueFormatter::Percent | ValueFormatter::PercentUnit => "percent",
            ValueFormatter::Hex | ValueFormatter::Hex0x => "hex",
            ValueFormatter::Scientific => "scientific",
            ValueFormatter::Locale => "locale",
            ValueFormatter::Time(_) => "time",
            ValueFormatter::Duration(_) | ValueFormatter::DurationHms => "duration",
            ValueFormatter::Clock { .. } => "clock",
            ValueFormatter::Date(_) => "date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_si_milli_offset() {
        let mw = ValueFormatter::decimal_si("W", -1);
        assert_eq!(mw.format(500.0, None, None), "500 mW");
        assert_eq!(mw.format(1500.0, Some(1), None), "1.5 W");
    }

    #[test]
    fn test_binary_si_kibibytes() {
        let kbytes = ValueFormatter::binary_si("B", 1);
        assert_eq!(kbytes.format(2048.0, None, None), "2 MiB");
    }

    #[test]
    fn test_clock_seconds_variant() {
        let clock = ValueFormatter::Clock { seconds: true };
        assert_eq!(clock.format(12.5, None, None), "12s:500ms");
    }

    #[test]
    fn test_non_finite_short_circuits() {
        for formatter in [
            ValueFormatter::Fixed,
            ValueFormatter::currency("$"),
            ValueFormatter::Date(DateStyle::Iso),
            ValueFormatter::DurationHms,
        ] {
            assert_eq!(formatter.format(f64::NAN, None, None), PLACEHOLDER);
            assert_eq!(formatter.format(f64::NEG_INFINITY, Some(2), None), PLACEHOLDER);
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ValueFormatter::decimal_si("B", 0).kind(), "scaled");
        assert_eq!(ValueFormatter::Time(TimeUnit::Seconds).kind(), "time");
    }
}
