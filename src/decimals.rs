// 🎯 Auto Decimals - pick a precision when the user did not
//
// Mirrors axis tick sizing: normalise the value, snap to a "nice" step and
// derive how many places that step needs, both before and after scaling.

use serde::Serialize;

use crate::numeric::{DecimalCount, MAX_DECIMALS};

/// Decimal places for the raw value and for its scaled form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecimalInfo {
    pub decimals: DecimalCount,
    pub scaled_decimals: DecimalCount,
}

/// Choose decimals for `value`, or pass an explicit override through
/// (with no scaled count).
pub fn decimals_for_value(value: f64, decimal_override: DecimalCount) -> DecimalInfo {
    if let Some(decimals) = decimal_override {
        return DecimalInfo {
            decimals: Some(decimals),
            scaled_decimals: None,
        };
    }

    let abs = value.abs();
    if abs == 0.0 || !abs.is_finite() {
        return DecimalInfo {
            decimals: Some(0),
            scaled_decimals: Some(0),
        };
    }

    let mut dec = -(abs.log10().floor() as i32) + 1;
    let magn = 10f64.powi(-dec);
    let norm = abs / magn;

    let mut size = if norm < 1.5 {
        1.0
    } else if norm < 3.0 {
        if norm > 2.25 {
            dec += 1;
            2.5
        } else {
            2.0
        }
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    size *= magn;

    // whole numbers need no places
    if abs.fract() == 0.0 {
        dec = 0;
    }

    // subnormal inputs drive both counts far past anything renderable
    let decimals = dec.clamp(0, MAX_DECIMALS);
    let scaled = decimals
        .saturating_sub(size.log10().floor() as i32)
        .saturating_add(2)
        .clamp(-MAX_DECIMALS, MAX_DECIMALS);
    DecimalInfo {
        decimals: Some(decimals),
        scaled_decimals: Some(scaled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_passes_through() {
        let info = decimals_for_value(123.456, Some(1));
        assert_eq!(info.decimals, Some(1));
        assert_eq!(info.scaled_decimals, None);
    }

    #[test]
    fn test_integer_value() {
        let info = decimals_for_value(1234.0, None);
        assert_eq!(info.decimals, Some(0));
        assert_eq!(info.scaled_decimals, Some(-1));
    }

    #[test]
    fn test_fractional_value() {
        let info = decimals_for_value(0.1234, None);
        assert_eq!(info.decimals, Some(2));
        assert_eq!(info.scaled_decimals, Some(5));

        let info = decimals_for_value(2.5, None);
        assert_eq!(info.decimals, Some(1));
        assert_eq!(info.scaled_decimals, Some(3));
    }

    #[test]
    fn test_negative_uses_magnitude() {
        assert_eq!(decimals_for_value(-0.1234, None), decimals_for_value(0.1234, None));
    }

    #[test]
    fn test_zero_and_non_finite() {
        let zero = decimals_for_value(0.0, None);
        assert_eq!(zero.decimals, Some(0));
        assert_eq!(decimals_for_value(f64::NAN, None), zero);
    }
}
