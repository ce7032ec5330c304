// ➗ Arithmetic Formatters - percent, hexadecimal, scientific

use crate::numeric::{exponent_repr, to_fixed, DecimalCount, PLACEHOLDER};

/// Value already on a 0-100 scale.
pub fn to_percent(value: f64, decimals: DecimalCount) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{}%", to_fixed(value, decimals))
}

/// Value on a 0.0-1.0 scale.
pub fn to_percent_unit(value: f64, decimals: DecimalCount) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{}%", to_fixed(100.0 * value, decimals))
}

/// Uppercase base-16 rendering of the rounded value.
pub fn to_hex(value: f64, decimals: DecimalCount) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let rounded = to_fixed(value, decimals).parse::<f64>().unwrap_or(value);
    radix16(rounded).to_uppercase()
}

/// `to_hex` with a `0x` marker; the sign stays in front (`-0x1F`).
pub fn to_hex_0x(value: f64, decimals: DecimalCount) -> String {
    let hex = to_hex(value, decimals);
    if hex == PLACEHOLDER {
        return hex;
    }
    match hex.strip_prefix('-') {
        Some(rest) => format!("-0x{}", rest),
        None => format!("0x{}", hex),
    }
}

/// Exponent notation (`1.23e+4`). Without decimals the shortest mantissa
/// is used.
pub fn sci(value: f64, decimals: DecimalCount) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    // -0 prints like 0
    let value = if value == 0.0 { 0.0 } else { value };
    let raw = match decimals {
        Some(d) => format!("{:.*e}", d.clamp(0, 100) as usize, value),
        None => format!("{:e}", value),
    };
    exponent_repr(&raw)
}

/// Base-16 digits of a finite value.
///
/// Fraction digits stop once the value is uniquely identified among its
/// neighbouring floats, rounding the last digit (`0.1` → `0.1999999999999a`).
fn radix16(value: f64) -> String {
    let negative = value < 0.0;
    let abs = value.abs();
    let mut int_part = abs.trunc();
    let mut fraction = abs - int_part;

    let next_up = f64::from_bits(abs.to_bits() + 1);
    let mut delta = (0.5 * (next_up - abs)).max(f64::from_bits(1));

    let mut frac_digits: Vec<u32> = Vec::new();
    if fraction >= delta {
        loop {
            fraction *= 16.0;
            delta *= 16.0;
            let digit = fraction.trunc();
            frac_digits.push(digit as u32);
            fraction -= digit;

            let past_half = fraction > 0.5 || (fraction == 0.5 && (digit as u32) & 1 == 1);
            if past_half && fraction + delta > 1.0 {
                // round up; a run of trailing f carries into the integer part
                loop {
                    match frac_digits.pop() {
                        Some(d) if d + 1 < 16 => {
                            frac_digits.push(d + 1);
                            break;
                        }
                        Some(_) => {}
                        None => {
                            int_part += 1.0;
                            break;
                        }
                    }
                }
                break;
            }
            if fraction < delta {
                break;
            }
        }
    }

    let mut digits = Vec::new();
    if int_part == 0.0 {
        digits.push('0');
    }
    while int_part >= 1.0 {
        let digit = (int_part % 16.0) as u32;
        digits.push(char::from_digit(digit, 16).unwrap_or('0'));
        int_part = (int_part / 16.0).floor();
    }
    digits.reverse();

    let mut out: String = digits.into_iter().collect();
    if !frac_digits.is_empty() {
        out.push('.');
        out.extend(frac_digits.iter().map(|&d| char::from_digit(d, 16).unwrap_or('0')));
    }

    if negative && out != "0" {
        out.insert(0, '-');
    }
    out
}
