// 🔢 Numeric Layer - fixed-point rendering and magnitude scaling
// Every other formatter bottoms out in `to_fixed` or `scaled_units`.

/// Requested decimal places. `None` means "not specified".
pub type DecimalCount = Option<i32>;

/// Fixed string returned for values that cannot be formatted
/// (non-finite input, unparseable input, magnitudes past the last suffix).
pub const PLACEHOLDER: &str = "NA";

/// Upper bound on honoured decimal places; keeps `10^decimals` finite.
pub const MAX_DECIMALS: i32 = 20;

// ============================================================================
// NUMBER → STRING
// ============================================================================

/// Half-way cases round towards positive infinity (-2.5 → -2, 2.5 → 3).
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Shortest round-trip rendering of a float, switching to exponent form
/// (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`.
pub(crate) fn shortest_repr(value: f64) -> String {
    if value == 0.0 {
        // also folds -0 into "0"
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        return exponent_repr(&format!("{:e}", value));
    }

    format!("{}", value)
}

/// Rewrites Rust exponent output (`1.5e4`) into signed form (`1.5e+4`).
pub(crate) fn exponent_repr(raw: &str) -> String {
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => raw.to_string(),
    }
}

/// Round `value` to `decimals` places and pad with zeros to exactly that
/// many places.
///
/// Without a decimal count the value is rounded to an integer. Zero and
/// exponent-form results are returned unpadded; negative counts round to an
/// integer and never pad.
pub fn to_fixed(value: f64, decimals: DecimalCount) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let decimals = decimals.map(|d| d.min(MAX_DECIMALS));
    let factor = match decimals {
        Some(d) if d > 0 => 10f64.powi(d),
        _ => 1.0,
    };

    let mut rounded = round_half_up(value * factor) / factor;
    if !rounded.is_finite() {
        // value * factor overflowed; at that magnitude rounding is a no-op
        rounded = value;
    }

    // anything that rounds to zero stays unpadded, so "0" re-formats to itself
    let formatted = shortest_repr(rounded);
    if formatted.contains('e') || rounded == 0.0 {
        return formatted;
    }

    if let Some(d) = decimals.filter(|d| *d > 0) {
        let wanted = d as usize;
        let precision = formatted
            .find('.')
            .map(|pos| formatted.len() - pos - 1)
            .unwrap_or(0);

        if precision < wanted {
            let mut padded = formatted;
            if precision == 0 {
                padded.push('.');
            }
            padded.push_str(&"0".repeat(wanted - precision));
            return padded;
        }
    }

    formatted
}

/// `to_fixed` with an extra suffix, preferring the scaled decimal count
/// (plus `additional` places) when one is supplied.
pub fn to_fixed_scaled(
    value: f64,
    decimals: DecimalCount,
    scaled_decimals: DecimalCount,
    additional: i32,
    suffix: &str,
) -> String {
    match scaled_decimals {
        Some(scaled) => format!("{}{}", to_fixed(value, Some(scaled + additional)), suffix),
        None => format!("{}{}", to_fixed(value, decimals), suffix),
    }
}

/// Value followed by a space and a fixed unit (`"21.5 °C"`).
pub fn to_fixed_unit(value: f64, decimals: DecimalCount, unit: &str) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{} {}", to_fixed(value, decimals), unit)
}

// ============================================================================
// MAGNITUDE SCALING
// ============================================================================

/// Divide by `factor` until the magnitude drops below it, picking the suffix
/// for the number of steps taken.
///
/// Promotion happens at the threshold itself: with factor 1000, `1000`
/// becomes `1` with the second suffix while `999.9` stays put. Running past
/// the last suffix yields the placeholder.
pub fn scaled_units<S: AsRef<str>>(
    value: f64,
    decimals: DecimalCount,
    scaled_decimals: DecimalCount,
    factor: f64,
    suffixes: &[S],
) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if suffixes.is_empty() {
        return to_fixed(value, decimals);
    }

    let limit = suffixes.len();
    let mut size = value;
    let mut steps = 0usize;

    while size.abs() >= factor {
        steps += 1;
        size /= factor;
        if steps >= limit {
            return PLACEHOLDER.to_string();
        }
    }

    let step_decimals = |steps: usize| match scaled_decimals {
        Some(scaled) if steps > 0 => Some(scaled + 3 * steps as i32),
        _ => decimals,
    };

    // 999.96 at one decimal rounds to "1000.0"; show it as the next unit
    let mut text = to_fixed(size, step_decimals(steps));
    if text.parse::<f64>().is_ok_and(|rounded| rounded.abs() >= factor) {
        steps += 1;
        if steps >= limit {
            return PLACEHOLDER.to_string();
        }
        size /= factor;
        text = to_fixed(size, step_decimals(steps));
    }

    format!("{}{}", text, suffixes[steps].as_ref())
}

const COUNT_SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Plain count scaled by thousands, then a space and the symbol
/// (`"1.5K ops"`).
pub fn simple_count_unit(
    value: f64,
    decimals: DecimalCount,
    scaled_decimals: DecimalCount,
    symbol: &str,
) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let scaled = scaled_units(value, decimals, scaled_decimals, 1000.0, &COUNT_SUFFIXES);
    format!("{} {}", scaled, symbol)
}

/// Same thousands ladder as counts, with the symbol in front (`"$1.2K"`).
pub fn currency(
    value: f64,
    decimals: DecimalCount,
    scaled_decimals: DecimalCount,
    symbol: &str,
) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let scaled = scaled_units(value, decimals, scaled_decimals, 1000.0, &COUNT_SUFFIXES);
    format!("{}{}", symbol, scaled)
}

// ============================================================================
// LOCALE
// ============================================================================

/// en-US grouped rendering with at most `decimals` fraction digits
/// (three when unspecified), trailing zeros trimmed.
pub fn locale(value: f64, decimals: DecimalCount) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let max_fraction = decimals.unwrap_or(3).clamp(0, MAX_DECIMALS) as usize;
    let factor = 10f64.powi(max_fraction as i32);
    let mut rounded = round_half_up(value.abs() * factor) / factor;
    if !rounded.is_finite() {
        rounded = value.abs();
    }
    // past 2^53 every float is an integer and `{:.N}` would print its exact
    // binary expansion; `{}` gives the shortest digits padded with zeros
    let fixed = if rounded >= 9_007_199_254_740_992.0 {
        format!("{}", rounded)
    } else {
        format!("{:.*}", max_fraction, rounded)
    };

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
