// 📏 Symbol Layer - SI / IEC prefix ladders
// Builds the suffix lists that `numeric::scaled_units` walks through.

/// Decimal SI prefixes from nano up to yotta; index 3 is the bare unit.
const DECIMAL_PREFIXES: [&str; 12] = ["n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y"];

/// Binary (IEC) prefixes; index 0 is the bare unit.
const BINARY_PREFIXES: [&str; 9] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi", "Yi"];

/// Step between decimal SI prefixes.
pub const DECIMAL_FACTOR: f64 = 1000.0;

/// Step between IEC prefixes.
pub const BINARY_FACTOR: f64 = 1024.0;

/// Suffixes `" " + prefix + unit` for decimal SI scaling.
///
/// `offset` shifts the starting prefix: `1` means the input is already in
/// kilo-units, `-1` means milli-units. Offsets outside the prefix table are
/// clamped to its ends.
pub fn decimal_si_suffixes(unit: &str, offset: i32) -> Vec<String> {
    let start = (3 + offset).clamp(0, DECIMAL_PREFIXES.len() as i32 - 1) as usize;
    DECIMAL_PREFIXES[start..]
        .iter()
        .map(|prefix| format!(" {}{}", prefix, unit))
        .collect()
}

/// Suffixes `" " + prefix + unit` for IEC binary scaling.
pub fn binary_si_suffixes(unit: &str, offset: i32) -> Vec<String> {
    let start = offset.clamp(0, BINARY_PREFIXES.len() as i32 - 1) as usize;
    BINARY_PREFIXES[start..]
        .iter()
        .map(|prefix| format!(" {}{}", prefix, unit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::scaled_units;

    #[test]
    fn test_decimal_suffixes_follow_offset() {
        let base = decimal_si_suffixes("W", 0);
        assert_eq!(base[0], " W");
        assert_eq!(base[1], " kW");

        let milli = decimal_si_suffixes("W", -1);
        assert_eq!(milli[0], " mW");
        assert_eq!(milli[1], " W");

        let kilo = decimal_si_suffixes("B", 1);
        assert_eq!(kilo[0], " kB");
    }

    #[test]
    fn test_binary_suffixes_follow_offset() {
        let bytes = binary_si_suffixes("B", 0);
        assert_eq!(bytes.len(), 9);
        assert_eq!(bytes[1], " KiB");

        let gib = binary_si_suffixes("B", 3);
        assert_eq!(gib[0], " GiB");
    }

    #[test]
    fn test_offsets_clamped() {
        assert_eq!(decimal_si_suffixes("g", -10)[0], " ng");
        assert_eq!(binary_si_suffixes("B", 42), vec![" YiB".to_string()]);
    }

    #[test]
    fn test_binary_scaling_threshold() {
        let suffixes = binary_si_suffixes("B", 0);
        assert_eq!(scaled_units(1023.0, None, None, BINARY_FACTOR, &suffixes), "1023 B");
        assert_eq!(scaled_units(1024.0, None, None, BINARY_FACTOR, &suffixes), "1 KiB");
        assert_eq!(
            scaled_units(1536.0 * 1024.0, Some(1), None, BINARY_FACTOR, &suffixes),
            "1.5 MiB"
        );
    }
}
