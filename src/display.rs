// 🖥️ Display Layer - raw configuration values → display strings
//
// Query results and saved options arrive as loose JSON. Anything that is not
// a finite number renders as the placeholder instead of failing.

use serde_json::Value;

use crate::decimals::decimals_for_value;
use crate::error::{Error, Result};
use crate::numeric::{DecimalCount, PLACEHOLDER};
use crate::registry::FormatRegistry;

/// Numbers pass through, numeric strings are parsed after trimming,
/// everything else (null, bool, arrays, objects, junk text) is `None`.
pub fn parse_value(raw: &Value) -> Option<f64> {
    let value = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    value.is_finite().then_some(value)
}

/// Format a raw value with the format `id`.
///
/// Without explicit decimals the precision is derived from the value
/// itself. Unknown ids are an error; unusable values are not.
pub fn display_value(
    registry: &FormatRegistry,
    id: &str,
    raw: &Value,
    decimals: DecimalCount,
) -> Result<String> {
    // resolve first so a bad id is reported even for a bad value
    let descriptor = registry
        .get(id)
        .ok_or_else(|| Error::UnknownFormat(id.to_string()))?;

    let Some(value) = parse_value(raw) else {
        tracing::debug!(id, raw = %raw, "unformattable value");
        return Ok(PLACEHOLDER.to_string());
    };

    let info = decimals_for_value(value, decimals);
    Ok(descriptor.format(value, info.decimals, info.scaled_decimals))
}

/// `display_value` over text input (CLI arguments, CSV cells).
pub fn display_text(
    registry: &FormatRegistry,
    id: &str,
    raw: &str,
    decimals: DecimalCount,
) -> Result<String> {
    display_value(registry, id, &Value::String(raw.to_string()), decimals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(&json!(1.5)), Some(1.5));
        assert_eq!(parse_value(&json!(" 42 ")), Some(42.0));
        assert_eq!(parse_value(&json!("1e3")), Some(1000.0));
        assert_eq!(parse_value(&json!(null)), None);
        assert_eq!(parse_value(&json!(true)), None);
        assert_eq!(parse_value(&json!("twelve")), None);
        assert_eq!(parse_value(&json!("NaN")), None);
        assert_eq!(parse_value(&json!([1, 2])), None);
    }

    #[test]
    fn test_display_placeholder_for_bad_input() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(display_value(&registry, "bytes", &json!(null), None).unwrap(), PLACEHOLDER);
        assert_eq!(display_text(&registry, "bytes", "n/a", Some(2)).unwrap(), PLACEHOLDER);
    }

    #[test]
    fn test_display_unknown_id_wins() {
        let registry = FormatRegistry::with_defaults();
        let err = display_value(&registry, "parsecs", &json!(null), None).unwrap_err();
        assert!(matches!(err, Error::UnknownFormat(_)));
    }

    #[test]
    fn test_display_auto_decimals() {
        let registry = FormatRegistry::with_defaults();
        // 1234 → 0 decimals, scaled -1 + 3 = 2 after one step
        assert_eq!(display_value(&registry, "short", &json!(1234), None).unwrap(), "1.23 K");
        assert_eq!(display_value(&registry, "percent", &json!(2.5), None).unwrap(), "2.5%");
    }

    #[test]
    fn test_display_explicit_decimals() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(display_text(&registry, "short", "1234", Some(1)).unwrap(), "1.2 K");
        assert_eq!(display_text(&registry, "ms", "1500", Some(1)).unwrap(), "1.5 s");
    }
}
