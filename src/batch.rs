// 📥 Batch Formatting - CSV in, CSV out with a formatted column
//
// Each row names its unit (a format id) and value. The output keeps every
// input column and appends the rendered text.

use std::io::{Read, Write};

use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;

use crate::display::display_text;
use crate::error::{Error, Result};
use crate::numeric::{DecimalCount, PLACEHOLDER};
use crate::registry::FormatRegistry;

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub unit_column: String,
    pub value_column: String,
    /// Name of the appended column
    pub output_column: String,
    pub decimals: DecimalCount,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            unit_column: "unit".to_string(),
            value_column: "value".to_string(),
            output_column: "formatted".to_string(),
            decimals: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub rows: usize,
    /// Rows whose unit is not a registered id
    pub unknown_units: usize,
    /// Rows whose value rendered as the placeholder
    pub placeholders: usize,
}

/// Stream `input` to `output`, appending the formatted column.
pub fn format_csv<R: Read, W: Write>(
    registry: &FormatRegistry,
    input: R,
    output: W,
    options: &BatchOptions,
) -> Result<BatchSummary> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    let mut writer = WriterBuilder::new().from_writer(output);

    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| Error::Config(format!("CSV has no '{}' column", name)))
    };
    let unit_idx = column(&options.unit_column)?;
    let value_idx = column(&options.value_column)?;

    let mut out_headers = headers.clone();
    out_headers.push_field(&options.output_column);
    writer.write_record(&out_headers)?;

    let mut summary = BatchSummary::default();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        summary.rows += 1;

        let unit = record.get(unit_idx).unwrap_or_default().trim();
        let raw = record.get(value_idx).unwrap_or_default();

        let text = match display_text(registry, unit, raw, options.decimals) {
            Ok(text) => text,
            Err(Error::UnknownFormat(id)) => {
                tracing::warn!(line = line + 2, unit = %id, "unknown unit in batch input");
                summary.unknown_units += 1;
                PLACEHOLDER.to_string()
            }
            Err(e) => return Err(e),
        };
        if text == PLACEHOLDER {
            summary.placeholders += 1;
        }

        let mut out = record.clone();
        out.push_field(&text);
        writer.write_record(&out)?;
    }

    writer.flush()?;
    tracing::info!(
        rows = summary.rows,
        unknown_units = summary.unknown_units,
        placeholders = summary.placeholders,
        "batch formatting complete"
    );
    Ok(summary)
}
