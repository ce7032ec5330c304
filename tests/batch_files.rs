// Batch formatting against files on disk

use std::fs::{self, File};
use std::io::{BufReader, Write};

use value_formats::{default_registry, format_csv, AppConfig, BatchOptions};

#[test]
fn test_batch_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");

    let mut file = File::create(&input).unwrap();
    writeln!(file, "unit,value").unwrap();
    writeln!(file, "decbytes,1500").unwrap();
    writeln!(file, "percent,").unwrap();
    drop(file);

    let reader = BufReader::new(File::open(&input).unwrap());
    let writer = File::create(&output).unwrap();
    let options = BatchOptions { decimals: Some(1), ..BatchOptions::default() };
    let summary = format_csv(default_registry(), reader, writer, &options).unwrap();

    assert_eq!(summary.rows, 2);
    assert_eq!(summary.placeholders, 1);
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "unit,value,formatted\ndecbytes,1500,1.5 kB\npercent,,NA\n");
}

#[test]
fn test_config_decimals_feed_batch() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display]\ndecimals = 0").unwrap();
    let config = AppConfig::load(Some(file.path())).unwrap();

    let options = BatchOptions { decimals: config.display.decimals, ..BatchOptions::default() };
    let mut out = Vec::new();
    format_csv(default_registry(), "unit,value\nbytes,3072\n".as_bytes(), &mut out, &options).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "unit,value,formatted\nbytes,3072,3 KiB\n");
}
