//! Renders resampled records for display or further storage. The core imposes
//! no format; these are the two the command-line tool offers.

use std::io::{self, Write};

use crate::common::types::ResampledRecord;
use crate::error::{ResampleError, ResampleResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn write_failed(e: io::Error) -> ResampleError {
    ResampleError::General(format!("write failed: {e}"))
}

/// Writes an aligned `Date  Type  Value` text table.
pub fn write_table<W: Write>(w: &mut W, records: &[ResampledRecord]) -> ResampleResult<()> {
    let kind_width = records
        .iter()
        .map(|r| r.kind.len())
        .chain(["Type".len()])
        .max()
        .unwrap_or_default();

    writeln!(w, "{:<19}  {:<kind_width$}  {}", "Date", "Type", "Value").map_err(write_failed)?;
    for r in records {
        let label = r.bucket_label.format(TIMESTAMP_FORMAT).to_string();
        writeln!(w, "{label:<19}  {:<kind_width$}  {}", r.kind, r.value).map_err(write_failed)?;
    }
    Ok(())
}

/// Writes the records as a pretty-printed JSON array.
pub fn write_json<W: Write>(w: &mut W, records: &[ResampledRecord]) -> ResampleResult<()> {
    serde_json::to_writer_pretty(&mut *w, records)
        .map_err(|e| ResampleError::General(format!("write failed: {e}")))?;
    writeln!(w).map_err(write_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::parse::parse_timestamp;

    fn records() -> Vec<ResampledRecord> {
        vec![
            ResampledRecord {
                bucket_label: parse_timestamp("2017-01-03T10:00:00").unwrap(),
                kind: "TEMP".to_string(),
                value: 37.0,
            },
            ResampledRecord {
                bucket_label: parse_timestamp("2017-01-03T10:05:00").unwrap(),
                kind: "SPO2".to_string(),
                value: 99.5,
            },
        ]
    }

    #[test]
    fn test_write_table() {
        let mut buf = Vec::new();
        write_table(&mut buf, &records()).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("Date"));
        assert!(out.contains("2017-01-03T10:00:00  TEMP  37"));
        assert!(out.contains("2017-01-03T10:05:00  SPO2  99.5"));
    }

    #[test]
    fn test_write_table_empty() {
        let mut buf = Vec::new();
        write_table(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_write_json_round_trips() {
        let mut buf = Vec::new();
        write_json(&mut buf, &records()).unwrap();
        let parsed: Vec<ResampledRecord> =
            serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, records());
    }
}
