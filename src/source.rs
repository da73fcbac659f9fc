//! Reads measurements from delimited text with `Date`, `Type` and `Value`
//! columns. This is the boundary where textual dates become typed instants;
//! a non-datetime `Date` field fails here, before any resampling happens.
//!
//! The format is deliberately plain (comma separated, no quoting) which keeps
//! the row parser a few lines of hand-rolled splitting.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::common::parse::parse_timestamp;
use crate::common::types::Measurement;
use crate::error::{ResampleError, ResampleResult};

const DATE_COLUMN: &str = "Date";
const TYPE_COLUMN: &str = "Type";
const VALUE_COLUMN: &str = "Value";

struct ColumnLayout {
    date: usize,
    kind: usize,
    value: usize,
    width: usize,
}

fn parse_header(line: &str) -> ResampleResult<ColumnLayout> {
    let names: Vec<&str> = line.split(',').map(str::trim).collect();
    let find = |name: &str| {
        names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                ResampleError::InvalidRecord(format!(
                    "missing '{name}' column in header '{line}'"
                ))
            })
    };
    Ok(ColumnLayout {
        date: find(DATE_COLUMN)?,
        kind: find(TYPE_COLUMN)?,
        value: find(VALUE_COLUMN)?,
        width: names.len(),
    })
}

fn parse_row(layout: &ColumnLayout, line: &str, lineno: usize) -> ResampleResult<Measurement> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != layout.width {
        return Err(ResampleError::InvalidRecord(format!(
            "line {lineno}: expected {} fields, got {}",
            layout.width,
            fields.len()
        )));
    }
    let timestamp = parse_timestamp(fields[layout.date])?;
    let raw_value = fields[layout.value];
    let value = raw_value.parse::<f64>().map_err(|_| {
        ResampleError::InvalidNumber(format!(
            "line {lineno}: the Value field must be a number, got '{raw_value}'"
        ))
    })?;
    Ok(Measurement::new(timestamp, fields[layout.kind], value))
}

fn read_failed(e: io::Error) -> ResampleError {
    ResampleError::General(format!("read failed: {e}"))
}

/// Reads all measurements from `reader`. The first non-blank line must be a
/// header naming the three columns (in any order); blank lines are skipped.
/// An input with no rows yields an empty collection, not an error.
pub fn read_measurements<R: BufRead>(reader: R) -> ResampleResult<Vec<Measurement>> {
    let mut lines = reader.lines().enumerate();

    let layout = loop {
        match lines.next() {
            None => return Ok(Vec::new()),
            Some((_, line)) => {
                let line = line.map_err(read_failed)?;
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                break parse_header(trimmed)?;
            }
        }
    };

    let mut measurements = Vec::new();
    for (lineno, line) in lines {
        let line = line.map_err(read_failed)?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        measurements.push(parse_row(&layout, line, lineno + 1)?);
    }

    debug!(count = measurements.len(), "read measurements");
    Ok(measurements)
}

pub fn read_measurements_from_path(path: impl AsRef<Path>) -> ResampleResult<Vec<Measurement>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| ResampleError::General(format!("cannot open {}: {e}", path.display())))?;
    read_measurements(BufReader::new(file))
}
