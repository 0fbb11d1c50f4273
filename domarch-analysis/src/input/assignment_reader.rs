//! Reader for tab-separated domain assignment records.
//!
//! Field layout per row: sequence id, evidence source, domain id, start,
//! end, then optionally a significance value and a mapped reference id.
//! A `-` in an optional field means absent.

use std::io::BufRead;

use domarch_core::errors::InputError;
use domarch_core::types::{Assignment, Interval};
use tracing::warn;

/// Assignments parsed from a reader, plus the per-line errors that were
/// skipped over.
#[derive(Debug, Default)]
pub struct ParsedAssignments {
    pub assignments: Vec<Assignment>,
    pub errors: Vec<InputError>,
}

/// Read assignment records, skipping malformed lines with a warning.
/// Empty lines and lines starting with `#` are ignored.
pub fn read_assignments(reader: impl BufRead) -> Result<ParsedAssignments, InputError> {
    let mut parsed = ParsedAssignments::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim_end();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_line(trimmed, line_no) {
            Ok(assignment) => parsed.assignments.push(assignment),
            Err(error) => {
                warn!(line = line_no, %error, "skipping malformed assignment record");
                parsed.errors.push(error);
            }
        }
    }

    Ok(parsed)
}

fn parse_line(line: &str, line_no: usize) -> Result<Assignment, InputError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 5 {
        return Err(InputError::MalformedRecord {
            line: line_no,
            message: format!("expected at least 5 fields, found {}", fields.len()),
        });
    }

    let start = parse_number(fields[3], "start position", line_no)?;
    let end = parse_number(fields[4], "end position", line_no)?;

    let significance = match optional_field(fields.get(5)) {
        None => None,
        Some(raw) => Some(raw.parse::<f64>().map_err(|_| InputError::MalformedRecord {
            line: line_no,
            message: format!("significance is not numeric: {raw:?}"),
        })?),
    };
    let reference_id = optional_field(fields.get(6)).map(str::to_string);

    Ok(Assignment {
        sequence_id: fields[0].to_string(),
        source: fields[1].to_string(),
        domain: fields[2].to_string(),
        interval: Interval::new(start, end),
        significance,
        reference_id,
    })
}

fn parse_number(raw: &str, what: &str, line_no: usize) -> Result<u32, InputError> {
    raw.parse::<u32>().map_err(|_| InputError::MalformedRecord {
        line: line_no,
        message: format!("{what} is not numeric: {raw:?}"),
    })
}

fn optional_field<'a>(field: Option<&&'a str>) -> Option<&'a str> {
    match field {
        Some(&raw) if !raw.is_empty() && raw != "-" => Some(raw),
        _ => None,
    }
}
