//! Reader for pairwise alignment records produced by the external
//! alignment step.
//!
//! Two tabular layouts are accepted: the standard 12-column BLAST tabular
//! format (query, hit, identity, alignment length, ..., e-value, bit score)
//! and a compact 5-column form (query, hit, identity, alignment length,
//! significance). Query/hit order is not significant downstream.

use std::io::BufRead;

use domarch_core::errors::InputError;
use tracing::warn;

use crate::graph::AlignmentRecord;

/// Alignment records parsed from a reader, plus the per-line errors that
/// were skipped over.
#[derive(Debug, Default)]
pub struct ParsedAlignments {
    pub records: Vec<AlignmentRecord>,
    pub errors: Vec<InputError>,
}

/// Read alignment records, skipping malformed lines with a warning.
/// Empty lines and lines starting with `#` are ignored.
pub fn read_alignments(reader: impl BufRead) -> Result<ParsedAlignments, InputError> {
    let mut parsed = ParsedAlignments::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim_end();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_line(trimmed, line_no) {
            Ok(record) => parsed.records.push(record),
            Err(error) => {
                warn!(line = line_no, %error, "skipping malformed alignment record");
                parsed.errors.push(error);
            }
        }
    }

    Ok(parsed)
}

fn parse_line(line: &str, line_no: usize) -> Result<AlignmentRecord, InputError> {
    let fields: Vec<&str> = line.split('\t').collect();
    let significance_field = match fields.len() {
        0..=4 => {
            return Err(InputError::MalformedRecord {
                line: line_no,
                message: format!("expected at least 5 fields, found {}", fields.len()),
            })
        }
        // Compact form carries the significance in column 5; BLAST tabular
        // puts the e-value in column 11.
        5..=11 => 4,
        _ => 10,
    };

    Ok(AlignmentRecord {
        query_id: fields[0].to_string(),
        hit_id: fields[1].to_string(),
        identity: parse_float(fields[2], "percent identity", line_no)?,
        alignment_length: parse_float(fields[3], "alignment length", line_no)?,
        significance: parse_float(fields[significance_field], "significance", line_no)?,
    })
}

fn parse_float(raw: &str, what: &str, line_no: usize) -> Result<f64, InputError> {
    raw.parse::<f64>().map_err(|_| InputError::MalformedRecord {
        line: line_no,
        message: format!("{what} is not numeric: {raw:?}"),
    })
}
