//! Error handling for HURDAT2 processing operations.
//!
//! Every error in the taxonomy is fatal: the pipeline has no retry or
//! partial-success mode. A violation aborts the run with the offending
//! row context so the source file can be fixed and the run repeated.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HurdatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Unparseable line shape at line {line_number}: {reason}")]
    Format { line_number: usize, reason: String },

    #[error("Schema violation in {record_kind} record {record_number}: expected {expected} fields, found {found} ('{line}')")]
    Schema {
        record_kind: &'static str,
        record_number: usize,
        expected: usize,
        found: usize,
        line: String,
    },

    #[error("Header/track alignment failure: headers declare {expected_rows} observations but {found_rows} track lines were read (corrupted or truncated input)")]
    Alignment {
        expected_rows: usize,
        found_rows: usize,
    },

    #[error("Synoptic schedule integrity violated: {reason}")]
    ScheduleIntegrity { reason: String },

    #[error("Parse error in {field} of record {record_number}: '{value}' ({reason})")]
    Parse {
        field: &'static str,
        record_number: usize,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl HurdatError {
    /// Schema error for a record that split into the wrong number of fields.
    pub fn schema(
        record_kind: &'static str,
        record_number: usize,
        expected: usize,
        found: usize,
        line: &str,
    ) -> Self {
        Self::Schema {
            record_kind,
            record_number,
            expected,
            found,
            line: line.trim_end().to_string(),
        }
    }

    /// Parse error with offending value context.
    pub fn parse(
        field: &'static str,
        record_number: usize,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::Parse {
            field,
            record_number,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn schedule(reason: impl Into<String>) -> Self {
        Self::ScheduleIntegrity {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HurdatError>;
