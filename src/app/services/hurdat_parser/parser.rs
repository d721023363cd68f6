//! Line classification for HURDAT2 files
//!
//! Splits raw text into header and track line sequences, preserving the
//! original file order within each class. Classification is deliberately
//! permissive: any line not starting with the basin prefix is a track
//! line, blank or otherwise. A malformed track line surfaces later as a
//! schema violation with its record number, which keeps the header/track
//! count invariant intact for alignment checking.

use std::path::Path;
use tracing::{debug, info};

use crate::error::{HurdatError, Result};

/// Raw lines split by class, in file order.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedLines {
    pub header_lines: Vec<String>,
    pub track_lines: Vec<String>,
}

/// Read a HURDAT2 file and classify its lines.
pub fn load_hurdat_file(path: &Path, basin_prefix: &str) -> Result<ClassifiedLines> {
    info!("Reading HURDAT2 file: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    classify_lines(&content, basin_prefix)
}

/// Classify each line of `content` as a header line (starts with the basin
/// prefix) or a track line (everything else).
///
/// Fails with a format error when no header line exists at all: without at
/// least one storm identity the positional ID attachment cannot be made.
pub fn classify_lines(content: &str, basin_prefix: &str) -> Result<ClassifiedLines> {
    let mut classified = ClassifiedLines::default();

    for line in content.lines() {
        if line.starts_with(basin_prefix) {
            classified.header_lines.push(line.to_string());
        } else {
            classified.track_lines.push(line.to_string());
        }
    }

    if classified.header_lines.is_empty() {
        return Err(HurdatError::Format {
            line_number: 1,
            reason: format!(
                "no line starts with basin prefix '{}': not a HURDAT2 file for this basin",
                basin_prefix
            ),
        });
    }

    debug!(
        "Classified {} header lines and {} track lines",
        classified.header_lines.len(),
        classified.track_lines.len()
    );

    Ok(classified)
}
