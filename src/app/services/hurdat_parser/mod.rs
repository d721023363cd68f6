//! HURDAT2 parser for raw hurricane track text
//!
//! HURDAT2 interleaves two line shapes in a single flat file: header lines
//! carrying storm identity (`AL011970, TESTSTORM, 2,`) and track lines
//! carrying per-observation geophysical data. Headers are not repeated for
//! their observations, so the parser first separates the two classes, then
//! rebuilds the association positionally from each header's declared
//! observation count.
//!
//! ## Architecture
//!
//! - [`parser`] - Line classification and file reading
//! - [`header`] - Header table construction and identifier expansion
//! - [`record`] - Track line schema, sentinel handling, ID attachment

pub mod header;
pub mod parser;
pub mod record;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use header::{build_header_table, expand_identifiers};
pub use parser::{classify_lines, load_hurdat_file, ClassifiedLines};
pub use record::build_track_table;
