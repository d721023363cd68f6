//! Test fixtures and helpers for the HURDAT2 parser
//!
//! Synthetic HURDAT2 snippets shared across the parser test modules.

mod parser_tests;

/// A minimal two-storm HURDAT2 fixture with well-formed lines.
pub fn create_test_hurdat() -> String {
    "\
AL011970,             TESTSTORM,      2,
19700801, 0000,  , TS, 28.0N,  94.8W,  45, 1002,   60,   60,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
19700801, 0600,  , TS, 28.3N,  95.2W,  50, 1000,   60,   60,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
AL021970,               UNNAMED,      1,
19700905, 1200,  , HU, 20.0N,  60.0W,  80,  970, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
"
    .to_string()
}

/// A single well-formed track line (21 fields, trailing comma).
pub fn sample_track_line() -> String {
    "19700801, 0000,  , TS, 28.0N,  94.8W,  45, 1002,   60,   60,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,".to_string()
}
