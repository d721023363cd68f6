//! Tests for feature derivation

mod distance_tests;
mod projection_tests;
