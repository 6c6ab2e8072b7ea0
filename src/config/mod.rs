//! Configuration module for etch-grid
//!
//! Holds the canonical board dimension. Everything that needs the number of
//! cells per side reads it from here instead of deriving it from rendered output.

pub mod grid;

pub use grid::{ConfigError, GridConfig, parse_dimension_input};
