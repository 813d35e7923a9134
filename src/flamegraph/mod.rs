//! Flamegraph generation using the inferno library.
//!
//! This module converts namespace trees into SVG flamegraphs where frame
//! width shows how many bytes a scope occupies.

pub mod generator;

// Re-export main types
pub use generator::{generate_flamegraph, FlamegraphConfig};
