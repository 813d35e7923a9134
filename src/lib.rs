//! Footprint
//!
//! Size footprint reports for executables. Reads the symbol table through
//! `nm -C -S` and breaks the total size down by nested namespace or by
//! source file, so it is clear where code and data size comes from.
//!
//! ## Getting Started
//!
//! ```bash
//! footprint target/release/app
//! footprint --by file --line-numbers target/release/app
//! ```

pub mod aggregator;
pub mod commands;
pub mod flamegraph;
pub mod nm;
pub mod output;
pub mod parser;
pub mod utils;
