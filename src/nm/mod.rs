//! Invocation of the external symbol dump tool.

pub mod runner;

pub use runner::{run_nm, NmOptions};
