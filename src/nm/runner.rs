//! Runs `nm` against a binary and collects its output lines.

use crate::utils::config::{DEFAULT_NM_PROGRAM, NM_BASE_ARGS, NM_LINE_NUMBERS_ARG};
use crate::utils::error::NmError;
use log::{debug, info};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// How to invoke nm
#[derive(Debug, Clone)]
pub struct NmOptions {
    /// nm executable (name on PATH or full path)
    pub program: PathBuf,

    /// Ask nm for source locations (`-l`)
    pub line_numbers: bool,
}

impl Default for NmOptions {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_NM_PROGRAM),
            line_numbers: false,
        }
    }
}

impl NmOptions {
    /// Full argument list for inspecting `binary`
    pub fn args(&self, binary: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = NM_BASE_ARGS.iter().map(OsString::from).collect();
        if self.line_numbers {
            args.push(OsString::from(NM_LINE_NUMBERS_ARG));
        }
        args.push(binary.as_os_str().to_os_string());
        args
    }
}

/// Run nm on `binary` and return its stdout, one undecoded entry per line
///
/// **Public** - main entry point for reading symbol tables
///
/// # Errors
/// * `NmError::Spawn` - nm could not be started
/// * `NmError::Failed` - nm exited unsuccessfully
///
/// Lines are left as bytes so a decoding failure can be reported against
/// the exact line by the parser.
pub fn run_nm(binary: &Path, options: &NmOptions) -> Result<Vec<Vec<u8>>, NmError> {
    let program = options.program.display().to_string();
    let args = options.args(binary);

    info!("Reading symbols from: {}", binary.display());
    debug!("Running {} {:?}", program, args);

    let output = Command::new(&options.program)
        .args(&args)
        .output()
        .map_err(|source| NmError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(NmError::Failed {
            program,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let mut lines: Vec<Vec<u8>> = output
        .stdout
        .split(|byte| *byte == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    debug!("nm produced {} lines", lines.len());
    Ok(lines)
}
