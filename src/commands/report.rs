//! Report command implementation.
//!
//! The report command:
//! 1. Runs nm on the binary
//! 2. Parses every output line (any failure aborts the run)
//! 3. Aggregates by namespace or by file
//! 4. Prints the console report
//! 5. Writes optional JSON and SVG outputs

use super::models::{ReportArgs, ReportMode};
use crate::aggregator::{
    build_namespace_tree, group_by_file, partition_by_type, render_file_groups, summarize,
};
use crate::flamegraph::generate_flamegraph;
use crate::nm::run_nm;
use crate::output::{
    render_namespace_report, render_symbol_list, to_report, validate_path, write_report,
    write_svg,
};
use crate::parser::{parse_lines, Symbol, SymbolType};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * nm could not be run
/// * an nm line could not be parsed (the line is printed first)
/// * output files could not be written
pub fn execute_report(args: &ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Reading symbols...");
    let lines = run_nm(&args.binary, &args.nm)
        .with_context(|| format!("Failed to read symbols from {}", args.binary.display()))?;

    info!("Step 2/3: Building report...");
    let stdout = std::io::stdout();
    let symbols = report_from_lines(&lines, args, &mut stdout.lock())?;

    info!("Step 3/3: Writing output files...");
    write_outputs(&symbols, args)?;

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Parse nm lines and print the console report to `out`
///
/// **Public** - the part of the command that does not need nm, used by tests
///
/// On a parse failure the offending line is written to `out` before the
/// error is returned, so the diagnostic stays next to any partial output.
pub fn report_from_lines<L: AsRef<[u8]>, W: Write>(
    lines: &[L],
    args: &ReportArgs,
    out: &mut W,
) -> Result<Vec<Symbol>> {
    let symbols = match parse_lines(lines) {
        Ok(symbols) => symbols,
        Err(e) => {
            writeln!(out, "Failed to parse nm line:")?;
            writeln!(out, "{}", e.raw_line().unwrap_or_default())?;
            return Err(e).context("Failed to parse nm output");
        }
    };
    debug!("Parsed {} of {} lines", symbols.len(), lines.len());

    let selected: Vec<&Symbol> = symbols
        .iter()
        .filter(|s| args.category.map_or(true, |c| s.symbol_type == c))
        .collect();

    match args.mode {
        ReportMode::Namespace => {
            for (symbol_type, members) in partition_by_type(selected.iter().copied()) {
                let summary = summarize(members.iter().copied());
                info!("{}: {}", symbol_type.label(), summary.summary());

                let tree = build_namespace_tree(members.iter().copied());
                writeln!(
                    out,
                    "{}\n",
                    render_namespace_report(symbol_type, &tree, args.max_depth)
                )?;
            }
        }
        ReportMode::File => {
            if !selected.iter().any(|s| s.has_source()) {
                warn!("No source locations in nm output, run with --line-numbers");
            }
            let groups = group_by_file(selected.iter().copied());
            writeln!(out, "{}", render_file_groups(&groups))?;
        }
        ReportMode::Symbols => {
            writeln!(out, "{}", render_symbol_list(selected.iter().copied()))?;
        }
    }

    Ok(symbols)
}

/// Write the JSON report and flamegraph, if requested
fn write_outputs(symbols: &[Symbol], args: &ReportArgs) -> Result<()> {
    if let Some(json_path) = &args.output_json {
        let report = to_report(&args.binary, symbols);
        write_report(&report, json_path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    if let Some(svg_path) = &args.output_svg {
        let symbol_type = args.category.unwrap_or(SymbolType::Text);
        let tree = build_namespace_tree(symbols.iter().filter(|s| s.symbol_type == symbol_type));
        let svg = generate_flamegraph(&tree, args.flamegraph_config.as_ref())
            .context("Failed to generate flamegraph")?;
        write_svg(&svg, svg_path).context("Failed to write flamegraph SVG")?;
        info!("✓ Flamegraph written to: {}", svg_path.display());
    }

    Ok(())
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.binary.as_os_str().is_empty() {
        anyhow::bail!("Binary path cannot be empty");
    }

    if !args.binary.is_file() {
        anyhow::bail!("Binary not found: {}", args.binary.display());
    }

    if args.nm.program.as_os_str().is_empty() {
        anyhow::bail!("nm program cannot be empty");
    }

    if let Some(path) = &args.output_json {
        validate_path(path).context("Invalid JSON output path")?;
    }

    if let Some(path) = &args.output_svg {
        validate_path(path).context("Invalid flamegraph output path")?;
    }

    if args.mode == ReportMode::File && !args.nm.line_numbers {
        warn!("File report without --line-numbers groups everything under one entry");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_valid() {
        let binary = NamedTempFile::new().unwrap();
        let args = ReportArgs {
            binary: binary.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_binary() {
        assert!(validate_args(&ReportArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_missing_binary() {
        let args = ReportArgs {
            binary: "/nonexistent/a.out".into(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_is_directory() {
        let binary = NamedTempFile::new().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let args = ReportArgs {
            binary: binary.path().to_path_buf(),
            output_json: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }
}
